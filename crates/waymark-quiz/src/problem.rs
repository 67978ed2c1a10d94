//! Quiz problems and answer checking.

use rand::Rng;
use rand::seq::SliceRandom;

/// A single question with its expected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// The question shown to the player.
    pub question: String,
    /// The expected answer.
    pub answer: String,
}

impl Problem {
    /// Creates a problem.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Whether `answer` matches the expected answer, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        normalize(answer) == normalize(&self.answer)
    }
}

/// Trims surrounding whitespace and lowercases.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Puts `problems` in random order.
pub fn shuffle_problems<R: Rng + ?Sized>(problems: &mut [Problem], rng: &mut R) {
    problems.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_is_correct_ignores_case_and_whitespace() {
        let problem = Problem::new("capital of France", "Paris");

        assert!(problem.is_correct("paris"));
        assert!(problem.is_correct("  PARIS \t"));
        assert!(!problem.is_correct("Lyon"));
    }

    #[test]
    fn test_is_correct_normalizes_expected_answer() {
        let problem = Problem::new("2+2", " 4 ");

        assert!(problem.is_correct("4"));
    }

    #[test]
    fn test_shuffle_keeps_every_problem() {
        let original: Vec<Problem> = (0..20)
            .map(|i| Problem::new(format!("{i}+0"), i.to_string()))
            .collect();
        let mut shuffled = original.clone();
        let mut rng = StdRng::seed_from_u64(7);

        shuffle_problems(&mut shuffled, &mut rng);

        let mut sorted = shuffled.clone();
        sorted.sort_by(|a, b| a.question.cmp(&b.question));
        let mut expected = original.clone();
        expected.sort_by(|a, b| a.question.cmp(&b.question));
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_shuffle_is_deterministic_for_a_seed() {
        let original: Vec<Problem> = (0..10)
            .map(|i| Problem::new(i.to_string(), i.to_string()))
            .collect();
        let mut first = original.clone();
        let mut second = original;

        shuffle_problems(&mut first, &mut StdRng::seed_from_u64(42));
        shuffle_problems(&mut second, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }
}
