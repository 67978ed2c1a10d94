//! A timed quiz run.
//!
//! The answering loop and the timer race each other. Whichever finishes
//! first decides the outcome; the other is dropped without being awaited.

use std::fmt;
use std::io::Write;
use std::time::Duration;

use tracing::{debug, info};
use waymark_core::answer::AnswerSource;

use crate::error::QuizError;
use crate::problem::Problem;

/// Final result of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizReport {
    /// Problems answered correctly before the run ended.
    pub correct: usize,
    /// Problems in the quiz.
    pub total: usize,
    /// Whether the time limit cut the run short.
    pub timed_out: bool,
}

impl fmt::Display for QuizReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.timed_out {
            f.write_str("Timeout expired. ")?;
        }
        write!(f, "You scored {} out of {}.", self.correct, self.total)
    }
}

/// Asks every problem in order, writing prompts to `out` and reading
/// answers from `answers`, until all are answered, the answers run out, or
/// `limit` elapses.
///
/// A problem whose answer is still pending when the timer fires does not
/// count.
///
/// # Errors
///
/// Returns `QuizError::Io` if writing a prompt or reading an answer fails
/// before the time limit.
pub async fn run_quiz<W: Write>(
    problems: &[Problem],
    answers: &mut dyn AnswerSource,
    out: &mut W,
    limit: Duration,
) -> Result<QuizReport, QuizError> {
    let mut correct = 0;

    let timed_out = tokio::select! {
        result = ask_all(problems, answers, out, &mut correct) => {
            result?;
            false
        }
        () = tokio::time::sleep(limit) => true,
    };

    let report = QuizReport {
        correct,
        total: problems.len(),
        timed_out,
    };
    info!(
        correct = report.correct,
        total = report.total,
        timed_out = report.timed_out,
        "quiz finished"
    );
    Ok(report)
}

async fn ask_all<W: Write>(
    problems: &[Problem],
    answers: &mut dyn AnswerSource,
    out: &mut W,
    correct: &mut usize,
) -> Result<(), QuizError> {
    for (index, problem) in problems.iter().enumerate() {
        write!(out, "Problem #{}: {} = ", index + 1, problem.question)?;
        out.flush()?;

        let Some(answer) = answers.next_answer().await? else {
            debug!(asked = index + 1, "answers exhausted");
            return Ok(());
        };
        if problem.is_correct(&answer) {
            *correct += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_test_support::{FailingAnswers, ScriptedAnswers};

    const LIMIT: Duration = Duration::from_secs(30);

    fn problems() -> Vec<Problem> {
        vec![
            Problem::new("2+2", "4"),
            Problem::new("capital of France", "Paris"),
        ]
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_correct_answers_score_full_marks() {
        // Arrange
        let mut answers = ScriptedAnswers::new(["4", "Paris"]);
        let mut out = Vec::new();

        // Act
        let report = run_quiz(&problems(), &mut answers, &mut out, LIMIT)
            .await
            .unwrap();

        // Assert
        assert_eq!(
            report,
            QuizReport {
                correct: 2,
                total: 2,
                timed_out: false
            }
        );
        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(
            transcript,
            "Problem #1: 2+2 = Problem #2: capital of France = "
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_answers_compare_case_and_whitespace_insensitively() {
        let mut answers = ScriptedAnswers::new([" 4", "  pARIS  "]);

        let report = run_quiz(&problems(), &mut answers, &mut Vec::new(), LIMIT)
            .await
            .unwrap();

        assert_eq!(report.correct, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_answers_are_not_counted() {
        let mut answers = ScriptedAnswers::new(["5", "Paris"]);

        let report = run_quiz(&problems(), &mut answers, &mut Vec::new(), LIMIT)
            .await
            .unwrap();

        assert_eq!(report.correct, 1);
        assert!(!report.timed_out);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_counts_only_answered_problems() {
        // Arrange
        let mut problems = problems();
        problems.push(Problem::new("3*3", "9"));
        let mut answers = ScriptedAnswers::then_stall(["4"]);
        let mut out = Vec::new();

        // Act
        let report = run_quiz(&problems, &mut answers, &mut out, LIMIT)
            .await
            .unwrap();

        // Assert
        assert_eq!(
            report,
            QuizReport {
                correct: 1,
                total: 3,
                timed_out: true
            }
        );
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.ends_with("Problem #2: capital of France = "));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_fires_after_limit() {
        let start = tokio::time::Instant::now();
        let mut answers = ScriptedAnswers::then_stall(Vec::<String>::new());

        let report = run_quiz(&problems(), &mut answers, &mut Vec::new(), LIMIT)
            .await
            .unwrap();

        assert!(report.timed_out);
        assert_eq!(report.correct, 0);
        assert!(start.elapsed() >= LIMIT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_answers_end_the_quiz_early() {
        let mut answers = ScriptedAnswers::new(["4"]);

        let report = run_quiz(&problems(), &mut answers, &mut Vec::new(), LIMIT)
            .await
            .unwrap();

        assert_eq!(
            report,
            QuizReport {
                correct: 1,
                total: 2,
                timed_out: false
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_answer_read_failure_is_an_error() {
        let result = run_quiz(&problems(), &mut FailingAnswers, &mut Vec::new(), LIMIT).await;

        assert!(matches!(result, Err(QuizError::Io(_))));
    }

    #[test]
    fn test_report_display() {
        let finished = QuizReport {
            correct: 2,
            total: 3,
            timed_out: false,
        };
        let expired = QuizReport {
            timed_out: true,
            ..finished
        };

        assert_eq!(finished.to_string(), "You scored 2 out of 3.");
        assert_eq!(expired.to_string(), "Timeout expired. You scored 2 out of 3.");
    }
}
