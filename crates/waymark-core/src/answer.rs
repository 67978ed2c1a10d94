//! Answer source abstraction for the quiz.
//!
//! In production, answers come from standard input. In tests, a scripted
//! implementation is injected.

use async_trait::async_trait;

/// Abstraction over where quiz answers come from.
#[async_trait]
pub trait AnswerSource: Send {
    /// Waits for the next answer.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    async fn next_answer(&mut self) -> std::io::Result<Option<String>>;
}
