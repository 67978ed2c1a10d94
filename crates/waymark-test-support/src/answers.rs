//! Test answer sources — deterministic `AnswerSource` implementations.

use std::collections::VecDeque;

use async_trait::async_trait;
use waymark_core::answer::AnswerSource;

/// An answer source that replays a fixed list of answers.
///
/// Once the list is exhausted it either reports end of input or, when built
/// with [`ScriptedAnswers::then_stall`], never answers again. The stalling
/// variant stands in for a player who stops typing.
#[derive(Debug)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
    stall_when_exhausted: bool,
}

impl ScriptedAnswers {
    /// Replays `answers`, then reports end of input.
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            stall_when_exhausted: false,
        }
    }

    /// Replays `answers`, then waits forever.
    #[must_use]
    pub fn then_stall<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stall_when_exhausted: true,
            ..Self::new(answers)
        }
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn next_answer(&mut self) -> std::io::Result<Option<String>> {
        match self.answers.pop_front() {
            Some(answer) => Ok(Some(answer)),
            None if self.stall_when_exhausted => std::future::pending().await,
            None => Ok(None),
        }
    }
}

/// An answer source whose every read fails.
#[derive(Debug)]
pub struct FailingAnswers;

#[async_trait]
impl AnswerSource for FailingAnswers {
    async fn next_answer(&mut self) -> std::io::Result<Option<String>> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stdin closed",
        ))
    }
}
