//! Line-oriented answer sources.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use waymark_core::answer::AnswerSource;

/// Answers read one per line from an async reader.
#[derive(Debug)]
pub struct LineAnswers<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> LineAnswers<R> {
    /// Reads answers from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl LineAnswers<BufReader<Stdin>> {
    /// Reads answers from standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> AnswerSource for LineAnswers<R> {
    async fn next_answer(&mut self) -> std::io::Result<Option<String>> {
        self.lines.next_line().await
    }
}
