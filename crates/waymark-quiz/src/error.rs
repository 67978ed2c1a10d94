//! Quiz error types.

use thiserror::Error;
use waymark_core::error::LoadError;

/// Errors that end a quiz run.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The problem file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Writing a prompt or reading an answer failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
