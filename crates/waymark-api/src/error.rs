//! Waymark — server error types.

use thiserror::Error;
use waymark_core::error::LoadError;

/// Startup and runtime errors for the web server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A command-line or environment setting is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The story, template or redirect file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
