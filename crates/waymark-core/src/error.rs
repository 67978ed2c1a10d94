//! Load error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading an input document at startup.
///
/// Every variant is fatal: the binaries log it and exit.
#[derive(Debug, Error)]
pub enum LoadError {
    /// An input file could not be opened.
    #[error("unable to open {}: {source}", path.display())]
    Open {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from an already opened input failed.
    #[error("unable to read input: {0}")]
    Read(#[from] std::io::Error),

    /// The document is malformed or does not match the expected shape.
    #[error("{format} parser error: {message}")]
    Parse {
        /// Name of the document format (`JSON`, `YAML`, `CSV`).
        format: &'static str,
        /// The parser's own description of the problem.
        message: String,
    },

    /// A template failed to compile.
    #[error("template error: {0}")]
    Template(String),
}

impl LoadError {
    /// Builds a `Parse` error from any displayable parser error.
    pub fn parse(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            format,
            message: err.to_string(),
        }
    }
}
