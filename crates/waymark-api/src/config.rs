//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::error::AppError;

/// Serves a choose-your-own-adventure story over HTTP.
#[derive(Debug, Clone, Parser)]
#[command(name = "waymark-web", version, about, long_about = None)]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on for story requests.
    #[arg(long, env = "PORT", default_value_t = 3030)]
    pub port: u16,

    /// Template used to render each chapter.
    #[arg(long)]
    pub template: PathBuf,

    /// Story document (JSON, or YAML by extension).
    #[arg(long)]
    pub adventure: PathBuf,

    /// Path prefix chapters are served under.
    #[arg(long, default_value = "/stories/", value_parser = parse_prefix)]
    pub prefix: String,

    /// Optional short-link file (YAML or JSON list of `path`/`url` records)
    /// answering every path outside the story prefix.
    #[arg(long)]
    pub redirects: Option<PathBuf>,
}

impl ServerConfig {
    /// The address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if host and port do not form a socket
    /// address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

/// Normalises a route prefix to start and end with `/`.
///
/// # Errors
///
/// Returns a message if the prefix contains route syntax (`{` or `}`).
pub fn parse_prefix(raw: &str) -> Result<String, String> {
    if raw.contains(['{', '}']) {
        return Err(format!("prefix must not contain route parameters: {raw}"));
    }
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        Ok("/".to_owned())
    } else {
        Ok(format!("/{trimmed}/"))
    }
}
