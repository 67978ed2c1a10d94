//! Waymark — URL shortener.
//!
//! Turns a list of `{path, url}` records into a lookup map. The HTTP side
//! (answering with a redirect or handing off to a fallback) lives in
//! `waymark-api`.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use waymark_core::error::LoadError;
use waymark_core::format::Format;
use waymark_core::input;

/// One redirect record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRedirect {
    /// Request path to match, e.g. `/docs`.
    pub path: String,
    /// Where to send the client.
    pub url: String,
}

/// Parses a YAML sequence of redirect records.
///
/// # Errors
///
/// Returns `LoadError::Parse` if the YAML is malformed or not a sequence of
/// `{path, url}` records.
pub fn parse_yaml(bytes: &[u8]) -> Result<Vec<PathRedirect>, LoadError> {
    Format::Yaml.decode(bytes)
}

/// Parses a JSON array of redirect records.
///
/// # Errors
///
/// Returns `LoadError::Parse` if the JSON is malformed or not an array of
/// `{path, url}` records.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<PathRedirect>, LoadError> {
    Format::Json.decode(bytes)
}

/// Builds the path → URL map. A later record for the same path replaces an
/// earlier one.
#[must_use]
pub fn build_map(redirects: &[PathRedirect]) -> HashMap<String, String> {
    redirects
        .iter()
        .map(|r| (r.path.clone(), r.url.clone()))
        .collect()
}

/// An immutable path → URL lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectMap {
    targets: HashMap<String, String>,
}

impl RedirectMap {
    /// Builds a map from redirect records, last write wins.
    #[must_use]
    pub fn from_records(redirects: &[PathRedirect]) -> Self {
        Self {
            targets: build_map(redirects),
        }
    }

    /// Builds a map from `(path, url)` pairs, last write wins.
    #[must_use]
    pub fn from_pairs<I, P, U>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, U)>,
        P: Into<String>,
        U: Into<String>,
    {
        Self {
            targets: pairs
                .into_iter()
                .map(|(path, url)| (path.into(), url.into()))
                .collect(),
        }
    }

    /// Parses YAML records into a map.
    ///
    /// # Errors
    ///
    /// See [`parse_yaml`].
    pub fn from_yaml(bytes: &[u8]) -> Result<Self, LoadError> {
        parse_yaml(bytes).map(|records| Self::from_records(&records))
    }

    /// Parses JSON records into a map.
    ///
    /// # Errors
    ///
    /// See [`parse_json`].
    pub fn from_json(bytes: &[u8]) -> Result<Self, LoadError> {
        parse_json(bytes).map(|records| Self::from_records(&records))
    }

    /// Loads the redirect file at `path`; `.yaml`/`.yml` files are read as
    /// YAML, anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Open` if the file cannot be opened, `LoadError::Read`
    /// if reading it fails, and `LoadError::Parse` for malformed records.
    #[instrument(fields(path = %path.display()))]
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        input::open(path)?.read_to_end(&mut bytes)?;
        let map = match Format::from_path(path) {
            Format::Yaml => Self::from_yaml(&bytes)?,
            Format::Json => Self::from_json(&bytes)?,
        };
        debug!(redirects = map.len(), "redirect map loaded");
        Ok(map)
    }

    /// The redirect target for `path`, if any.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.targets.get(path).map(String::as_str)
    }

    /// Number of mapped paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no path is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
