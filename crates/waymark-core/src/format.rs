//! Structured document formats.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;

/// A structured text format a document can be decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// JSON, the default.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl Format {
    /// Picks the format from a file extension: `.yaml` and `.yml` are YAML,
    /// anything else is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Human-readable format name used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// Decodes a complete document from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Parse` if the bytes are not a well-formed document
    /// of this format or do not match the shape of `T`.
    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, LoadError> {
        match self {
            Self::Json => {
                serde_json::from_slice(bytes).map_err(|e| LoadError::parse(self.name(), e))
            }
            Self::Yaml => {
                serde_yaml::from_slice(bytes).map_err(|e| LoadError::parse(self.name(), e))
            }
        }
    }

    /// Decodes a complete document from a reader.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Parse` if the stream is not a well-formed document
    /// of this format or does not match the shape of `T`.
    pub fn decode_reader<T: DeserializeOwned, R: Read>(self, reader: R) -> Result<T, LoadError> {
        match self {
            Self::Json => {
                serde_json::from_reader(reader).map_err(|e| LoadError::parse(self.name(), e))
            }
            Self::Yaml => {
                serde_yaml::from_reader(reader).map_err(|e| LoadError::parse(self.name(), e))
            }
        }
    }
}
