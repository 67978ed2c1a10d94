//! Chapter rendering.

use std::path::Path;

use minijinja::{AutoEscape, Environment};
use thiserror::Error;
use waymark_core::error::LoadError;
use waymark_core::input;

use crate::domain::story::Chapter;

/// A template failed while rendering a chapter.
#[derive(Debug, Error)]
#[error("unable to render chapter: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Renders chapters through a template compiled once at startup.
///
/// The template sees the chapter's own fields: `title`, `story` (the
/// paragraphs) and `options` (each with `text` and `arc`). Output is always
/// HTML-escaped.
#[derive(Debug)]
pub struct ChapterRenderer {
    env: Environment<'static>,
    name: String,
}

impl ChapterRenderer {
    /// Compiles `source` under `name`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Template` if the template has a syntax error.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Result<Self, LoadError> {
        let name = name.into();
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template_owned(name.clone(), source.into())
            .map_err(|e| LoadError::Template(e.to_string()))?;
        Ok(Self { env, name })
    }

    /// Reads and compiles the template file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Open` if the file cannot be read and
    /// `LoadError::Template` if it does not compile.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let source = input::read_to_string(path)?;
        Self::new(path.display().to_string(), source)
    }

    /// Renders `chapter` to a string.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if template evaluation fails.
    pub fn render(&self, chapter: &Chapter) -> Result<String, RenderError> {
        let template = self.env.get_template(&self.name)?;
        Ok(template.render(chapter)?)
    }
}
