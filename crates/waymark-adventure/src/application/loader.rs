//! Adventure loader.
//!
//! Decodes a story document in one step: the caller gets either a complete
//! `Story` or an error, never a partially filled chapter map.

use std::io::Read;
use std::path::Path;

use tracing::{debug, instrument};
use waymark_core::error::LoadError;
use waymark_core::format::Format;
use waymark_core::input;

use crate::domain::story::Story;

/// Decodes a story from `reader`.
///
/// # Errors
///
/// Returns `LoadError::Parse` if the document is malformed, misses a
/// required field, or has a field of the wrong type.
pub fn load_story<R: Read>(reader: R, format: Format) -> Result<Story, LoadError> {
    format.decode_reader(reader)
}

/// Opens and decodes the story file at `path`, choosing the format from the
/// file extension.
///
/// # Errors
///
/// Returns `LoadError::Open` if the file cannot be opened and
/// `LoadError::Parse` if its contents are not a valid story.
#[instrument(fields(path = %path.display()))]
pub fn load_story_file(path: &Path) -> Result<Story, LoadError> {
    let format = Format::from_path(path);
    let story = load_story(input::open(path)?, format)?;
    debug!(
        chapters = story.chapters.len(),
        initial_chapter = %story.initial_chapter,
        "story loaded"
    );
    Ok(story)
}
