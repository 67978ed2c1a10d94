//! The branching story graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A choice offered at the end of a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterOption {
    /// Text shown to the player.
    pub text: String,
    /// Key of the chapter this option leads to.
    #[serde(rename = "arc")]
    pub target: String,
}

/// One node of the story graph.
///
/// A chapter without options ends the adventure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter heading.
    pub title: String,
    /// Narrative paragraphs, in reading order.
    #[serde(rename = "story")]
    pub paragraphs: Vec<String>,
    /// Choices leading to other chapters, in display order.
    pub options: Vec<ChapterOption>,
}

impl Chapter {
    /// Whether the adventure ends here.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.options.is_empty()
    }
}

/// A complete adventure: its chapters and where it begins.
///
/// Option targets are not checked against the chapter keys; a dangling
/// target only shows up as a not-found page when a player follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Key of the chapter a new reader starts with.
    #[serde(rename = "initial-chapter")]
    pub initial_chapter: String,
    /// All chapters by key.
    pub chapters: HashMap<String, Chapter>,
}

impl Story {
    /// Looks up a chapter by key.
    #[must_use]
    pub fn chapter(&self, key: &str) -> Option<&Chapter> {
        self.chapters.get(key)
    }

    /// The chapter the story starts with, if it exists.
    #[must_use]
    pub fn initial_chapter(&self) -> Option<&Chapter> {
        self.chapter(&self.initial_chapter)
    }

    /// Every `(chapter key, target)` pair whose target names no chapter,
    /// sorted for stable output.
    #[must_use]
    pub fn dangling_options(&self) -> Vec<(&str, &str)> {
        let mut dangling: Vec<(&str, &str)> = self
            .chapters
            .iter()
            .flat_map(|(key, chapter)| {
                chapter
                    .options
                    .iter()
                    .filter(|option| !self.chapters.contains_key(&option.target))
                    .map(move |option| (key.as_str(), option.target.as_str()))
            })
            .collect();
        dangling.sort_unstable();
        dangling
    }
}
