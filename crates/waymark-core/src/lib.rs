//! Waymark Core — shared abstractions for the Waymark exercises.
//!
//! This crate defines the error type every loader reports, the document
//! formats the loaders understand, and the answer-source seam used by the
//! quiz. It contains no HTTP or terminal code.

pub mod answer;
pub mod error;
pub mod format;
pub mod input;
