//! Shared test fixtures and answer sources for the Waymark exercises.

mod answers;
pub mod fixtures;

pub use answers::{FailingAnswers, ScriptedAnswers};
