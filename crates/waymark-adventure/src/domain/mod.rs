//! Story domain model.

pub mod story;
