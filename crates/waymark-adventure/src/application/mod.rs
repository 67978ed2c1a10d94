//! Loading and rendering stories.

pub mod loader;
pub mod renderer;
