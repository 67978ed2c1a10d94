//! Waymark — choose-your-own-adventure stories.
//!
//! Responsible for the in-memory story graph, loading it from a JSON or
//! YAML document, and rendering single chapters through a template.

pub mod application;
pub mod domain;
