//! Waymark HTTP server.
//!
//! Serves rendered adventure chapters under a path prefix and, when a
//! redirect map is configured, answers every other path with a short-link
//! redirect or a 404.

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
