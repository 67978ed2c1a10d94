//! Waymark — timed quiz.
//!
//! Reads question/answer pairs from CSV, asks them one at a time and races
//! the answering loop against a time limit.

pub mod answers;
pub mod error;
pub mod problem;
pub mod reader;
pub mod session;

pub use error::QuizError;
pub use problem::Problem;
pub use session::{QuizReport, run_quiz};
