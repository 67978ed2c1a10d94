//! Route modules.

pub mod adventure;
pub mod health;
pub mod path;
pub mod redirect;
