//! Input module - keyboard handling for terminal environments.

pub mod handler;

pub use handler::{map_key, should_quit, InputCommand};
