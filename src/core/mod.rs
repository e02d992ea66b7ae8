//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, timers, or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed produces identical rounds
//! - **Testable**: the tick algorithm is exercised directly, no terminal needed
//! - **Portable**: any shell (terminal, headless) can drive it

pub mod autopilot;
pub mod game_state;
pub mod rng;
pub mod snake;
pub mod snapshot;

// Re-export commonly used types
pub use game_state::{GameState, TickOutcome, MAX_TICK_EVENTS};
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
