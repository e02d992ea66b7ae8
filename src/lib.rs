//! Terminal Snake.
//!
//! Grid movement, food and power-ups, a greedy chase autopilot, cosmetic
//! skins and a persisted leaderboard, split the usual way:
//!
//! - [`core`]: pure, deterministic game rules (the tick algorithm)
//! - [`engine`]: the re-armable tick scheduler
//! - [`input`]: keyboard mapping
//! - [`term`]: framebuffer rendering and the game view
//! - [`storage`]: the persisted score ledger
//! - [`types`]: shared constants and data types
//!
//! # Example
//!
//! ```
//! use tui_snake::core::GameState;
//! use tui_snake::types::{Direction, TickStatus};
//!
//! let mut game = GameState::new(12345);
//! game.set_direction(Direction::Up);
//! let outcome = game.tick();
//! assert_eq!(outcome.status, TickStatus::Continuing);
//! ```

pub mod core;
pub mod engine;
pub mod input;
pub mod storage;
pub mod term;
pub mod types;
