//! Read-only state snapshot handed to presentation each frame.

use crate::types::{Position, PowerUp, FOOD_START, SNAKE_START};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Snake cells, head first
    pub snake: Vec<Position>,
    pub food: Position,
    pub power_ups: Vec<PowerUp>,
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
    pub autopilot: bool,
    pub double_points: bool,
    /// Current tick interval (pace) in milliseconds
    pub tick_interval_ms: u32,
    pub seed: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: vec![SNAKE_START],
            food: FOOD_START,
            power_ups: Vec::new(),
            score: 0,
            paused: false,
            game_over: false,
            autopilot: false,
            double_points: false,
            tick_interval_ms: crate::types::BASE_TICK_MS,
            seed: 0,
        }
    }
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}
