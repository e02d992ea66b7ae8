//! RNG module - deterministic spawn placement
//!
//! A simple LCG keeps rounds reproducible per seed: the same seed yields the
//! same food and power-up placements, which makes engine tests and replays
//! deterministic.

use crate::types::{Position, GRID_TILES};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Roll a Bernoulli trial with probability num/den
    pub fn chance(&mut self, num: u32, den: u32) -> bool {
        self.next_range(den) < num
    }

    /// Draw a uniformly random grid cell
    pub fn next_position(&mut self) -> Position {
        let x = self.next_range(GRID_TILES as u32) as i8;
        let y = self.next_range(GRID_TILES as u32) as i8;
        Position::new(x, y)
    }
}
