//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions (tiles per axis, square board)
pub const GRID_TILES: i8 = 20;

/// Game timing constants (in milliseconds)
pub const BASE_TICK_MS: u32 = 200;
pub const TICK_FLOOR_MS: u32 = 50;
/// Food consumption shaves this off the tick interval while above the floor.
pub const FOOD_SPEEDUP_MS: u32 = 10;
/// Speed/Slow power-ups move the interval by this step.
pub const POWER_UP_PACE_MS: u32 = 50;
/// Double points stays active for this much game time after pickup.
pub const DOUBLE_POINTS_MS: u32 = 5000;

/// Power-up spawn chance on food consumption, as numerator over [`SPAWN_CHANCE_DEN`].
pub const SPAWN_CHANCE_NUM: u32 = 3;
pub const SPAWN_CHANCE_DEN: u32 = 10;

/// Fixed round start cells
pub const SNAKE_START: Position = Position { x: 10, y: 10 };
pub const FOOD_START: Position = Position { x: 5, y: 5 };

/// A grid cell coordinate, valid range [0, GRID_TILES) on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Offset by a raw delta (result may be out of bounds)
    pub fn offset(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighboring cell in a direction (result may be out of bounds)
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }

    /// Whether the cell lies inside the grid
    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < GRID_TILES && self.y >= 0 && self.y < GRID_TILES
    }
}

/// Travel directions, as unit deltas on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta (dx, dy); exactly one component is non-zero
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// True if `self` and `other` travel along the same axis.
    ///
    /// A turn is only legal onto the perpendicular axis; this is the reversal
    /// guard (it also makes "re-pressing" the current direction a no-op).
    pub fn same_axis(&self, other: Direction) -> bool {
        let (dx, _) = self.delta();
        let (ox, _) = other.delta();
        (dx != 0) == (ox != 0)
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Permanently shortens the tick interval (floored)
    Speed,
    /// Permanently lengthens the tick interval (no ceiling)
    Slow,
    /// Doubles food score for a limited time
    DoublePoints,
}

impl PowerUpKind {
    /// All kinds, in spawn-roll order
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Speed,
        PowerUpKind::Slow,
        PowerUpKind::DoublePoints,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::Speed => "speed",
            PowerUpKind::Slow => "slow",
            PowerUpKind::DoublePoints => "double",
        }
    }
}

/// A power-up waiting on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUp {
    pub pos: Position,
    pub kind: PowerUpKind,
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Turn(Direction),
    Pause,
    ToggleAutopilot,
    Restart,
}

impl GameAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" => Some(GameAction::Pause),
            "autopilot" => Some(GameAction::ToggleAutopilot),
            "restart" => Some(GameAction::Restart),
            other => Direction::from_str(other).map(GameAction::Turn),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(dir) => dir.as_str(),
            GameAction::Pause => "pause",
            GameAction::ToggleAutopilot => "autopilot",
            GameAction::Restart => "restart",
        }
    }
}

/// Observable events emitted by a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    FoodEaten,
    PowerUpCollected(PowerUpKind),
    /// The tick interval changed; the scheduler must re-arm at the new period.
    PaceChanged(u32),
    GameOver { score: u32 },
}

/// Status of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// Paused or dead: nothing moved
    Idle,
    /// The snake advanced
    Continuing,
    /// The candidate head collided; the round is over
    GameOver,
}

/// Cosmetic snake skins (presentation only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skin {
    Classic,
    Neon,
    Dark,
    Rainbow,
}

impl Skin {
    /// Cycle to the next skin
    pub fn next(&self) -> Self {
        match self {
            Skin::Classic => Skin::Neon,
            Skin::Neon => Skin::Dark,
            Skin::Dark => Skin::Rainbow,
            Skin::Rainbow => Skin::Classic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Skin::Classic => "classic",
            Skin::Neon => "neon",
            Skin::Dark => "dark",
            Skin::Rainbow => "rainbow",
        }
    }
}
