//! Game state module - owns the complete round state and the tick algorithm
//!
//! Movement, collision, food and power-up consumption, scoring and pace all
//! resolve here. The module is pure and deterministic per seed: no I/O, no
//! timers. An external scheduler invokes [`GameState::tick`] at the current
//! pace and re-arms itself when a tick reports [`GameEvent::PaceChanged`].

use arrayvec::ArrayVec;

use crate::core::autopilot;
use crate::core::rng::SimpleRng;
use crate::core::snake::Snake;
use crate::core::snapshot::GameSnapshot;
use crate::types::*;

/// Upper bound on events a single tick can emit. Food, a handful of stacked
/// power-ups and one pace notification fit comfortably.
pub const MAX_TICK_EVENTS: usize = 8;

/// What a single tick produced: a status plus the events observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub status: TickStatus,
    pub events: ArrayVec<GameEvent, MAX_TICK_EVENTS>,
}

impl TickOutcome {
    fn idle() -> Self {
        Self {
            status: TickStatus::Idle,
            events: ArrayVec::new(),
        }
    }
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    /// Latest accepted direction; the next tick travels this way.
    direction: Direction,
    food: Position,
    power_ups: Vec<PowerUp>,
    score: u32,
    alive: bool,
    paused: bool,
    autopilot: bool,
    /// Remaining double-points game time in ms; active while non-zero.
    double_points_ms: u32,
    /// Current pace: real-time interval between ticks.
    tick_interval_ms: u32,
    rng: SimpleRng,
    seed: u32,
}

impl GameState {
    /// Create a fresh round with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            snake: Snake::new(SNAKE_START),
            direction: Direction::Right,
            food: FOOD_START,
            power_ups: Vec::new(),
            score: 0,
            alive: true,
            paused: false,
            autopilot: false,
            double_points_ms: 0,
            tick_interval_ms: BASE_TICK_MS,
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Restart the round in place.
    ///
    /// The autopilot flag is a UI toggle, not round state, and survives; the
    /// RNG keeps its stream so a session stays reproducible per seed.
    pub fn reset(&mut self) {
        self.snake = Snake::new(SNAKE_START);
        self.direction = Direction::Right;
        self.food = FOOD_START;
        self.power_ups.clear();
        self.score = 0;
        self.alive = true;
        self.paused = false;
        self.double_points_ms = 0;
        self.tick_interval_ms = BASE_TICK_MS;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    pub fn game_over(&self) -> bool {
        !self.alive
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    pub fn double_points(&self) -> bool {
        self.double_points_ms > 0
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Request a turn. Silently ignored when the round is dead or the request
    /// stays on the current travel axis (the reversal guard). The latest
    /// accepted request wins; there is no queue.
    pub fn set_direction(&mut self, requested: Direction) {
        if !self.alive {
            return;
        }
        if self.direction.same_axis(requested) {
            return;
        }
        self.direction = requested;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_autopilot(&mut self) {
        self.autopilot = !self.autopilot;
    }

    /// Apply a game action; returns whether it changed anything
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(dir) => {
                let before = self.direction;
                self.set_direction(dir);
                self.direction != before
            }
            GameAction::Pause => {
                self.toggle_pause();
                true
            }
            GameAction::ToggleAutopilot => {
                self.toggle_autopilot();
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Advance the simulation by one step.
    ///
    /// Exactly one of `Idle`, `GameOver` or `Continuing` comes back, with the
    /// events this tick emitted. On `GameOver` the snake is untouched by the
    /// failed move and stays inert until [`reset`](Self::reset).
    pub fn tick(&mut self) -> TickOutcome {
        if self.paused || !self.alive {
            return TickOutcome::idle();
        }

        let mut events: ArrayVec<GameEvent, MAX_TICK_EVENTS> = ArrayVec::new();

        if self.autopilot {
            if let Some(turn) = autopilot::chase(self.snake.head(), self.food, self.direction) {
                self.set_direction(turn);
            }
        }

        // One tick of game time has passed at the current pace.
        let pace_before = self.tick_interval_ms;
        self.double_points_ms = self.double_points_ms.saturating_sub(pace_before);

        // Collision order: bounds first, then any existing segment.
        let candidate = self.snake.candidate_head(self.direction);
        if !candidate.in_bounds() || self.snake.occupies(candidate) {
            self.alive = false;
            let _ = events.try_push(GameEvent::GameOver { score: self.score });
            return TickOutcome {
                status: TickStatus::GameOver,
                events,
            };
        }

        self.snake.grow_to(candidate);

        if candidate == self.food {
            self.score += if self.double_points() { 2 } else { 1 };
            self.relocate_food();
            if self.rng.chance(SPAWN_CHANCE_NUM, SPAWN_CHANCE_DEN) {
                self.spawn_power_up();
            }
            if self.tick_interval_ms > TICK_FLOOR_MS {
                self.tick_interval_ms -= FOOD_SPEEDUP_MS;
            }
            let _ = events.try_push(GameEvent::FoodEaten);
        } else {
            self.snake.shrink_tail();
        }

        // Collect every power-up sitting under the new head.
        let mut i = 0;
        while i < self.power_ups.len() {
            if self.power_ups[i].pos == candidate {
                let kind = self.power_ups.remove(i).kind;
                self.apply_power_up(kind);
                let _ = events.try_push(GameEvent::PowerUpCollected(kind));
            } else {
                i += 1;
            }
        }

        if self.tick_interval_ms != pace_before {
            let _ = events.try_push(GameEvent::PaceChanged(self.tick_interval_ms));
        }

        TickOutcome {
            status: TickStatus::Continuing,
            events,
        }
    }

    fn apply_power_up(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::Speed => {
                self.tick_interval_ms =
                    (self.tick_interval_ms.saturating_sub(POWER_UP_PACE_MS)).max(TICK_FLOOR_MS);
            }
            // No ceiling on Slow, mirroring the Speed floor asymmetry.
            PowerUpKind::Slow => {
                self.tick_interval_ms += POWER_UP_PACE_MS;
            }
            PowerUpKind::DoublePoints => {
                self.double_points_ms = DOUBLE_POINTS_MS;
            }
        }
    }

    /// Draw a cell the snake does not occupy: bounded random retry, then a
    /// linear scan. `None` only when the snake covers the whole grid.
    fn free_cell(&mut self) -> Option<Position> {
        let attempts = (GRID_TILES as u32) * (GRID_TILES as u32);
        for _ in 0..attempts {
            let pos = self.rng.next_position();
            if !self.snake.occupies(pos) {
                return Some(pos);
            }
        }

        // Dense board: scan for the first free cell.
        for y in 0..GRID_TILES {
            for x in 0..GRID_TILES {
                let pos = Position::new(x, y);
                if !self.snake.occupies(pos) {
                    return Some(pos);
                }
            }
        }
        None
    }

    fn relocate_food(&mut self) {
        if let Some(pos) = self.free_cell() {
            self.food = pos;
        }
        // Grid full: leave the food where it is; the round cannot continue
        // past the next tick anyway.
    }

    fn spawn_power_up(&mut self) {
        let kind = PowerUpKind::ALL[self.rng.next_range(PowerUpKind::ALL.len() as u32) as usize];
        if let Some(pos) = self.free_cell() {
            self.power_ups.push(PowerUp { pos, kind });
        }
    }

    /// Fill a reusable snapshot for presentation
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake.extend_from_slice(self.snake.segments());
        out.food = self.food;
        out.power_ups.clear();
        out.power_ups.extend_from_slice(&self.power_ups);
        out.score = self.score;
        out.paused = self.paused;
        out.game_over = !self.alive;
        out.autopilot = self.autopilot;
        out.double_points = self.double_points();
        out.tick_interval_ms = self.tick_interval_ms;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
