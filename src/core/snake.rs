//! Snake body: ordered segments with the head at index 0.

use crate::types::{Direction, Position};

/// The snake's body. Non-empty while the round is alive; the self-collision
/// invariant (no two segments equal) is checked by the engine's collision
/// test each tick, not enforced structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: Vec<Position>,
}

impl Snake {
    /// A one-segment snake at the given cell
    pub fn new(head: Position) -> Self {
        Self {
            segments: vec![head],
        }
    }

    /// Head position (index 0)
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether any segment (head included) occupies `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// The cell the head would move into
    pub fn candidate_head(&self, dir: Direction) -> Position {
        self.head().step(dir)
    }

    /// Push a new head at the front (grows by one)
    pub fn grow_to(&mut self, head: Position) {
        self.segments.insert(0, head);
    }

    /// Drop the tail segment (after `grow_to`, the net effect is translation)
    pub fn shrink_tail(&mut self) {
        self.segments.pop();
    }
}
