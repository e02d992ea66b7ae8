//! Autopilot: a greedy, myopic chase heuristic.
//!
//! Closes the x-gap to the food before the y-gap, skipping a branch only when
//! it would reverse current travel on that axis. It is not a pathfinder: it
//! ignores walls and the snake's own body and can happily steer into a fatal
//! collision. That behavior is intentional and covered by tests.

use crate::types::{Direction, Position};

/// Pick the turn the autopilot would request this tick, if any.
///
/// The returned direction still goes through the engine's reversal guard;
/// a request along the current travel axis ends up a no-op there.
pub fn chase(head: Position, food: Position, current: Direction) -> Option<Direction> {
    if food.x < head.x && current != Direction::Right {
        Some(Direction::Left)
    } else if food.x > head.x && current != Direction::Left {
        Some(Direction::Right)
    } else if food.y < head.y && current != Direction::Down {
        Some(Direction::Up)
    } else if food.y > head.y && current != Direction::Up {
        Some(Direction::Down)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_axis_has_priority() {
        // Food is up-left; x wins.
        let head = Position::new(10, 10);
        let food = Position::new(5, 5);
        assert_eq!(chase(head, food, Direction::Up), Some(Direction::Left));
    }

    #[test]
    fn test_falls_back_to_y_when_x_closed() {
        let head = Position::new(5, 10);
        let food = Position::new(5, 4);
        assert_eq!(chase(head, food, Direction::Left), Some(Direction::Up));
    }

    #[test]
    fn test_skips_x_branch_that_would_reverse() {
        // Moving right, food behind on x: the left branch is skipped and the
        // y-gap decides instead.
        let head = Position::new(10, 10);
        let food = Position::new(5, 12);
        assert_eq!(chase(head, food, Direction::Right), Some(Direction::Down));
    }

    #[test]
    fn test_no_request_when_aligned_with_travel() {
        // Food dead ahead: every branch either misses or would reverse.
        let head = Position::new(10, 10);
        let food = Position::new(10, 10);
        assert_eq!(chase(head, food, Direction::Right), None);
    }

    #[test]
    fn test_same_axis_request_is_possible() {
        // Moving right with food further right proposes Right; the engine's
        // reversal guard turns that into a no-op.
        let head = Position::new(5, 10);
        let food = Position::new(9, 10);
        assert_eq!(chase(head, food, Direction::Right), Some(Direction::Right));
    }
}
