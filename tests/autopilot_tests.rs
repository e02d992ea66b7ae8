//! Autopilot behavior through the public API.

use tui_snake::core::{autopilot, GameState};
use tui_snake::types::*;

#[test]
fn x_gap_closes_before_y_gap() {
    let head = Position::new(12, 3);
    let food = Position::new(4, 9);
    // Moving up: left does not reverse, so x wins.
    assert_eq!(
        autopilot::chase(head, food, Direction::Up),
        Some(Direction::Left)
    );
}

#[test]
fn reversing_branch_is_skipped() {
    let head = Position::new(12, 3);
    let food = Position::new(4, 9);
    // Moving right: left would reverse, so the y branch decides.
    assert_eq!(
        autopilot::chase(head, food, Direction::Right),
        Some(Direction::Down)
    );
}

#[test]
fn autopilot_reaches_first_food() {
    let mut game = GameState::new(1);
    game.toggle_autopilot();

    // Head (10,10) moving right, food (5,5): the heuristic needs 5 vertical
    // and 5 horizontal steps; give it slack.
    let mut ticks = 0;
    loop {
        let outcome = game.tick();
        ticks += 1;
        assert_eq!(outcome.status, TickStatus::Continuing);
        if outcome.events.contains(&GameEvent::FoodEaten) {
            break;
        }
        assert!(ticks < 30, "autopilot failed to reach the food");
    }
    assert_eq!(game.score(), 1);
}

#[test]
fn autopilot_is_not_a_pathfinder() {
    // The heuristic never plans around the snake's own body; over long games
    // it is allowed to die. This only asserts the engine stays consistent
    // while it drives, whatever happens.
    let mut game = GameState::new(20);
    game.toggle_autopilot();

    for _ in 0..2000 {
        let outcome = game.tick();
        match outcome.status {
            TickStatus::Continuing => {
                assert!(game.alive());
            }
            TickStatus::GameOver => {
                assert!(game.game_over());
                game.reset();
            }
            TickStatus::Idle => {
                assert!(game.game_over() || game.paused());
            }
        }
    }
}

#[test]
fn manual_turns_still_apply_with_autopilot_off() {
    let mut game = GameState::new(1);
    game.toggle_autopilot();
    game.toggle_autopilot(); // back off

    game.set_direction(Direction::Down);
    game.tick();
    assert_eq!(game.snake().head(), Position::new(10, 11));
}
