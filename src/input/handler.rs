//! Key mapping for terminal play.
//!
//! Snake needs no held-key repeat handling: one buffered turn per tick is the
//! whole input model, so this stays a stateless KeyCode -> command map.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Direction, GameAction};

/// What a key press asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Forwarded to the engine
    Game(GameAction),
    /// Cycle the cosmetic skin (presentation only)
    CycleSkin,
    /// Clear the persisted leaderboard
    ClearScores,
}

/// Map a key press to a command, if it is bound
pub fn map_key(code: KeyCode) -> Option<InputCommand> {
    match code {
        KeyCode::Up => Some(InputCommand::Game(GameAction::Turn(Direction::Up))),
        KeyCode::Down => Some(InputCommand::Game(GameAction::Turn(Direction::Down))),
        KeyCode::Left => Some(InputCommand::Game(GameAction::Turn(Direction::Left))),
        KeyCode::Right => Some(InputCommand::Game(GameAction::Turn(Direction::Right))),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputCommand::Game(GameAction::Pause)),
        KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputCommand::Game(GameAction::ToggleAutopilot))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Game(GameAction::Restart)),
        KeyCode::Char('k') | KeyCode::Char('K') => Some(InputCommand::CycleSkin),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(InputCommand::ClearScores),
        _ => None,
    }
}

/// Quit on `q`, Escape, or Ctrl-C
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_arrow_keys_turn() {
        assert_eq!(
            map_key(KeyCode::Up),
            Some(InputCommand::Game(GameAction::Turn(Direction::Up)))
        );
        assert_eq!(
            map_key(KeyCode::Left),
            Some(InputCommand::Game(GameAction::Turn(Direction::Left)))
        );
    }

    #[test]
    fn test_toggles_and_restart() {
        assert_eq!(
            map_key(KeyCode::Char('p')),
            Some(InputCommand::Game(GameAction::Pause))
        );
        assert_eq!(
            map_key(KeyCode::Char('a')),
            Some(InputCommand::Game(GameAction::ToggleAutopilot))
        );
        assert_eq!(
            map_key(KeyCode::Char('r')),
            Some(InputCommand::Game(GameAction::Restart))
        );
        assert_eq!(map_key(KeyCode::Char('k')), Some(InputCommand::CycleSkin));
        assert_eq!(map_key(KeyCode::Char('c')), Some(InputCommand::ClearScores));
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Tab), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(!should_quit(key(KeyCode::Char('c'))));

        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert!(should_quit(ctrl_c));
    }
}
