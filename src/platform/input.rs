//! Keyboard mapping
//!
//! Maps `KeyboardEvent.key()` strings to commands. Unknown keys map to
//! nothing and are ignored.

use crate::sim::{Direction, InputAction};

/// A recognized key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Forwarded to the simulation
    Game(InputAction),
    /// Toggle music mute (handled by the host, not the simulation)
    ToggleMute,
}

pub fn map_key(key: &str) -> Option<KeyCommand> {
    let command = match key {
        "ArrowLeft" => KeyCommand::Game(InputAction::Move(Direction::Left)),
        "ArrowRight" => KeyCommand::Game(InputAction::Move(Direction::Right)),
        "ArrowUp" => KeyCommand::Game(InputAction::Move(Direction::Up)),
        "ArrowDown" => KeyCommand::Game(InputAction::Move(Direction::Down)),
        " " | "Spacebar" => KeyCommand::Game(InputAction::Resume),
        "b" | "B" => KeyCommand::Game(InputAction::EnterBoss),
        "m" | "M" => KeyCommand::ToggleMute,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows() {
        assert_eq!(
            map_key("ArrowLeft"),
            Some(KeyCommand::Game(InputAction::Move(Direction::Left)))
        );
        assert_eq!(
            map_key("ArrowDown"),
            Some(KeyCommand::Game(InputAction::Move(Direction::Down)))
        );
    }

    #[test]
    fn test_actions() {
        assert_eq!(map_key(" "), Some(KeyCommand::Game(InputAction::Resume)));
        assert_eq!(map_key("B"), Some(KeyCommand::Game(InputAction::EnterBoss)));
        assert_eq!(map_key("m"), Some(KeyCommand::ToggleMute));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(map_key("Enter"), None);
        assert_eq!(map_key("x"), None);
        assert_eq!(map_key(""), None);
    }
}
