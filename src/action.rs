//! Logical player actions fed into the core by the input layer.

use dungeon::Direction;
use serde::{Deserialize, Serialize};

/// One discrete player decision. The upstream input layer maps raw key
/// events onto these; the core never sees keyboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Attack,
}

impl PlayerAction {
    /// The movement direction this action encodes, if it is a move.
    pub fn direction(self) -> Option<Direction> {
        match self {
            PlayerAction::MoveUp => Some(Direction::Up),
            PlayerAction::MoveDown => Some(Direction::Down),
            PlayerAction::MoveLeft => Some(Direction::Left),
            PlayerAction::MoveRight => Some(Direction::Right),
            PlayerAction::Attack => None,
        }
    }
}
