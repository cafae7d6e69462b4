//! Action representation.
//!
//! A turn is either a pawn move or a fence placement. Accepted actions are
//! recorded with the player who took them and a running sequence number.

use serde::{Deserialize, Serialize};

use super::coord::Cell;
use super::fence::Fence;
use super::player::PlayerId;

/// A complete turn action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the pawn to a cell.
    Move(Cell),
    /// Place a fence.
    Fence(Fence),
}

impl Action {
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Action::Move(_))
    }

    #[must_use]
    pub fn is_fence(&self) -> bool {
        matches!(self, Action::Fence(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(cell) => write!(f, "move {}", cell),
            Action::Fence(fence) => write!(f, "fence {}", fence),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Usable for:
/// - Highlighting the last move in a renderer
/// - Debugging a game after the fact
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Position in the game's accepted-action sequence (starts at 0).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, sequence: u32) -> Self {
        Self {
            player,
            action,
            sequence,
        }
    }
}
