//! Core types: players, coordinates, fences, actions, configuration, errors.
//!
//! Everything here is plain data. The board and the game controller build on
//! these types without the types knowing about either.

pub mod player;
pub mod coord;
pub mod fence;
pub mod config;
pub mod action;
pub mod error;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use coord::{Cell, Direction, MoveKind, BOARD_SIZE};
pub use fence::{Fence, Orientation};
pub use config::{FenceSpan, GameConfig};
pub use action::{Action, ActionRecord};
pub use error::{ParseError, RuleResult, RuleViolation, SetupError};
