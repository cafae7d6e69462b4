//! Error types for rule validation and input conversion.
//!
//! Every rejected request is reported as a value. Nothing in the engine
//! panics on bad input.

use thiserror::Error;

use super::coord::Cell;
use super::fence::Fence;
use super::player::PlayerId;

/// Why a move or fence placement was refused.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleViolation {
    /// The requesting player does not hold the turn.
    #[error("it is not {0}'s turn")]
    InvalidTurn(PlayerId),

    /// Target cell or fence anchor is off the board.
    #[error("{0} is out of bounds")]
    OutOfBounds(Cell),

    /// A fence or a pawn is in the way.
    #[error("path to {0} is blocked")]
    Blocked(Cell),

    /// The offset is not a step, a legal jump or a legal diagonal.
    #[error("illegal move geometry towards {0}")]
    IllegalJumpGeometry(Cell),

    /// The player has placed all of their fences.
    #[error("{0} has no fences remaining")]
    NoFencesRemaining(PlayerId),

    /// The fence would overlap or cross one already placed.
    #[error("fence at {0} overlaps an existing fence")]
    OverlappingFence(Cell),

    /// The fence would leave a player with no path to their goal row.
    #[error("fence would leave a player without a path to their goal")]
    FairPlayViolation,

    /// The game is over.
    #[error("game already won by {0}")]
    GameAlreadyWon(PlayerId),
}

/// Result type alias for rule-checked operations
pub type RuleResult<T> = Result<T, RuleViolation>;

/// Errors converting raw collaborator input into engine types.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown player number {0} (expected 1 or 2)")]
    UnknownPlayer(u8),

    #[error("unknown fence orientation {0:?} (expected \"v\" or \"h\")")]
    UnknownOrientation(String),
}

/// Errors building a game from a custom starting position.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    #[error("pawn for {player} placed off the board at {cell}")]
    PawnOutOfBounds { player: PlayerId, cell: Cell },

    #[error("both pawns placed on {0}")]
    PawnsOverlap(Cell),

    #[error("fence {fence} cannot be placed: {source}")]
    InvalidFence {
        fence: Fence,
        #[source]
        source: RuleViolation,
    },

    #[error("{player} given {count} fences, more than the supply of {max}")]
    TooManyFences { player: PlayerId, count: u8, max: u8 },

    #[error("{0} has no path to their goal row")]
    NoPath(PlayerId),
}
