//! # rust-quoridor
//!
//! A rules engine for Quoridor: two pawns race across a 9×9 board while
//! players place fences to slow each other down.
//!
//! ## Design Principles
//!
//! 1. **Validate, then commit**: every request is checked in full before the
//!    board changes. Fair-play rollback is the only undo, and it happens
//!    inside the same call.
//!
//! 2. **Rejections are values**: illegal requests return a `RuleViolation`
//!    (or a `FenceOutcome`), never a panic.
//!
//! 3. **Typed board**: pawns by coordinate, fences on direct-indexed boundary
//!    lattices. No string grid.
//!
//! ## Fair Play
//!
//! A fence may not leave either player without a route to their goal row.
//! The check is a breadth-first search over the legal-move graph, run from a
//! detached cursor so real pawns never move.
//!
//! ## Modules
//!
//! - `core`: Players, cells, fences, actions, configuration, errors
//! - `board`: Pawn positions, fence lattices, move and fence legality
//! - `path`: Generic reachability search over move graphs
//! - `rules`: The `Quoridor` game controller and its builder

pub mod core;
pub mod board;
pub mod path;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord,
    Cell, Direction, MoveKind, BOARD_SIZE,
    Fence, FenceSpan, Orientation,
    GameConfig,
    ParseError, RuleResult, RuleViolation, SetupError,
    PlayerId, PlayerMap,
};

pub use crate::board::{Board, FenceLattice};

pub use crate::path::{MoveGraph, PawnGraph};

pub use crate::rules::{FenceOutcome, GameStatus, PlayerState, Quoridor, QuoridorBuilder};
