//! Turn and game control.
//!
//! `Quoridor` owns a board and applies moves and fences only after they are
//! validated:
//! - turn order and game end
//! - fence supply
//! - fair play: both players keep a path to their goal rows
//!
//! Callers that want a non-standard opening use `QuoridorBuilder`.

pub mod builder;
pub mod game;
pub mod status;

pub use builder::QuoridorBuilder;
pub use game::{PlayerState, Quoridor};
pub use status::{FenceOutcome, GameStatus};
