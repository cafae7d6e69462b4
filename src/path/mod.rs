//! Path reachability over pawn-move graphs.
//!
//! The fair-play rule asks whether a player can still reach their goal row.
//! The search is generic over [`MoveGraph`] and takes a plain start cell, so
//! it can run on a tentative board without touching real game state.

pub mod graph;
pub mod search;

pub use graph::{MoveGraph, PawnGraph};
pub use search::{distance_to_goal, has_path, shortest_path};
