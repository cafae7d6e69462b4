//! Board state: pawn positions, fences, and the legality rules over them.
//!
//! The board answers "is this move / fence legal?" and applies mutations
//! it is told to apply. Turn order and fair play are the game's concern.

pub mod lattice;
pub mod state;
mod movement;

pub use lattice::FenceLattice;
pub use state::Board;
