//! Graphs the reachability search can walk.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Cell, PlayerId};

/// A directed graph over board cells.
///
/// Implementations must be pure: the same `from` yields the same successors
/// for the lifetime of the borrow.
pub trait MoveGraph {
    /// Cells reachable from `from` in one move.
    fn successors(&self, from: Cell) -> SmallVec<[Cell; 8]>;
}

/// The legal-move graph of one pawn.
///
/// The pawn is replaced by a cursor: successors are computed as if the pawn
/// stood on the queried cell, with the opponent left where it is.
#[derive(Clone, Copy, Debug)]
pub struct PawnGraph<'a> {
    board: &'a Board,
    mover: PlayerId,
}

impl<'a> PawnGraph<'a> {
    #[must_use]
    pub fn new(board: &'a Board, mover: PlayerId) -> Self {
        Self { board, mover }
    }

    #[must_use]
    pub fn mover(&self) -> PlayerId {
        self.mover
    }
}

impl MoveGraph for PawnGraph<'_> {
    fn successors(&self, from: Cell) -> SmallVec<[Cell; 8]> {
        self.board.legal_pawn_moves_from(self.mover, from)
    }
}
