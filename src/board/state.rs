//! Board state: pawn positions and placed fences.
//!
//! ## Mutators
//!
//! `move_pawn`, `place_fence` and `remove_fence` do not validate. Callers
//! check legality first with `check_pawn_move` / `check_fence_placement`;
//! the game controller is the only caller in normal play.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::lattice::FenceLattice;
use crate::core::{
    Cell, Direction, Fence, FenceSpan, MoveKind, PlayerId, PlayerMap, RuleResult, RuleViolation,
    BOARD_SIZE,
};
use crate::path::{self, PawnGraph};

/// The 9×9 board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    span: FenceSpan,
    pawns: PlayerMap<Cell>,
    lattice: FenceLattice,
    /// Placed fences in placement order.
    fences: Vec<Fence>,
}

impl Board {
    /// Create a board with both pawns centred on their start rows.
    #[must_use]
    pub fn new(span: FenceSpan) -> Self {
        Self {
            span,
            pawns: PlayerMap::new(|p| Cell::new(BOARD_SIZE / 2, p.start_row())),
            lattice: FenceLattice::new(),
            fences: Vec::new(),
        }
    }

    #[must_use]
    pub fn fence_span(&self) -> FenceSpan {
        self.span
    }

    // === Pawns ===

    /// Current cell of a player's pawn.
    #[must_use]
    pub fn pawn(&self, player: PlayerId) -> Cell {
        self.pawns[player]
    }

    /// Which pawn, if any, is on `cell`.
    #[must_use]
    pub fn occupant(&self, cell: Cell) -> Option<PlayerId> {
        self.pawns
            .iter()
            .find(|(_, &pos)| pos == cell)
            .map(|(player, _)| player)
    }

    /// Is the move legal from the pawn's current cell?
    #[must_use]
    pub fn is_pawn_move_legal(&self, mover: PlayerId, target: Cell) -> bool {
        self.check_pawn_move(mover, target).is_ok()
    }

    /// Check a move from the pawn's current cell.
    pub fn check_pawn_move(&self, mover: PlayerId, target: Cell) -> RuleResult<MoveKind> {
        self.check_pawn_move_from(mover, self.pawn(mover), target)
    }

    /// Every cell `mover` may legally move to.
    #[must_use]
    pub fn legal_pawn_moves(&self, mover: PlayerId) -> SmallVec<[Cell; 8]> {
        self.legal_pawn_moves_from(mover, self.pawn(mover))
    }

    /// Every cell a pawn standing on `from` may move to, with `mover`'s
    /// opponent where it really is.
    #[must_use]
    pub fn legal_pawn_moves_from(&self, mover: PlayerId, from: Cell) -> SmallVec<[Cell; 8]> {
        MoveKind::candidates(from)
            .map(|(to, _)| to)
            .filter(|&to| self.check_pawn_move_from(mover, from, to).is_ok())
            .collect()
    }

    /// Relocate a pawn. Does not validate.
    pub fn move_pawn(&mut self, mover: PlayerId, target: Cell) {
        self.pawns[mover] = target;
    }

    // === Fences ===

    /// Placed fences in placement order.
    #[must_use]
    pub fn fences(&self) -> &[Fence] {
        &self.fences
    }

    #[must_use]
    pub fn has_fence(&self, fence: Fence) -> bool {
        self.fences.contains(&fence)
    }

    /// Can a pawn on `cell` cross into its neighbour in `dir`?
    #[must_use]
    pub fn is_open(&self, cell: Cell, dir: Direction) -> bool {
        self.lattice.is_open(cell, dir)
    }

    /// Is the boundary on the `dir` side of `cell` a fence or the board edge?
    #[must_use]
    pub fn is_blocked(&self, cell: Cell, dir: Direction) -> bool {
        !self.is_open(cell, dir)
    }

    #[must_use]
    pub fn is_fence_placement_legal(&self, fence: Fence) -> bool {
        self.check_fence_placement(fence).is_ok()
    }

    /// Check that a fence lies on the lattice and touches no placed fence.
    pub fn check_fence_placement(&self, fence: Fence) -> RuleResult<()> {
        if !fence.in_bounds(self.span) {
            return Err(RuleViolation::OutOfBounds(fence.anchor));
        }
        let overlaps = fence
            .segments(self.span)
            .any(|segment| self.lattice.is_set(fence.orientation, segment));
        let crosses = self.span == FenceSpan::Double && self.lattice.midpoint_taken(fence.midpoint());
        if overlaps || crosses {
            return Err(RuleViolation::OverlappingFence(fence.anchor));
        }
        Ok(())
    }

    /// Add a fence. Does not validate.
    pub fn place_fence(&mut self, fence: Fence) {
        self.mark_fence(fence, true);
        self.fences.push(fence);
    }

    /// Take a placed fence back off the board.
    ///
    /// Returns false if the fence was not on the board.
    pub fn remove_fence(&mut self, fence: Fence) -> bool {
        match self.fences.iter().rposition(|&f| f == fence) {
            Some(pos) => {
                self.fences.remove(pos);
                self.mark_fence(fence, false);
                true
            }
            None => false,
        }
    }

    fn mark_fence(&mut self, fence: Fence, blocked: bool) {
        for segment in fence.segments(self.span) {
            self.lattice.set(fence.orientation, segment, blocked);
        }
        if self.span == FenceSpan::Double {
            self.lattice.set_midpoint(fence.midpoint(), blocked);
        }
    }

    // === Reachability ===

    /// Can `player` reach `goal_row` from where their pawn stands?
    ///
    /// Searches with a detached cursor; the pawn itself is not moved.
    #[must_use]
    pub fn has_path_to_goal(&self, player: PlayerId, goal_row: u8) -> bool {
        path::has_path(&PawnGraph::new(self, player), self.pawn(player), goal_row)
    }

    /// Number of moves `player` needs to reach their goal row, if reachable.
    #[must_use]
    pub fn distance_to_goal(&self, player: PlayerId) -> Option<usize> {
        path::distance_to_goal(&PawnGraph::new(self, player), self.pawn(player), player.goal_row())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(FenceSpan::default())
    }
}
