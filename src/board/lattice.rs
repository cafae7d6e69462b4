//! Blocked-boundary lattices.
//!
//! Three fixed arrays indexed directly by coordinate:
//! - `vertical[row][col - 1]`: boundary between columns `col-1` and `col`
//!   (9 rows × 8 internal column lines);
//! - `horizontal[row - 1][col]`: boundary between rows `row-1` and `row`
//!   (8 internal row lines × 9 columns);
//! - `midpoints[row - 1][col - 1]`: interior lattice points held by the
//!   centre of a double fence.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Direction, Orientation, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FenceLattice {
    vertical: [[bool; N - 1]; N],
    horizontal: [[bool; N]; N - 1],
    midpoints: [[bool; N - 1]; N - 1],
}

impl FenceLattice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the single segment anchored at `segment` blocked?
    ///
    /// `segment` must be an in-bounds single-segment anchor for `orientation`.
    #[must_use]
    pub fn is_set(&self, orientation: Orientation, segment: Cell) -> bool {
        let (c, r) = (segment.col as usize, segment.row as usize);
        match orientation {
            Orientation::Vertical => self.vertical[r][c - 1],
            Orientation::Horizontal => self.horizontal[r - 1][c],
        }
    }

    pub fn set(&mut self, orientation: Orientation, segment: Cell, blocked: bool) {
        let (c, r) = (segment.col as usize, segment.row as usize);
        match orientation {
            Orientation::Vertical => self.vertical[r][c - 1] = blocked,
            Orientation::Horizontal => self.horizontal[r - 1][c] = blocked,
        }
    }

    #[must_use]
    pub fn midpoint_taken(&self, point: Cell) -> bool {
        self.midpoints[point.row as usize - 1][point.col as usize - 1]
    }

    pub fn set_midpoint(&mut self, point: Cell, taken: bool) {
        self.midpoints[point.row as usize - 1][point.col as usize - 1] = taken;
    }

    /// Can a pawn on `cell` cross its boundary in `dir`?
    ///
    /// The board edge counts as a wall.
    #[must_use]
    pub fn is_open(&self, cell: Cell, dir: Direction) -> bool {
        match boundary(cell, dir) {
            Some((orientation, segment)) => !self.is_set(orientation, segment),
            None => false,
        }
    }
}

/// The segment between `cell` and its neighbour in `dir`, or `None` at the
/// board edge.
#[must_use]
pub fn boundary(cell: Cell, dir: Direction) -> Option<(Orientation, Cell)> {
    let neighbour = cell.step(dir)?;
    let segment = match dir {
        Direction::Up | Direction::Right => neighbour,
        Direction::Down | Direction::Left => cell,
    };
    let orientation = if dir.is_horizontal() {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    Some((orientation, segment))
}
