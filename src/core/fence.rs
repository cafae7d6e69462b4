//! Fence geometry.
//!
//! Fences sit on the boundaries between cells, addressed by an anchor cell:
//! - a vertical fence at `(c, r)` blocks the boundary between columns `c-1`
//!   and `c` on row `r`;
//! - a horizontal fence at `(c, r)` blocks the boundary between rows `r-1`
//!   and `r` on column `c`.
//!
//! With [`FenceSpan::Double`] the fence continues one segment further: up a
//! row for vertical fences, right a column for horizontal ones.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::config::FenceSpan;
use super::coord::{Cell, BOARD_SIZE};
use super::error::ParseError;

/// Fence orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v" | "vertical" => Ok(Orientation::Vertical),
            "h" | "horizontal" => Ok(Orientation::Horizontal),
            _ => Err(ParseError::UnknownOrientation(s.to_string())),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "v"),
            Orientation::Horizontal => write!(f, "h"),
        }
    }
}

/// A fence: orientation plus anchor cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fence {
    pub orientation: Orientation,
    pub anchor: Cell,
}

impl Fence {
    #[must_use]
    pub const fn new(orientation: Orientation, anchor: Cell) -> Self {
        Self { orientation, anchor }
    }

    #[must_use]
    pub const fn vertical(col: u8, row: u8) -> Self {
        Self::new(Orientation::Vertical, Cell::new(col, row))
    }

    #[must_use]
    pub const fn horizontal(col: u8, row: u8) -> Self {
        Self::new(Orientation::Horizontal, Cell::new(col, row))
    }

    /// Does the whole fence lie on the internal lattice?
    #[must_use]
    pub fn in_bounds(&self, span: FenceSpan) -> bool {
        let Cell { col, row } = self.anchor;
        let reach = span.segments() - 1;
        match self.orientation {
            Orientation::Vertical => (1..BOARD_SIZE).contains(&col) && row < BOARD_SIZE - reach,
            Orientation::Horizontal => col < BOARD_SIZE - reach && (1..BOARD_SIZE).contains(&row),
        }
    }

    /// Anchors of the single segments this fence covers.
    ///
    /// Only meaningful for fences that are [`in_bounds`](Self::in_bounds).
    pub fn segments(&self, span: FenceSpan) -> impl Iterator<Item = Cell> {
        let Cell { col, row } = self.anchor;
        let orientation = self.orientation;
        (0..span.segments()).map(move |i| match orientation {
            Orientation::Vertical => Cell::new(col, row + i),
            Orientation::Horizontal => Cell::new(col + i, row),
        })
    }

    /// Lattice point at the centre of a double fence, as `(col line, row line)`.
    ///
    /// A vertical fence at `(c, r)` and a horizontal fence at `(c-1, r+1)`
    /// share a midpoint, which is what makes them cross.
    #[must_use]
    pub fn midpoint(&self) -> Cell {
        let Cell { col, row } = self.anchor;
        match self.orientation {
            Orientation::Vertical => Cell::new(col, row + 1),
            Orientation::Horizontal => Cell::new(col + 1, row),
        }
    }
}

impl std::fmt::Display for Fence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.orientation, self.anchor)
    }
}
