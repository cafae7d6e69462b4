//! Board coordinates and directions.
//!
//! A `Cell` is a `(col, row)` pair on the 9×9 grid. Row 0 is P1's start
//! edge and row 8 is P2's. Directions are named from P1's point of view:
//! `Up` increases the row.

use serde::{Deserialize, Serialize};

/// Width and height of the board in cells.
pub const BOARD_SIZE: u8 = 9;

/// A pawn cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

impl Cell {
    /// Create a cell. Bounds are not checked; see [`Cell::checked`].
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Create a cell from signed coordinates, returning `None` off the board.
    #[must_use]
    pub fn checked(col: i32, row: i32) -> Option<Self> {
        let size = i32::from(BOARD_SIZE);
        if (0..size).contains(&col) && (0..size).contains(&row) {
            Some(Self::new(col as u8, row as u8))
        } else {
            None
        }
    }

    /// Is this cell on the board?
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.col < BOARD_SIZE && self.row < BOARD_SIZE
    }

    /// Neighbouring cell in `dir`, or `None` past the edge.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dc, dr) = dir.delta();
        Self::checked(i32::from(self.col) + dc, i32::from(self.row) + dr)
    }

    /// Signed offset from `self` to `other`.
    #[must_use]
    pub fn offset_to(self, other: Cell) -> (i32, i32) {
        (
            i32::from(other.col) - i32::from(self.col),
            i32::from(other.row) - i32::from(self.row),
        )
    }

    /// Row-major index into a 9×9 array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Iterate over every cell, row by row.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell::new(col, row)))
    }
}

impl From<(u8, u8)> for Cell {
    fn from((col, row): (u8, u8)) -> Self {
        Self::new(col, row)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Orthogonal direction on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards row 8.
    Up,
    /// Towards row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 8.
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(dcol, drow)` for a single step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Does this direction change the column?
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    fn from_delta(dc: i32, dr: i32) -> Option<Direction> {
        match (dc, dr) {
            (0, 1) => Some(Direction::Up),
            (0, -1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Shape of a pawn move, derived from the offset alone.
///
/// `Diagonal(v, h)` holds the vertical component first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// One cell orthogonally.
    Step(Direction),
    /// Two cells orthogonally, over the opponent.
    Jump(Direction),
    /// One cell in each axis, around the opponent.
    Diagonal(Direction, Direction),
}

impl MoveKind {
    /// Classify the offset between two cells. Returns `None` for any
    /// offset that is not a step, straight jump or diagonal.
    #[must_use]
    pub fn classify(from: Cell, to: Cell) -> Option<MoveKind> {
        let (dc, dr) = from.offset_to(to);
        match (dc.abs(), dr.abs()) {
            (1, 0) | (0, 1) => Direction::from_delta(dc, dr).map(MoveKind::Step),
            (2, 0) | (0, 2) => Direction::from_delta(dc / 2, dr / 2).map(MoveKind::Jump),
            (1, 1) => {
                let vertical = Direction::from_delta(0, dr)?;
                let horizontal = Direction::from_delta(dc, 0)?;
                Some(MoveKind::Diagonal(vertical, horizontal))
            }
            _ => None,
        }
    }

    /// Every offset a pawn could possibly use, paired with its kind.
    pub fn candidates(from: Cell) -> impl Iterator<Item = (Cell, MoveKind)> {
        const OFFSETS: [(i32, i32); 12] = [
            (0, 1), (0, -1), (-1, 0), (1, 0),
            (0, 2), (0, -2), (-2, 0), (2, 0),
            (1, 1), (1, -1), (-1, 1), (-1, -1),
        ];
        OFFSETS.into_iter().filter_map(move |(dc, dr)| {
            let to = Cell::checked(i32::from(from.col) + dc, i32::from(from.row) + dr)?;
            MoveKind::classify(from, to).map(|kind| (to, kind))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_bounds() {
        assert!(Cell::new(8, 8).in_bounds());
        assert!(!Cell::new(9, 0).in_bounds());
        assert_eq!(Cell::checked(-1, 3), None);
        assert_eq!(Cell::checked(3, 4), Some(Cell::new(3, 4)));
    }

    #[test]
    fn test_cell_step() {
        let c = Cell::new(0, 0);
        assert_eq!(c.step(Direction::Up), Some(Cell::new(0, 1)));
        assert_eq!(c.step(Direction::Right), Some(Cell::new(1, 0)));
        assert_eq!(c.step(Direction::Down), None);
        assert_eq!(c.step(Direction::Left), None);
    }

    #[test]
    fn test_cell_all() {
        let cells: Vec<_> = Cell::all().collect();
        assert_eq!(cells.len(), 81);
        assert!(cells.iter().enumerate().all(|(i, c)| c.index() == i));
    }

    #[test]
    fn test_classify_moves() {
        let c = Cell::new(4, 4);
        assert_eq!(MoveKind::classify(c, Cell::new(4, 5)), Some(MoveKind::Step(Direction::Up)));
        assert_eq!(MoveKind::classify(c, Cell::new(2, 4)), Some(MoveKind::Jump(Direction::Left)));
        assert_eq!(
            MoveKind::classify(c, Cell::new(5, 3)),
            Some(MoveKind::Diagonal(Direction::Down, Direction::Right))
        );
        assert_eq!(MoveKind::classify(c, c), None);
        assert_eq!(MoveKind::classify(c, Cell::new(6, 5)), None);
        assert_eq!(MoveKind::classify(c, Cell::new(4, 7)), None);
    }

    #[test]
    fn test_candidates_clipped_at_corner() {
        let kinds: Vec<_> = MoveKind::candidates(Cell::new(0, 0)).collect();
        // up, right, jump up, jump right, diagonal up-right
        assert_eq!(kinds.len(), 5);
        assert_eq!(MoveKind::candidates(Cell::new(4, 4)).count(), 12);
    }

    #[test]
    fn test_direction_opposite() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }
}
