//! Breadth-first search to a goal row.
//!
//! Each cell is visited at most once, so a search on the 9×9 board touches
//! at most 81 cells. Searches stop as soon as a goal cell is discovered.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

use super::graph::MoveGraph;
use crate::core::Cell;

/// Is any cell on `goal_row` reachable from `start`?
pub fn has_path<G: MoveGraph>(graph: &G, start: Cell, goal_row: u8) -> bool {
    if start.row == goal_row {
        return true;
    }

    let mut visited = FxHashSet::default();
    let mut frontier = VecDeque::new();
    visited.insert(start);
    frontier.push_back(start);

    while let Some(cell) = frontier.pop_front() {
        for next in graph.successors(cell) {
            if next.row == goal_row {
                return true;
            }
            if visited.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    false
}

/// A shortest route from `start` to `goal_row`, `start` included.
pub fn shortest_path<G: MoveGraph>(graph: &G, start: Cell, goal_row: u8) -> Option<Vec<Cell>> {
    if start.row == goal_row {
        return Some(vec![start]);
    }

    // Predecessor of every discovered cell; `start` maps to itself.
    let mut came_from: FxHashMap<Cell, Cell> = FxHashMap::default();
    let mut frontier = VecDeque::new();
    came_from.insert(start, start);
    frontier.push_back(start);

    while let Some(cell) = frontier.pop_front() {
        for next in graph.successors(cell) {
            if came_from.contains_key(&next) {
                continue;
            }
            came_from.insert(next, cell);
            if next.row == goal_row {
                return Some(unwind(&came_from, start, next));
            }
            frontier.push_back(next);
        }
    }

    None
}

/// Moves needed to reach `goal_row`, or `None` if it cannot be reached.
pub fn distance_to_goal<G: MoveGraph>(graph: &G, start: Cell, goal_row: u8) -> Option<usize> {
    shortest_path(graph, start, goal_row).map(|route| route.len() - 1)
}

fn unwind(came_from: &FxHashMap<Cell, Cell>, start: Cell, end: Cell) -> Vec<Cell> {
    let mut route = vec![end];
    let mut cell = end;
    while cell != start {
        match came_from.get(&cell) {
            Some(&prev) => {
                route.push(prev);
                cell = prev;
            }
            None => break,
        }
    }
    route.reverse();
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{Direction, Fence, PlayerId};
    use crate::path::PawnGraph;
    use smallvec::SmallVec;

    /// Open grid with no pawns or fences.
    struct OpenGrid;

    impl MoveGraph for OpenGrid {
        fn successors(&self, from: Cell) -> SmallVec<[Cell; 8]> {
            Direction::ALL.iter().filter_map(|&d| from.step(d)).collect()
        }
    }

    /// Grid cut in two between rows 3 and 4.
    struct CutGrid;

    impl MoveGraph for CutGrid {
        fn successors(&self, from: Cell) -> SmallVec<[Cell; 8]> {
            OpenGrid
                .successors(from)
                .into_iter()
                .filter(|to| !(from.row.min(to.row) == 3 && from.row.max(to.row) == 4))
                .collect()
        }
    }

    #[test]
    fn test_start_on_goal_row() {
        assert!(has_path(&CutGrid, Cell::new(2, 8), 8));
        assert_eq!(shortest_path(&CutGrid, Cell::new(2, 8), 8), Some(vec![Cell::new(2, 8)]));
    }

    #[test]
    fn test_open_grid_distance() {
        assert!(has_path(&OpenGrid, Cell::new(0, 0), 8));
        assert_eq!(distance_to_goal(&OpenGrid, Cell::new(0, 0), 8), Some(8));
        assert_eq!(distance_to_goal(&OpenGrid, Cell::new(5, 6), 0), Some(6));
    }

    #[test]
    fn test_cut_grid_unreachable() {
        assert!(!has_path(&CutGrid, Cell::new(4, 0), 8));
        assert!(has_path(&CutGrid, Cell::new(4, 0), 3));
        assert_eq!(shortest_path(&CutGrid, Cell::new(4, 0), 8), None);
    }

    #[test]
    fn test_route_is_connected() {
        let route = shortest_path(&OpenGrid, Cell::new(1, 1), 7).unwrap();
        assert_eq!(route.first(), Some(&Cell::new(1, 1)));
        assert_eq!(route.last().map(|c| c.row), Some(7));
        for pair in route.windows(2) {
            assert!(OpenGrid.successors(pair[0]).contains(&pair[1]));
        }
    }

    #[test]
    fn test_maze_detour() {
        // Wall across row line 4 except column 8: the path must go around.
        let mut board = Board::default();
        for col in 0..8 {
            board.place_fence(Fence::horizontal(col, 4));
        }
        let graph = PawnGraph::new(&board, PlayerId::P1);

        assert!(has_path(&graph, Cell::new(4, 0), 8));
        let route = shortest_path(&graph, Cell::new(4, 0), 8).unwrap();
        assert!(route.contains(&Cell::new(8, 3)));
        assert!(route.contains(&Cell::new(8, 4)));
    }

    #[test]
    fn test_full_wall_blocks_both_players() {
        let mut board = Board::default();
        for col in 0..9 {
            board.place_fence(Fence::horizontal(col, 4));
        }

        assert!(!board.has_path_to_goal(PlayerId::P1, 8));
        assert!(!board.has_path_to_goal(PlayerId::P2, 0));
        assert!(board.has_path_to_goal(PlayerId::P1, 3));
    }
}
