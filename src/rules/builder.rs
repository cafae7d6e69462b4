//! Builder for games that start from a custom position.
//!
//! Useful for puzzles and for tests that need a particular layout without
//! playing up to it. The built position must satisfy the same invariants a
//! played game would: pawns on distinct cells, fences non-overlapping, and
//! both players able to reach their goal rows.

use super::game::{PlayerState, Quoridor};
use crate::board::Board;
use crate::core::{Cell, Fence, FenceSpan, GameConfig, PlayerId, PlayerMap, SetupError};

/// Builder for creating a Quoridor game.
#[derive(Clone, Debug, Default)]
pub struct QuoridorBuilder {
    config: GameConfig,
    pawns: PlayerMap<Option<Cell>>,
    fences: Vec<Fence>,
    fences_remaining: PlayerMap<Option<u8>>,
    turn: Option<PlayerId>,
}

impl QuoridorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn fences_per_player(mut self, fences: u8) -> Self {
        self.config.fences_per_player = fences;
        self
    }

    pub fn fence_span(mut self, span: FenceSpan) -> Self {
        self.config.fence_span = span;
        self
    }

    /// Start a pawn somewhere other than the middle of its start row.
    pub fn pawn(mut self, player: PlayerId, cell: impl Into<Cell>) -> Self {
        self.pawns[player] = Some(cell.into());
        self
    }

    /// Put a fence on the board before the first turn. Setup fences do not
    /// come out of either player's supply.
    pub fn fence(mut self, fence: Fence) -> Self {
        self.fences.push(fence);
        self
    }

    pub fn fences_remaining(mut self, player: PlayerId, count: u8) -> Self {
        self.fences_remaining[player] = Some(count);
        self
    }

    /// Player to act first (default: P1).
    pub fn turn(mut self, player: PlayerId) -> Self {
        self.turn = Some(player);
        self
    }

    /// Validate the position and build the game.
    pub fn build(self) -> Result<Quoridor, SetupError> {
        let mut board = Board::new(self.config.fence_span);

        for (player, cell) in self.pawns.iter() {
            if let Some(cell) = *cell {
                if !cell.in_bounds() {
                    return Err(SetupError::PawnOutOfBounds { player, cell });
                }
                board.move_pawn(player, cell);
            }
        }
        let p1 = board.pawn(PlayerId::P1);
        if p1 == board.pawn(PlayerId::P2) {
            return Err(SetupError::PawnsOverlap(p1));
        }

        for fence in self.fences {
            board
                .check_fence_placement(fence)
                .map_err(|source| SetupError::InvalidFence { fence, source })?;
            board.place_fence(fence);
        }
        for player in PlayerId::all() {
            if !board.has_path_to_goal(player, player.goal_row()) {
                return Err(SetupError::NoPath(player));
            }
        }

        let max = self.config.fences_per_player;
        let mut players = PlayerMap::with_value(PlayerState::new(max));
        for (player, count) in self.fences_remaining.iter() {
            if let Some(count) = *count {
                if count > max {
                    return Err(SetupError::TooManyFences { player, count, max });
                }
                players[player].fences_remaining = count;
            }
        }

        Ok(Quoridor::from_parts(
            self.config,
            board,
            players,
            self.turn.unwrap_or(PlayerId::P1),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RuleViolation;
    use crate::rules::GameStatus;

    #[test]
    fn test_default_build_matches_new() {
        let built = QuoridorBuilder::new().build().unwrap();
        let fresh = Quoridor::new();

        assert_eq!(built.board(), fresh.board());
        assert_eq!(built.turn(), fresh.turn());
        assert_eq!(built.fences_remaining(PlayerId::P1), 10);
    }

    #[test]
    fn test_custom_position() {
        let game = QuoridorBuilder::new()
            .pawn(PlayerId::P1, (4, 1))
            .pawn(PlayerId::P2, (4, 2))
            .fence(Fence::vertical(2, 2))
            .fences_remaining(PlayerId::P2, 4)
            .turn(PlayerId::P2)
            .build()
            .unwrap();

        assert_eq!(game.position(PlayerId::P1), Cell::new(4, 1));
        assert_eq!(game.position(PlayerId::P2), Cell::new(4, 2));
        assert_eq!(game.fences_remaining(PlayerId::P1), 10);
        assert_eq!(game.fences_remaining(PlayerId::P2), 4);
        assert_eq!(game.turn(), PlayerId::P2);
        assert_eq!(game.board().fences(), &[Fence::vertical(2, 2)]);
    }

    #[test]
    fn test_overlapping_pawns() {
        let result = QuoridorBuilder::new()
            .pawn(PlayerId::P1, (4, 8))
            .build();
        assert_eq!(result.unwrap_err(), SetupError::PawnsOverlap(Cell::new(4, 8)));
    }

    #[test]
    fn test_pawn_out_of_bounds() {
        let result = QuoridorBuilder::new().pawn(PlayerId::P2, (9, 9)).build();
        assert_eq!(
            result.unwrap_err(),
            SetupError::PawnOutOfBounds { player: PlayerId::P2, cell: Cell::new(9, 9) }
        );
    }

    #[test]
    fn test_overlapping_setup_fences() {
        let result = QuoridorBuilder::new()
            .fence(Fence::horizontal(3, 3))
            .fence(Fence::horizontal(3, 3))
            .build();
        assert_eq!(
            result.unwrap_err(),
            SetupError::InvalidFence {
                fence: Fence::horizontal(3, 3),
                source: RuleViolation::OverlappingFence(Cell::new(3, 3)),
            }
        );
    }

    #[test]
    fn test_sealed_setup_rejected() {
        let mut builder = QuoridorBuilder::new();
        for col in 0..9 {
            builder = builder.fence(Fence::horizontal(col, 5));
        }
        assert_eq!(builder.build().unwrap_err(), SetupError::NoPath(PlayerId::P1));
    }

    #[test]
    fn test_too_many_fences() {
        let result = QuoridorBuilder::new()
            .fences_per_player(5)
            .fences_remaining(PlayerId::P1, 6)
            .build();
        assert_eq!(
            result.unwrap_err(),
            SetupError::TooManyFences { player: PlayerId::P1, count: 6, max: 5 }
        );
    }

    #[test]
    fn test_pawn_on_goal_is_won() {
        let game = QuoridorBuilder::new().pawn(PlayerId::P2, (0, 0)).build().unwrap();
        assert_eq!(game.status(), GameStatus::Won(PlayerId::P2));
        assert!(game.is_winner(PlayerId::P2));
    }
}
