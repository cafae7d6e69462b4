//! The Quoridor game controller.
//!
//! Every request is validated in full before anything changes. The single
//! exception is fence placement, where the fence goes on the board for the
//! path check and comes straight back off if fair play fails, all within one
//! call.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::status::{FenceOutcome, GameStatus};
use crate::board::Board;
use crate::core::{
    Action, ActionRecord, Cell, Fence, GameConfig, PlayerId, PlayerMap, RuleResult, RuleViolation,
};

/// Per-player counters held by the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Fences still available to place.
    pub fences_remaining: u8,
    /// Set when the player wins; never cleared.
    pub won: bool,
}

impl PlayerState {
    #[must_use]
    pub fn new(fences: u8) -> Self {
        Self {
            fences_remaining: fences,
            won: false,
        }
    }
}

/// A game of Quoridor.
///
/// ## Example
///
/// ```
/// use rust_quoridor::{Cell, Fence, FenceOutcome, PlayerId, Quoridor};
///
/// let mut game = Quoridor::new();
/// assert!(game.submit_move(PlayerId::P1, Cell::new(4, 1)));
/// assert_eq!(game.turn(), PlayerId::P2);
///
/// let outcome = game.submit_fence(PlayerId::P2, Fence::horizontal(4, 2));
/// assert_eq!(outcome, FenceOutcome::Success);
/// assert_eq!(game.fences_remaining(PlayerId::P2), 9);
/// ```
#[derive(Clone, Debug)]
pub struct Quoridor {
    config: GameConfig,
    board: Board,
    players: PlayerMap<PlayerState>,
    turn: PlayerId,
    status: GameStatus,
    history: Vector<ActionRecord>,
}

impl Quoridor {
    /// Standard opening position with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Opening position for a custom configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        let board = Board::new(config.fence_span);
        let players = PlayerMap::with_value(PlayerState::new(config.fences_per_player));
        Self::from_parts(config, board, players, PlayerId::P1)
    }

    pub(crate) fn from_parts(
        config: GameConfig,
        board: Board,
        players: PlayerMap<PlayerState>,
        turn: PlayerId,
    ) -> Self {
        let mut game = Self {
            config,
            board,
            players,
            turn,
            status: GameStatus::InProgress,
            history: Vector::new(),
        };
        game.detect_winner();
        game
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Has this player won?
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.players[player].won
    }

    /// [`is_winner`](Self::is_winner) for a raw 1-based player number.
    /// Unknown numbers are never winners.
    #[must_use]
    pub fn is_winner_number(&self, number: u8) -> bool {
        PlayerId::from_number(number).is_some_and(|player| self.is_winner(player))
    }

    #[must_use]
    pub fn position(&self, player: PlayerId) -> Cell {
        self.board.pawn(player)
    }

    #[must_use]
    pub fn fences_remaining(&self, player: PlayerId) -> u8 {
        self.players[player].fences_remaining
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn last_action(&self) -> Option<&ActionRecord> {
        self.history.last()
    }

    /// Cells `player` could move to right now, ignoring whose turn it is.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> SmallVec<[Cell; 8]> {
        self.board.legal_pawn_moves(player)
    }

    /// Moves `player` needs to reach their goal row, following legal moves.
    #[must_use]
    pub fn distance_to_goal(&self, player: PlayerId) -> Option<usize> {
        self.board.distance_to_goal(player)
    }

    // === Pawn moves ===

    /// Move a pawn. Returns false, with no state change, on any rejection.
    pub fn submit_move(&mut self, player: PlayerId, target: Cell) -> bool {
        self.try_move(player, target).is_ok()
    }

    /// Move a pawn, reporting why a rejected move was refused.
    pub fn try_move(&mut self, player: PlayerId, target: Cell) -> RuleResult<()> {
        self.check_can_act(player)?;
        let kind = self.board.check_pawn_move(player, target).inspect_err(|violation| {
            trace!(player = %player, target = %target, %violation, "move rejected");
        })?;

        self.board.move_pawn(player, target);
        self.record(player, Action::Move(target));
        self.turn = player.opponent();
        debug!(player = %player, target = %target, ?kind, "pawn moved");

        self.detect_winner();
        Ok(())
    }

    // === Fences ===

    /// Place a fence, distinguishing fair-play failures from other rejections.
    pub fn submit_fence(&mut self, player: PlayerId, fence: Fence) -> FenceOutcome {
        self.try_fence(player, fence).into()
    }

    /// Place a fence. A fair-play failure comes back as
    /// `Err(RuleViolation::FairPlayViolation)` with the board restored.
    pub fn try_fence(&mut self, player: PlayerId, fence: Fence) -> RuleResult<()> {
        self.check_can_act(player)?;
        if self.players[player].fences_remaining == 0 {
            trace!(player = %player, "no fences remaining");
            return Err(RuleViolation::NoFencesRemaining(player));
        }
        self.board.check_fence_placement(fence).inspect_err(|violation| {
            trace!(player = %player, fence = %fence, %violation, "fence rejected");
        })?;

        self.board.place_fence(fence);
        if !self.fair_play_holds() {
            self.board.remove_fence(fence);
            trace!(player = %player, fence = %fence, "fence rolled back: fair play");
            return Err(RuleViolation::FairPlayViolation);
        }

        self.players[player].fences_remaining -= 1;
        self.record(player, Action::Fence(fence));
        self.turn = player.opponent();
        debug!(
            player = %player,
            fence = %fence,
            remaining = self.players[player].fences_remaining,
            "fence placed"
        );
        Ok(())
    }

    // === Generic actions ===

    /// Apply either kind of action.
    pub fn try_action(&mut self, player: PlayerId, action: Action) -> RuleResult<()> {
        match action {
            Action::Move(target) => self.try_move(player, target),
            Action::Fence(fence) => self.try_fence(player, fence),
        }
    }

    // === Internals ===

    fn check_can_act(&self, player: PlayerId) -> RuleResult<()> {
        if let GameStatus::Won(winner) = self.status {
            trace!(player = %player, winner = %winner, "request after game end");
            return Err(RuleViolation::GameAlreadyWon(winner));
        }
        if player != self.turn {
            trace!(player = %player, turn = %self.turn, "request out of turn");
            return Err(RuleViolation::InvalidTurn(player));
        }
        Ok(())
    }

    /// Both players must keep a route to their goal rows.
    fn fair_play_holds(&self) -> bool {
        let placer = self.turn;
        [placer.opponent(), placer]
            .into_iter()
            .all(|p| self.board.has_path_to_goal(p, p.goal_row()))
    }

    fn detect_winner(&mut self) {
        if self.status.is_over() {
            return;
        }
        for player in PlayerId::all() {
            if self.board.pawn(player).row == player.goal_row() {
                self.players[player].won = true;
                self.status = GameStatus::Won(player);
                debug!(winner = %player, "game won");
                return;
            }
        }
    }

    fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(player, action, sequence));
    }
}

impl Default for Quoridor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FenceSpan;

    #[test]
    fn test_game_creation() {
        let game = Quoridor::new();

        assert_eq!(game.position(PlayerId::P1), Cell::new(4, 0));
        assert_eq!(game.position(PlayerId::P2), Cell::new(4, 8));
        assert_eq!(game.fences_remaining(PlayerId::P1), 10);
        assert_eq!(game.fences_remaining(PlayerId::P2), 10);
        assert_eq!(game.turn(), PlayerId::P1);
        assert_eq!(game.winner(), None);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::default().with_fences(3).with_fence_span(FenceSpan::Double);
        let game = Quoridor::with_config(config.clone());

        assert_eq!(game.fences_remaining(PlayerId::P1), 3);
        assert_eq!(game.board().fence_span(), FenceSpan::Double);
        assert_eq!(game.config(), &config);
    }

    #[test]
    fn test_move_flips_turn() {
        let mut game = Quoridor::new();

        assert!(game.submit_move(PlayerId::P1, Cell::new(4, 1)));
        assert_eq!(game.position(PlayerId::P1), Cell::new(4, 1));
        assert_eq!(game.turn(), PlayerId::P2);
    }

    #[test]
    fn test_move_out_of_turn() {
        let mut game = Quoridor::new();

        assert_eq!(
            game.try_move(PlayerId::P2, Cell::new(4, 7)),
            Err(RuleViolation::InvalidTurn(PlayerId::P2))
        );
        assert_eq!(game.position(PlayerId::P2), Cell::new(4, 8));
        assert_eq!(game.turn(), PlayerId::P1);
    }

    #[test]
    fn test_illegal_move_leaves_state() {
        let mut game = Quoridor::new();

        assert!(!game.submit_move(PlayerId::P1, Cell::new(4, 2)));
        assert_eq!(game.position(PlayerId::P1), Cell::new(4, 0));
        assert_eq!(game.turn(), PlayerId::P1);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_fence_decrements_and_flips() {
        let mut game = Quoridor::new();

        let outcome = game.submit_fence(PlayerId::P1, Fence::vertical(3, 7));
        assert_eq!(outcome, FenceOutcome::Success);
        assert_eq!(game.fences_remaining(PlayerId::P1), 9);
        assert_eq!(game.fences_remaining(PlayerId::P2), 10);
        assert_eq!(game.turn(), PlayerId::P2);
        assert!(game.board().has_fence(Fence::vertical(3, 7)));
    }

    #[test]
    fn test_overlapping_fence_rejected() {
        let mut game = Quoridor::new();
        assert!(game.submit_fence(PlayerId::P1, Fence::vertical(3, 7)).is_success());

        let outcome = game.submit_fence(PlayerId::P2, Fence::vertical(3, 7));
        assert_eq!(
            outcome,
            FenceOutcome::Rejected(RuleViolation::OverlappingFence(Cell::new(3, 7)))
        );
        assert_eq!(game.fences_remaining(PlayerId::P2), 10);
        assert_eq!(game.turn(), PlayerId::P2);
    }

    #[test]
    fn test_no_fences_remaining() {
        let mut game = Quoridor::with_config(GameConfig::default().with_fences(0));

        assert_eq!(
            game.submit_fence(PlayerId::P1, Fence::vertical(3, 7)),
            FenceOutcome::Rejected(RuleViolation::NoFencesRemaining(PlayerId::P1))
        );
        assert!(game.board().fences().is_empty());
    }

    #[test]
    fn test_fair_play_rollback() {
        let mut game = Quoridor::new();
        // Box P1 into (4, 0): fences left and right, then the lid.
        assert!(game.submit_fence(PlayerId::P1, Fence::vertical(4, 0)).is_success());
        assert!(game.submit_fence(PlayerId::P2, Fence::vertical(5, 0)).is_success());

        let before = game.board().clone();
        let outcome = game.submit_fence(PlayerId::P1, Fence::horizontal(4, 1));

        assert_eq!(outcome, FenceOutcome::FairPlayViolation);
        assert_eq!(game.board(), &before);
        assert_eq!(game.fences_remaining(PlayerId::P1), 9);
        assert_eq!(game.turn(), PlayerId::P1);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_win_is_terminal() {
        let mut game = Quoridor::new();
        // P1 walks straight up column 4 while P2 shuffles sideways.
        let p2_moves = [(3, 8), (2, 8), (3, 8), (2, 8), (3, 8), (2, 8), (3, 8), (2, 8)];
        for (row, p2) in (1..=8).zip(p2_moves) {
            assert!(game.submit_move(PlayerId::P1, Cell::new(4, row)), "P1 move to row {row}");
            if game.is_over() {
                break;
            }
            assert!(game.submit_move(PlayerId::P2, p2.into()), "P2 move {p2:?}");
        }

        assert!(game.is_winner(PlayerId::P1));
        assert!(game.is_winner_number(1));
        assert!(!game.is_winner_number(2));
        assert!(!game.is_winner_number(3));
        assert_eq!(game.status(), GameStatus::Won(PlayerId::P1));

        let turn = game.turn();
        let target = game.legal_moves(turn)[0];
        assert_eq!(
            game.try_move(turn, target),
            Err(RuleViolation::GameAlreadyWon(PlayerId::P1))
        );
        assert_eq!(
            game.submit_fence(PlayerId::P2, Fence::vertical(1, 1)),
            FenceOutcome::Rejected(RuleViolation::GameAlreadyWon(PlayerId::P1))
        );
        assert_eq!(game.turn(), turn);
    }

    #[test]
    fn test_history_records_accepted_actions() {
        let mut game = Quoridor::new();
        game.submit_move(PlayerId::P1, Cell::new(4, 1));
        game.submit_move(PlayerId::P1, Cell::new(4, 2)); // out of turn
        game.submit_fence(PlayerId::P2, Fence::horizontal(0, 4));

        let history: Vec<_> = game.history().iter().copied().collect();
        assert_eq!(
            history,
            vec![
                ActionRecord::new(PlayerId::P1, Action::Move(Cell::new(4, 1)), 0),
                ActionRecord::new(PlayerId::P2, Action::Fence(Fence::horizontal(0, 4)), 1),
            ]
        );
        assert_eq!(game.last_action().map(|r| r.player), Some(PlayerId::P2));
    }

    #[test]
    fn test_game_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Quoridor>();
    }

    #[test]
    fn test_try_action_dispatch() {
        let mut game = Quoridor::new();
        assert_eq!(game.try_action(PlayerId::P1, Action::Move(Cell::new(3, 0))), Ok(()));
        assert_eq!(
            game.try_action(PlayerId::P2, Action::Fence(Fence::vertical(0, 0))),
            Err(RuleViolation::OutOfBounds(Cell::new(0, 0)))
        );
    }
}
