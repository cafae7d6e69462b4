//! Game status and fence placement outcomes.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, RuleViolation};

/// Where the game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// Terminal: the player reached their goal row.
    Won(PlayerId),
}

impl GameStatus {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameStatus::Won(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(p) => Some(*p),
            GameStatus::InProgress => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

/// Result of a fence placement request.
///
/// Fair-play failures are kept apart from other rejections: the placement
/// itself was legal, but it would have sealed a player off from their goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FenceOutcome {
    /// The fence was placed and the turn passed.
    Success,
    /// The request was refused before anything changed.
    Rejected(RuleViolation),
    /// The fence was placed, failed the path check, and was taken back.
    FairPlayViolation,
}

impl FenceOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, FenceOutcome::Success)
    }
}

impl From<Result<(), RuleViolation>> for FenceOutcome {
    fn from(result: Result<(), RuleViolation>) -> Self {
        match result {
            Ok(()) => FenceOutcome::Success,
            Err(RuleViolation::FairPlayViolation) => FenceOutcome::FairPlayViolation,
            Err(violation) => FenceOutcome::Rejected(violation),
        }
    }
}
