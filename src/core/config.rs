//! Game configuration.
//!
//! Quoridor's board size is fixed; what varies between rule sets is the
//! fence supply and how long a fence is.

use serde::{Deserialize, Serialize};

/// How many cell boundaries a single fence covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FenceSpan {
    /// One boundary segment per fence.
    #[default]
    Single,
    /// Two adjacent segments per fence (tournament rules). Fences may not
    /// cross at their midpoints.
    Double,
}

impl FenceSpan {
    /// Number of segments a fence covers.
    #[must_use]
    pub const fn segments(self) -> u8 {
        match self {
            FenceSpan::Single => 1,
            FenceSpan::Double => 2,
        }
    }
}

/// Configuration fixed at game construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fences each player starts with (default: 10).
    pub fences_per_player: u8,

    /// Length of each fence (default: single segment).
    pub fence_span: FenceSpan,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fences_per_player: 10,
            fence_span: FenceSpan::Single,
        }
    }
}

impl GameConfig {
    /// Set the per-player fence supply.
    #[must_use]
    pub fn with_fences(mut self, fences: u8) -> Self {
        self.fences_per_player = fences;
        self
    }

    /// Set the fence span.
    #[must_use]
    pub fn with_fence_span(mut self, span: FenceSpan) -> Self {
        self.fence_span = span;
        self
    }
}
