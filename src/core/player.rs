//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two Quoridor players. Indices are 0-based
//! internally (`P1` = `PlayerId(0)`), while outside callers number players
//! 1 and 2.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::coord::BOARD_SIZE;
use super::error::ParseError;

/// Number of players in a Quoridor game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier.
///
/// Serialized as the 1-based player number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player starting on row 0.
    pub const P1: PlayerId = PlayerId(0);

    /// The player starting on row 8.
    pub const P2: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the 1-based player number used by outside callers.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Look up a player by its 1-based number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<PlayerId> {
        match number {
            1 => Some(Self::P1),
            2 => Some(Self::P2),
            _ => None,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Row this player starts on.
    #[must_use]
    pub const fn start_row(self) -> u8 {
        match self.0 {
            0 => 0,
            _ => BOARD_SIZE - 1,
        }
    }

    /// Row this player must reach to win.
    #[must_use]
    pub const fn goal_row(self) -> u8 {
        self.opponent().start_row()
    }

    /// Iterate over both players, P1 first.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::P1, Self::P2].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = ParseError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        PlayerId::from_number(number).ok_or(ParseError::UnknownPlayer(number))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.number()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_quoridor::core::{PlayerId, PlayerMap};
///
/// let mut fences: PlayerMap<u8> = PlayerMap::with_value(10);
/// fences[PlayerId::P2] -= 1;
///
/// assert_eq!(fences[PlayerId::P1], 10);
/// assert_eq!(fences[PlayerId::P2], 9);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::P1), factory(PlayerId::P2)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
