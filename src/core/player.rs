//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index for one of the two players. Hosts address players by name;
//! the engine resolves names to a `PlayerId` once and works with seats.
//!
//! ## PlayerMap
//!
//! Two-slot per-player storage, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::cell::Color;
use super::error::SetupError;

/// Number of players in a Kuba game.
pub const PLAYER_COUNT: usize = 2;

/// Seat of a player: `PlayerId(0)` or `PlayerId(1)`.
///
/// Deserialization goes through `PlayerId::new`; any other seat is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a player ID. Returns `None` for seats other than 0 and 1.
    #[must_use]
    pub const fn new(seat: u8) -> Option<Self> {
        if (seat as usize) < PLAYER_COUNT {
            Some(Self(seat))
        } else {
            None
        }
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats, in order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = SetupError;

    fn try_from(seat: u8) -> Result<Self, Self::Error> {
        PlayerId::new(seat).ok_or(SetupError::InvalidSeat(seat))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A registered player: display name and marble color.
///
/// Both are fixed when the game is created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The color of marble this player moves.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// Per-player data with one slot per seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a map from explicit values in seat order.
    pub const fn from_array(data: [T; PLAYER_COUNT]) -> Self {
        Self { data }
    }

    /// Create a map with both entries set to the same value.
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
        PlayerId::both().zip(self.data.iter())
    }

    /// Find the first seat whose entry satisfies `predicate`.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<PlayerId> {
        self.iter()
            .find(|(_, value)| predicate(value))
            .map(|(player, _)| player)
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
