//! Game configuration.
//!
//! A Kuba game is configured by its two players. Board size, the opening
//! layout, and the red-marble target are rules constants, not settings.
//!
//! ```
//! use kuba::core::{Color, GameConfig};
//!
//! let config = GameConfig::new()
//!     .with_player("Ada", Color::White)
//!     .with_player("Grace", Color::Black);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::cell::Color;
use super::error::SetupError;
use super::player::{Player, PlayerMap, PLAYER_COUNT};

/// Player setup for a new game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Registered players, in seat order.
    pub players: Vec<Player>,
}

impl GameConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player in the next free seat.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>, color: Color) -> Self {
        self.players.push(Player::new(name, color));
        self
    }

    /// Check the structural preconditions: two players, non-empty distinct
    /// names, distinct colors.
    pub fn validate(&self) -> Result<(), SetupError> {
        let [first, second] = match self.players.as_slice() {
            [first, second] => [first, second],
            other => return Err(SetupError::WrongPlayerCount(other.len())),
        };

        if first.name().is_empty() || second.name().is_empty() {
            return Err(SetupError::EmptyName);
        }
        if first.name() == second.name() {
            return Err(SetupError::DuplicateName(first.name().to_string()));
        }
        if first.color() == second.color() {
            return Err(SetupError::DuplicateColor(first.color()));
        }
        Ok(())
    }

    /// Validate and convert into per-seat storage.
    pub(crate) fn into_players(self) -> Result<PlayerMap<Player>, SetupError> {
        self.validate()?;
        let players: [Player; PLAYER_COUNT] = self
            .players
            .try_into()
            .map_err(|rest: Vec<Player>| SetupError::WrongPlayerCount(rest.len()))?;
        Ok(PlayerMap::from_array(players))
    }
}
