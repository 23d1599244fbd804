//! Shared game handle for hosts with concurrent callers.
//!
//! Every move attempt runs entirely inside one lock, so validation and
//! commit are atomic with respect to other attempts.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::{Direction, MoveError};
use crate::game::{GameState, MoveReport};

/// Cloneable handle to a single game.
#[derive(Clone, Debug)]
pub struct SharedGame {
    inner: Arc<Mutex<GameState>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Attempt a move under the game lock.
    pub fn attempt_move(
        &self,
        player: &str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<MoveReport, MoveError> {
        self.lock().attempt_move(player, row, col, direction)
    }

    /// Read the state under the game lock.
    pub fn with_state<R>(&self, read: impl FnOnce(&GameState) -> R) -> R {
        read(&self.lock())
    }

    /// Copy out the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.lock().clone()
    }

    // A panic while holding the lock cannot leave a half-applied move:
    // `attempt_move` only writes after every check has passed.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("game mutex poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}
