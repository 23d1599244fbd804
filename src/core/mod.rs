//! Core types: cells, coordinates, the board, players, configuration, errors.
//!
//! Everything here is plain data. Legality and mechanics live in `rules`;
//! turn bookkeeping lives in `game`.

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod player;
pub mod position;

pub use board::{Board, MarbleCounts, RED_MARBLES};
pub use cell::{Cell, Color};
pub use config::GameConfig;
pub use error::{MoveError, ParseBoardError, SetupError};
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use position::{Direction, Position, BOARD_SIZE};
