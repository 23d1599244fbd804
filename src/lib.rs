//! # kuba
//!
//! Rules engine for Kuba, the two-player marble-pushing game on a 7×7 board.
//!
//! ## Rules in brief
//!
//! - Each player owns eight marbles of one color; thirteen neutral red
//!   marbles sit in a diamond in the middle.
//! - A move pushes one of your marbles one cell Left, Right, Forward or
//!   Backward, together with the contiguous line of marbles in front of it.
//! - The pushed marble needs an empty cell (or the board edge) behind it.
//! - You may never push your own marble off the board, and may not undo
//!   your opponent's last move by restoring the previous position.
//! - Pushing a red marble off captures it. Capture all thirteen, or push
//!   every opposing marble off, to win.
//!
//! ## Modules
//!
//! - `core`: cells, coordinates, the board, players, configuration, errors
//! - `rules`: run location, legality checks, push execution
//! - `game`: the game state machine
//! - `session`: a lock-guarded handle for hosts with concurrent callers
//!
//! ## Example
//!
//! ```
//! use kuba::{Color, Direction, GameState};
//!
//! let mut game = GameState::create("Ada", Color::White, "Grace", Color::Black).unwrap();
//! game.attempt_move("Ada", 1, 0, Direction::Right).unwrap();
//! assert_eq!(game.current_turn(), Some("Grace"));
//!
//! // Out of turn
//! assert!(game.attempt_move("Ada", 0, 0, Direction::Backward).is_err());
//! ```

pub mod core;
pub mod game;
pub mod rules;
pub mod session;

pub use crate::core::{
    Board, Cell, Color, Direction, GameConfig, MarbleCounts, MoveError, ParseBoardError, Player, PlayerId,
    PlayerMap, Position, SetupError, BOARD_SIZE, RED_MARBLES,
};

pub use crate::rules::{execute_push, locate_run, MoveRequest, PushOutcome, Run, ValidMove, Validator};

pub use crate::game::{GamePhase, GameState, MoveReport};

pub use crate::session::SharedGame;
