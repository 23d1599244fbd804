//! Error types.
//!
//! Every `MoveError` is an expected outcome: the move is rejected, nothing
//! is mutated, and the caller may retry. `SetupError` only occurs when a
//! game is constructed.

use super::cell::Color;
use super::position::Direction;

/// Why a move was rejected, in the order the checks run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("unknown player '{0}'")]
    UnknownPlayer(String),

    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("the game is already over")]
    GameOver,

    #[error("it is not {0}'s turn")]
    NotYourTurn(String),

    #[error("the marble at the origin is not {0}")]
    NotYourMarble(Color),

    #[error("cannot push {0} from the edge it would fall off")]
    PushedFromEdge(Direction),

    #[error("the cell behind the origin is occupied")]
    NoRearSupport,

    #[error("the push would remove one of the mover's own marbles")]
    SelfCapture,

    #[error("the move would restore the board from before the opponent's last move")]
    RepeatsPosition,
}

/// Invalid game construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("expected exactly 2 players, got {0}")]
    WrongPlayerCount(usize),

    #[error("both players chose {0}")]
    DuplicateColor(Color),

    #[error("both players are named '{0}'")]
    DuplicateName(String),

    #[error("player names must not be empty")]
    EmptyName,

    #[error("seat {0} does not exist")]
    InvalidSeat(u8),
}

/// Malformed board text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected 7 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {width} cells, expected 7")]
    RowWidth { row: usize, width: usize },

    #[error("unknown glyph '{glyph}' at ({row}, {col})")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
}
