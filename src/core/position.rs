//! Board coordinates and push directions.
//!
//! Rows run front (0) to back (6); columns run left (0) to right (6).
//! Every `Position` is in range by construction, so board indexing
//! never needs to re-check bounds.

use serde::{Deserialize, Serialize};

use super::error::MoveError;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 7;

/// A checked board coordinate.
///
/// Deserialization goes through `Position::new`, so an off-board
/// coordinate is rejected rather than stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a `Position`.
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = MoveError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col).ok_or(MoveError::OutOfBounds {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Position {
    /// Create a position, returning `None` if either index is off the board.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row index, 0 at the front.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index, 0 at the left.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// The neighboring position one step in `direction`, or `None` past the edge.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let row = self.row as isize + d_row;
        let col = self.col as isize + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize)
    }

    /// Check if this position sits on the board edge that `direction` points at.
    ///
    /// A marble here that is pushed in `direction` leaves the board.
    #[must_use]
    pub fn is_on_edge(self, direction: Direction) -> bool {
        self.step(direction).is_none()
    }

    /// Iterate over all 49 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Position {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A push direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    /// Unit step as `(Δrow, Δcol)`.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Forward => (-1, 0),
            Direction::Backward => (1, 0),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Forward => "Forward",
            Direction::Backward => "Backward",
        };
        write!(f, "{name}")
    }
}
