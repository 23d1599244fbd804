//! Cell contents and player colors.
//!
//! ## Cell
//!
//! A board square holds nothing, a player's marble, or a neutral red marble.
//!
//! ## Color
//!
//! The two colors a player can own. Red is deliberately not a `Color`:
//! it can be captured but never owned or moved directly.

use serde::{Deserialize, Serialize};

/// Contents of a single board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
    Red,
}

impl Cell {
    /// Check if the square holds any marble.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        !matches!(self, Cell::Empty)
    }

    /// The owning color of this marble, if it belongs to a player.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::White => Some(Color::White),
            Cell::Black => Some(Color::Black),
            Cell::Empty | Cell::Red => None,
        }
    }

    /// Single-character glyph used by the board dump.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::White => 'W',
            Cell::Black => 'B',
            Cell::Red => 'R',
        }
    }

    /// Parse a board-dump glyph.
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Cell::Empty),
            'W' => Some(Cell::White),
            'B' => Some(Cell::Black),
            'R' => Some(Cell::Red),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A color a player can own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other player's color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The marble this color places on the board.
    #[must_use]
    pub const fn marble(self) -> Cell {
        match self {
            Color::White => Cell::White,
            Color::Black => Cell::Black,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        color.marble()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
