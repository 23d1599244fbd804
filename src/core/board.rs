//! The 7×7 Kuba board.
//!
//! `Board` is plain `Copy` data: 49 cells. Rules code reads it through
//! `get`, writes scratch copies through `set`, and the game commits a
//! finished copy with `replace`.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::ParseBoardError;
use super::position::{Position, BOARD_SIZE};

/// Number of red marbles in a full set.
pub const RED_MARBLES: u8 = 13;

const OPENING: [&str; BOARD_SIZE] = [
    "WW...BB",
    "WW.R.BB",
    "..RRR..",
    ".RRRRR.",
    "..RRR..",
    "BB.R.WW",
    "BB...WW",
];

/// Count of each marble color on a board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarbleCounts {
    pub white: u8,
    pub black: u8,
    pub red: u8,
}

impl MarbleCounts {
    /// Count for a single cell kind. Empty cells count as zero.
    #[must_use]
    pub const fn of(&self, cell: Cell) -> u8 {
        match cell {
            Cell::White => self.white,
            Cell::Black => self.black,
            Cell::Red => self.red,
            Cell::Empty => 0,
        }
    }

    /// Total marbles on the board.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.white + self.black + self.red
    }
}

/// A 7×7 grid of cells, rows front to back, columns left to right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard Kuba opening position.
    ///
    /// ```text
    /// W W . . . B B
    /// W W . R . B B
    /// . . R R R . .
    /// . R R R R R .
    /// . . R R R . .
    /// B B . R . W W
    /// B B . . . W W
    /// ```
    #[must_use]
    pub fn opening() -> Self {
        let mut board = Self::empty();
        for (row, line) in OPENING.iter().enumerate() {
            for (col, glyph) in line.chars().enumerate() {
                board.cells[row][col] = Cell::from_glyph(glyph).unwrap_or_default();
            }
        }
        board
    }

    /// Build a board directly from a grid.
    #[must_use]
    pub const fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Contents of the square at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Overwrite the square at `pos`.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Overwrite every cell with the contents of `other`.
    pub fn replace(&mut self, other: &Board) {
        self.cells = other.cells;
    }

    /// Count the marbles of each kind on the board.
    #[must_use]
    pub fn marble_counts(&self) -> MarbleCounts {
        let mut counts = MarbleCounts::default();
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::White => counts.white += 1,
                Cell::Black => counts.black += 1,
                Cell::Red => counts.red += 1,
                Cell::Empty => {}
            }
        }
        counts
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|cell| cell.glyph().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Parse the dump format. Spaces inside a row and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, glyphs) in rows.iter().enumerate() {
            if glyphs.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowWidth {
                    row,
                    width: glyphs.len(),
                });
            }
            for (col, &glyph) in glyphs.iter().enumerate() {
                board.cells[row][col] = Cell::from_glyph(glyph)
                    .ok_or(ParseBoardError::UnknownGlyph { row, col, glyph })?;
            }
        }
        Ok(board)
    }
}
