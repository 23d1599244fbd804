//! Line locator: find the contiguous run of marbles a push moves.
//!
//! Starting at the pushing marble, the run extends cell by cell in the
//! push direction while cells are occupied. It ends at the last occupied
//! cell before an empty cell or the board edge.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Direction, Position, BOARD_SIZE};

/// Positions of a run, origin first. A run never exceeds one board line.
pub type RunCells = SmallVec<[Position; BOARD_SIZE]>;

/// A contiguous run of marbles along a push line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub origin: Position,
    pub far_end: Position,
    pub direction: Direction,
}

impl Run {
    /// Number of marbles in the run, origin and far end inclusive.
    #[must_use]
    pub fn marble_count(&self) -> usize {
        let rows = self.origin.row().abs_diff(self.far_end.row());
        let cols = self.origin.col().abs_diff(self.far_end.col());
        rows.max(cols) + 1
    }

    /// Index of the far end along the push axis (column for Left/Right,
    /// row for Forward/Backward).
    #[must_use]
    pub fn far_end_index(&self) -> usize {
        match self.direction {
            Direction::Left | Direction::Right => self.far_end.col(),
            Direction::Forward | Direction::Backward => self.far_end.row(),
        }
    }

    /// Check if the far-end marble would leave the board when pushed.
    #[must_use]
    pub fn falls_off(&self) -> bool {
        self.far_end.is_on_edge(self.direction)
    }

    /// Run positions from origin to far end.
    #[must_use]
    pub fn cells(&self) -> RunCells {
        let mut cells = RunCells::new();
        let mut current = self.origin;
        cells.push(current);
        while current != self.far_end {
            match current.step(self.direction) {
                Some(next) => {
                    cells.push(next);
                    current = next;
                }
                None => break,
            }
        }
        cells
    }
}

/// Locate the run starting at `origin` and extending in `direction`.
///
/// The origin is expected to hold a marble; if it is empty the run
/// degenerates to the origin alone.
#[must_use]
pub fn locate_run(board: &Board, origin: Position, direction: Direction) -> Run {
    let mut far_end = origin;
    while let Some(next) = far_end.step(direction) {
        if !board.get(next).is_occupied() {
            break;
        }
        far_end = next;
    }

    tracing::trace!(%origin, %direction, %far_end, "located run");

    Run {
        origin,
        far_end,
        direction,
    }
}
