//! Push executor.
//!
//! Applies a validated push to a copy of the board. The live board is
//! never touched here; the game commits the returned board only after the
//! repetition check passes.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell};

use super::line::Run;

/// Result of executing a push on a scratch board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushOutcome {
    /// The board after the push.
    pub board: Board,
    /// The marble pushed off the far edge, if any.
    pub removed: Option<Cell>,
}

impl PushOutcome {
    /// Check if a red marble was pushed off (and should be credited).
    #[must_use]
    pub fn captured_red(&self) -> bool {
        self.removed == Some(Cell::Red)
    }
}

/// Shift every marble of `run` one step in its direction.
///
/// If the far end sits on the edge it is pushed off first. The origin is
/// always left empty. `run` must come from the validator for `board`.
#[must_use]
pub fn execute_push(board: &Board, run: &Run) -> PushOutcome {
    let mut next = *board;
    let cells = run.cells();

    let mut to_shift = cells.as_slice();
    let mut removed = None;
    if run.falls_off() {
        removed = Some(board.get(run.far_end));
        next.set(run.far_end, Cell::Empty);
        to_shift = &cells[..cells.len() - 1];
    }

    for &source in to_shift.iter().rev() {
        if let Some(dest) = source.step(run.direction) {
            next.set(dest, board.get(source));
        }
    }
    next.set(run.origin, Cell::Empty);

    PushOutcome {
        board: next,
        removed,
    }
}
