//! Move validator.
//!
//! Runs the legality checks in a fixed order and stops at the first
//! failure:
//!
//! 1. the named player is registered
//! 2. the origin is on the board
//! 3. no winner has been declared
//! 4. it is the mover's turn (anyone may open the game)
//! 5. the origin holds the mover's marble
//! 6. the origin has room behind it to be pushed
//! 7. the push does not remove the mover's own marble
//!
//! The repetition rule needs the executed board, so the game state
//! applies it after the push.

use crate::core::{Board, Color, Direction, MoveError, Player, PlayerId, PlayerMap, Position};

use super::line::{locate_run, Run};

/// A move as a host submits it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest<'a> {
    pub player: &'a str,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl<'a> MoveRequest<'a> {
    #[must_use]
    pub const fn new(player: &'a str, row: usize, col: usize, direction: Direction) -> Self {
        Self {
            player,
            row,
            col,
            direction,
        }
    }
}

/// A move that passed every board-level check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidMove {
    pub mover: PlayerId,
    pub color: Color,
    pub run: Run,
}

/// Read-only view of the state needed to judge a move.
#[derive(Clone, Copy, Debug)]
pub struct Validator<'a> {
    pub board: &'a Board,
    pub players: &'a PlayerMap<Player>,
    pub current_turn: Option<PlayerId>,
    pub winner: Option<PlayerId>,
}

impl Validator<'_> {
    /// Run every check against `request`.
    pub fn validate(&self, request: &MoveRequest<'_>) -> Result<ValidMove, MoveError> {
        let mover = self
            .players
            .find(|player| player.name() == request.player)
            .ok_or_else(|| MoveError::UnknownPlayer(request.player.to_string()))?;

        let origin = Position::new(request.row, request.col).ok_or(MoveError::OutOfBounds {
            row: request.row,
            col: request.col,
        })?;

        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }

        if let Some(turn) = self.current_turn {
            if turn != mover {
                return Err(MoveError::NotYourTurn(request.player.to_string()));
            }
        }

        let color = self.players[mover].color();
        if self.board.get(origin) != color.marble() {
            return Err(MoveError::NotYourMarble(color));
        }

        check_rear_support(self.board, origin, request.direction)?;

        let run = locate_run(self.board, origin, request.direction);
        check_far_end(self.board, &run, color)?;

        Ok(ValidMove { mover, color, run })
    }
}

/// A marble can be pushed only if nothing stands behind it.
///
/// Pushing from the edge the marble would fall off is never legal. Any
/// other origin needs the cell opposite the push direction to be empty
/// or off the board.
pub fn check_rear_support(board: &Board, origin: Position, direction: Direction) -> Result<(), MoveError> {
    if origin.is_on_edge(direction) {
        return Err(MoveError::PushedFromEdge(direction));
    }

    match origin.step(direction.reverse()) {
        Some(rear) if board.get(rear).is_occupied() => Err(MoveError::NoRearSupport),
        _ => Ok(()),
    }
}

/// Reject a push whose far-end marble would leave the board and belongs
/// to the mover.
pub fn check_far_end(board: &Board, run: &Run, color: Color) -> Result<(), MoveError> {
    if run.falls_off() && run.far_end != run.origin && board.get(run.far_end) == color.marble() {
        return Err(MoveError::SelfCapture);
    }
    Ok(())
}
