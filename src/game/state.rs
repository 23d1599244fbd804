//! Game state machine.
//!
//! ## Phases
//!
//! - `NotStarted`: no move accepted yet; either player may open.
//! - `InProgress`: turns alternate strictly.
//! - `Finished`: a winner is recorded; every move is rejected.
//!
//! ## Move pipeline
//!
//! `attempt_move` validates, executes the push on a copy of the board,
//! rejects the result if it recreates the board from before the
//! opponent's last move, and otherwise commits board, snapshot, turn,
//! captures and winner together. A rejected move changes nothing.

use serde::{Deserialize, Serialize};

use crate::core::{
    Board, Cell, Color, Direction, GameConfig, MarbleCounts, MoveError, Player, PlayerId, PlayerMap, Position,
    SetupError, RED_MARBLES,
};
use crate::rules::{execute_push, MoveRequest, PushOutcome, ValidMove, Validator};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Finished,
}

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The player who moved.
    pub mover: PlayerId,
    /// The marble pushed off the board, if any.
    pub removed: Option<Cell>,
    /// Set when this move won the game.
    pub winner: Option<PlayerId>,
}

impl MoveReport {
    /// Check if this move captured a red marble.
    #[must_use]
    pub fn captured_red(&self) -> bool {
        self.removed == Some(Cell::Red)
    }
}

/// Complete state of one Kuba game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    players: PlayerMap<Player>,

    /// Live board.
    board: Board,

    /// Board as it stood before the opponent's most recent move.
    previous_board: Board,

    /// Whose move it is. `None` until the first move is accepted.
    current_turn: Option<PlayerId>,

    winner: Option<PlayerId>,

    /// Red marbles captured per player.
    captured: PlayerMap<u8>,
}

impl GameState {
    /// Create a game from the standard opening.
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        Self::with_board(config, Board::opening())
    }

    /// Create a game from a custom layout. The repetition snapshot starts
    /// equal to the given board.
    ///
    /// The layout is taken as is, including its red count. Red
    /// conservation then holds against that starting count rather than
    /// `RED_MARBLES`; the 13-capture win is still measured against
    /// `RED_MARBLES`, so a layout with fewer reds can only be won by
    /// clearing the opponent's marbles.
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self, SetupError> {
        let players = config.into_players()?;
        Ok(Self {
            players,
            board,
            previous_board: board,
            current_turn: None,
            winner: None,
            captured: PlayerMap::with_value(0),
        })
    }

    /// Create a standard game from two (name, color) pairs.
    pub fn create(
        first_name: impl Into<String>,
        first_color: Color,
        second_name: impl Into<String>,
        second_color: Color,
    ) -> Result<Self, SetupError> {
        Self::new(
            GameConfig::new()
                .with_player(first_name, first_color)
                .with_player(second_name, second_color),
        )
    }

    // === Moves ===

    /// Attempt a move. `Ok` means the move was accepted and committed;
    /// `Err` names the rule that rejected it and leaves the state untouched.
    pub fn attempt_move(
        &mut self,
        player: &str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<MoveReport, MoveError> {
        let request = MoveRequest::new(player, row, col, direction);
        let (valid, outcome) = self.plan(&request).inspect_err(|err| {
            tracing::debug!(player, row, col, %direction, %err, "move rejected");
        })?;

        let report = self.commit(valid, outcome);
        tracing::debug!(player, row, col, %direction, removed = ?report.removed, "move accepted");
        if report.winner.is_some() {
            tracing::info!(winner = player, "game won");
        }
        Ok(report)
    }

    /// Check a move against every rule without applying it.
    pub fn is_move_legal(&self, player: &str, row: usize, col: usize, direction: Direction) -> Result<(), MoveError> {
        self.plan(&MoveRequest::new(player, row, col, direction)).map(|_| ())
    }

    fn plan(&self, request: &MoveRequest<'_>) -> Result<(ValidMove, PushOutcome), MoveError> {
        let validator = Validator {
            board: &self.board,
            players: &self.players,
            current_turn: self.current_turn,
            winner: self.winner,
        };
        let valid = validator.validate(request)?;

        let outcome = execute_push(&self.board, &valid.run);
        if outcome.board == self.previous_board {
            return Err(MoveError::RepeatsPosition);
        }
        Ok((valid, outcome))
    }

    fn commit(&mut self, valid: ValidMove, outcome: PushOutcome) -> MoveReport {
        let mover = valid.mover;

        self.previous_board = self.board;
        self.board.replace(&outcome.board);
        if outcome.captured_red() {
            self.captured[mover] += 1;
        }
        self.current_turn = Some(mover.other());

        let opponent_left = self.board.marble_counts().of(valid.color.opponent().marble());
        if self.captured[mover] >= RED_MARBLES || opponent_left == 0 {
            self.winner = Some(mover);
        }

        MoveReport {
            mover,
            removed: outcome.removed,
            winner: self.winner,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        match (self.winner, self.current_turn) {
            (Some(_), _) => GamePhase::Finished,
            (None, Some(_)) => GamePhase::InProgress,
            (None, None) => GamePhase::NotStarted,
        }
    }

    /// Cell contents, or `None` for an off-board coordinate.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Position::new(row, col).map(|pos| self.board.get(pos))
    }

    /// Marbles of each kind on the live board.
    #[must_use]
    pub fn marble_counts(&self) -> MarbleCounts {
        self.board.marble_counts()
    }

    /// Red marbles captured by the named player.
    #[must_use]
    pub fn captured(&self, player: &str) -> Option<u8> {
        self.player_id(player).map(|id| self.captured[id])
    }

    /// Name of the player to move, once the game has started.
    #[must_use]
    pub fn current_turn(&self) -> Option<&str> {
        self.current_turn.map(|id| self.players[id].name())
    }

    /// Name of the winner, once one is declared.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|id| self.players[id].name())
    }

    /// Seat of the player to move.
    #[must_use]
    pub fn current_turn_id(&self) -> Option<PlayerId> {
        self.current_turn
    }

    /// Seat of the winner.
    #[must_use]
    pub fn winner_id(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Red marbles captured by the player in `player`'s seat.
    #[must_use]
    pub fn captured_by(&self, player: PlayerId) -> u8 {
        self.captured[player]
    }

    /// Both registered players, by seat.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// The player in seat `id`.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Seat of the named player.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.players.find(|player| player.name() == name)
    }

    /// Marble color of the named player.
    #[must_use]
    pub fn player_color(&self, name: &str) -> Option<Color> {
        self.player_id(name).map(|id| self.players[id].color())
    }

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board before the opponent's last move (repetition snapshot).
    #[must_use]
    pub fn previous_board(&self) -> &Board {
        &self.previous_board
    }
}
