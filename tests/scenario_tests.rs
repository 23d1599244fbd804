//! Scripted game scenarios.
//!
//! Each test drives `GameState` through the public API only and checks
//! accepted/rejected outcomes plus the resulting board.

use kuba::{Board, Cell, Color, Direction, GameConfig, GamePhase, GameState, MoveError, RED_MARBLES};

fn standard() -> GameState {
    GameState::create("PlayerA", Color::White, "PlayerB", Color::Black).unwrap()
}

fn custom(board: &str) -> GameState {
    let config = GameConfig::new()
        .with_player("PlayerA", Color::White)
        .with_player("PlayerB", Color::Black);
    GameState::with_board(config, board.parse().unwrap()).unwrap()
}

fn board(text: &str) -> Board {
    text.parse().unwrap()
}

fn assert_red_conserved(game: &GameState) {
    let captured = game.captured("PlayerA").unwrap() + game.captured("PlayerB").unwrap();
    assert_eq!(game.marble_counts().red + captured, RED_MARBLES);
}

// =============================================================================
// Opening moves
// =============================================================================

/// White at (1,0) pushing Right from the opening moves the pair, no capture.
#[test]
fn test_scenario_a_opening_push_right() {
    let mut game = standard();

    let report = game.attempt_move("PlayerA", 1, 0, Direction::Right).unwrap();

    assert_eq!(report.removed, None);
    assert_eq!(game.cell(1, 0), Some(Cell::Empty));
    assert_eq!(game.cell(1, 1), Some(Cell::White));
    assert_eq!(game.cell(1, 2), Some(Cell::White));
    assert_eq!(game.cell(1, 3), Some(Cell::Red));
    assert_eq!(game.marble_counts(), Board::opening().marble_counts());
    assert_eq!(game.current_turn(), Some("PlayerB"));
    assert_eq!(game.captured("PlayerA"), Some(0));
}

#[test]
fn test_either_player_may_open() {
    let mut game = standard();
    assert_eq!(game.phase(), GamePhase::NotStarted);

    game.attempt_move("PlayerB", 6, 0, Direction::Forward).unwrap();

    assert_eq!(game.phase(), GamePhase::InProgress);
    assert_eq!(game.current_turn(), Some("PlayerA"));
    assert_eq!(game.cell(4, 0), Some(Cell::Black));
    assert_eq!(game.cell(6, 0), Some(Cell::Empty));
}

#[test]
fn test_unknown_player_and_bad_coordinates() {
    let mut game = standard();

    assert_eq!(
        game.attempt_move("PlayerC", 1, 0, Direction::Right).unwrap_err(),
        MoveError::UnknownPlayer("PlayerC".to_string())
    );
    assert_eq!(
        game.attempt_move("PlayerA", 9, 0, Direction::Right).unwrap_err(),
        MoveError::OutOfBounds { row: 9, col: 0 }
    );
    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert_eq!(game.board(), &Board::opening());
}

// =============================================================================
// Far-end rules
// =============================================================================

/// White pushes a full row Right from (0,0); the far-end marble decides.
#[test]
fn test_scenario_b_far_end_white_rejected() {
    let mut game = custom(
        "WWWWWWW
         .......
         .......
         .......
         .......
         .......
         B......",
    );
    assert_eq!(
        game.attempt_move("PlayerA", 0, 0, Direction::Right).unwrap_err(),
        MoveError::SelfCapture
    );
    assert_eq!(game.marble_counts().white, 7);
}

#[test]
fn test_scenario_b_far_end_red_captured() {
    let mut game = custom(
        "WWWWWWR
         .......
         .......
         .......
         .......
         .......
         B......",
    );
    let report = game.attempt_move("PlayerA", 0, 0, Direction::Right).unwrap();

    assert!(report.captured_red());
    assert_eq!(game.captured("PlayerA"), Some(1));
    assert_eq!(
        game.board(),
        &board(
            ".WWWWWW
             .......
             .......
             .......
             .......
             .......
             B......"
        )
    );
}

#[test]
fn test_scenario_b_far_end_black_removed_without_credit() {
    let mut game = custom(
        "WWWWWWB
         .......
         .......
         .......
         .......
         .......
         B......",
    );
    let report = game.attempt_move("PlayerA", 0, 0, Direction::Right).unwrap();

    assert_eq!(report.removed, Some(Cell::Black));
    assert_eq!(game.captured("PlayerA"), Some(0));
    assert_eq!(game.marble_counts().black, 1);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_single_own_marble_cannot_be_pushed_off() {
    let mut game = custom(
        ".......
         ......W
         .......
         .......
         .......
         .......
         B......",
    );
    assert_eq!(
        game.attempt_move("PlayerA", 1, 6, Direction::Right).unwrap_err(),
        MoveError::PushedFromEdge(Direction::Right)
    );
    game.attempt_move("PlayerA", 1, 6, Direction::Left).unwrap();
    assert_eq!(game.cell(1, 5), Some(Cell::White));
}

// =============================================================================
// Repetition rule
// =============================================================================

/// Black may not answer by restoring the board from before White's move.
#[test]
fn test_scenario_c_undo_rejected() {
    let mut game = standard();

    game.attempt_move("PlayerA", 1, 0, Direction::Right).unwrap();
    game.attempt_move("PlayerB", 1, 6, Direction::Left).unwrap();
    let before_white = *game.board();
    game.attempt_move("PlayerA", 1, 1, Direction::Right).unwrap();
    assert_eq!(game.previous_board(), &before_white);

    let live = *game.board();
    assert_eq!(
        game.attempt_move("PlayerB", 1, 6, Direction::Left).unwrap_err(),
        MoveError::RepeatsPosition
    );
    assert_eq!(game.board(), &live);
    assert_eq!(game.current_turn(), Some("PlayerB"));

    // A different move is fine
    game.attempt_move("PlayerB", 6, 0, Direction::Forward).unwrap();
    assert_eq!(game.current_turn(), Some("PlayerA"));
}

#[test]
fn test_push_through_red_stops_short_of_edge() {
    let mut game = custom(
        ".......
         .......
         .......
         .......
         .......
         .......
         WRB....",
    );
    game.attempt_move("PlayerA", 6, 0, Direction::Right).unwrap();

    assert_eq!(game.cell(6, 0), Some(Cell::Empty));
    assert_eq!(game.cell(6, 1), Some(Cell::White));
    assert_eq!(game.cell(6, 2), Some(Cell::Red));
    assert_eq!(game.cell(6, 3), Some(Cell::Black));
    assert_eq!(game.captured("PlayerA"), Some(0));
    assert_eq!(game.marble_counts().red, 1);
}

// =============================================================================
// Win conditions
// =============================================================================

#[test]
fn test_win_by_capturing_thirteen_reds() {
    let mut game = custom(
        "WRRRRRR
         WRRRRRR
         .....WR
         .......
         .......
         .......
         ...B...",
    );
    assert_red_conserved(&game);

    let white_moves = (0..6)
        .map(|col| (0, col))
        .chain((0..6).map(|col| (1, col)))
        .chain(std::iter::once((2, 5)));

    let mut black_at = 3;
    for (i, (row, col)) in white_moves.enumerate() {
        let report = game.attempt_move("PlayerA", row, col, Direction::Right).unwrap();
        assert!(report.captured_red(), "white move {i} should capture");
        assert_red_conserved(&game);

        if game.winner().is_some() {
            break;
        }

        let direction = if black_at == 3 { Direction::Right } else { Direction::Left };
        game.attempt_move("PlayerB", 6, black_at, direction).unwrap();
        black_at = if black_at == 3 { 4 } else { 3 };
    }

    assert_eq!(game.captured("PlayerA"), Some(RED_MARBLES));
    assert_eq!(game.marble_counts().red, 0);
    assert_eq!(game.winner(), Some("PlayerA"));
    assert_eq!(game.phase(), GamePhase::Finished);
    assert_eq!(
        game.attempt_move("PlayerB", 6, black_at, Direction::Left).unwrap_err(),
        MoveError::GameOver
    );
}

#[test]
fn test_win_by_removing_all_opponent_marbles() {
    let mut game = custom(
        "....WWB
         .......
         .......
         .......
         .......
         .W.....
         B......",
    );

    let report = game.attempt_move("PlayerA", 0, 4, Direction::Right).unwrap();
    assert_eq!(report.removed, Some(Cell::Black));
    assert_eq!(game.marble_counts().black, 1);
    assert_eq!(game.winner(), None);

    game.attempt_move("PlayerB", 6, 0, Direction::Right).unwrap();
    assert_eq!(game.cell(6, 1), Some(Cell::Black));

    let report = game.attempt_move("PlayerA", 5, 1, Direction::Backward).unwrap();
    assert_eq!(report.removed, Some(Cell::Black));
    assert_eq!(game.marble_counts().black, 0);
    assert_eq!(game.winner(), Some("PlayerA"));
    assert_eq!(
        game.attempt_move("PlayerB", 6, 1, Direction::Left).unwrap_err(),
        MoveError::GameOver
    );
}

#[test]
fn test_display_dump() {
    let game = standard();
    let dump = game.board().to_string();
    let lines: Vec<_> = dump.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "W W . . . B B");
    assert_eq!(lines[3], ". R R R R R .");
    assert_eq!(lines[6], "B B . . . W W");
}
