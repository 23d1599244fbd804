//! Kuba rules: which marbles a push moves, whether it is legal, and how
//! the board changes.
//!
//! - `line`: find the run of marbles a push moves
//! - `validator`: ordered legality checks
//! - `push`: apply a legal push to a board copy

pub mod line;
pub mod push;
pub mod validator;

pub use line::{locate_run, Run, RunCells};
pub use push::{execute_push, PushOutcome};
pub use validator::{check_far_end, check_rear_support, MoveRequest, ValidMove, Validator};
