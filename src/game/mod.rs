//! Game state machine: turn order, captures, the repetition snapshot and
//! win detection around the rules pipeline.

pub mod state;

pub use state::{GamePhase, GameState, MoveReport};
