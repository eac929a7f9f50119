//! Puzzle state machine: selection, goal search and solution validation

pub mod constants;
mod errors;
mod pool;
mod puzzle;
mod search;
mod state;
mod validation;

pub use errors::GeneratorError;
pub use pool::{Pool, PoolKind, ValueFactory};
pub use puzzle::{EndStateValidator, PuzzleGenerator};
pub use state::PuzzleState;
pub use validation::replay_steps;
