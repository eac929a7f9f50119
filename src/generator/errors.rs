use thiserror::Error;

use crate::generator::pool::PoolKind;
use crate::generator::state::PuzzleState;

/// Misuse of a generator. Failing to find a goal is not an error; it is
/// reported through [`PuzzleState::Error`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Cannot call {operation} while the puzzle is {state}")]
    InvalidState {
        operation: &'static str,
        state: PuzzleState,
    },
    #[error(
        "Selection bounds must satisfy 1 <= min_use ({min_use}) <= max_use ({max_use}) <= available values ({available})"
    )]
    InvalidUseBounds {
        min_use: usize,
        max_use: usize,
        available: usize,
    },
    #[error("At least one operator is required")]
    NoOperators,
    #[error("No unchosen tile holds the value {0}")]
    ValueUnavailable(String),
    #[error("{pool} pool has no tile at position {index} (size {len})")]
    TileOutOfRange {
        pool: PoolKind,
        index: usize,
        len: usize,
    },
    #[error("{pool} tile at position {index} has already been chosen")]
    TileAlreadyChosen { pool: PoolKind, index: usize },
    #[error("Only {selected} values chosen, at least {min_use} are required")]
    SelectionTooSmall { selected: usize, min_use: usize },
}
