use std::fmt;

/// Lifecycle of a puzzle.
///
/// `Selecting -> Randomizing -> Evaluating | Error`; `reset` returns to
/// `Selecting` from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleState {
    Selecting,
    Randomizing,
    Evaluating,
    Error,
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PuzzleState::Selecting => "selecting",
            PuzzleState::Randomizing => "randomizing",
            PuzzleState::Evaluating => "evaluating",
            PuzzleState::Error => "error",
        };
        write!(f, "{}", name)
    }
}
