//! Countdown - A numbers-round puzzle engine
//!
//! This library picks a goal that can be reached from a selection of numbers
//! by randomly combining them with legal operations, checks submitted
//! solutions against that goal, and renders solutions as minimally
//! parenthesized expressions.

pub mod expression;
pub mod game;
pub mod generator;
pub mod operation;
pub mod value;

// Re-export the main public API
pub use expression::{
    ExpressionError, Factor, Renderer, StepRecord, TextRenderer, convert_steps_to_equation, render,
    write_solution,
};
pub use game::GameConfig;
pub use generator::{GeneratorError, PoolKind, PuzzleGenerator, PuzzleState};
pub use operation::{FixedOperation, Operation, arithmetic_operators};
pub use value::Representable;

/// Render a generated solution as a single plain-text expression
///
/// # Errors
///
/// Returns an error if the steps are empty or do not form one expression.
///
/// # Examples
///
/// ```
/// use countdown::{GameConfig, PuzzleState, solution_text};
///
/// let mut game = GameConfig::default().seeded(7).expect("standard game");
/// for value in [100, 25, 4, 7, 9, 2] {
///     game.choose(&value).expect("tile available");
/// }
/// if game.randomize_goal() == Ok(PuzzleState::Evaluating) {
///     let steps = game.steps().expect("solution available");
///     println!("{}", solution_text(steps).expect("one expression"));
/// }
/// ```
pub fn solution_text<T: Representable>(steps: &[StepRecord<T>]) -> Result<String, ExpressionError> {
    let root = convert_steps_to_equation(steps)?;
    Ok(render(&TextRenderer, &root))
}
