use log::debug;
use rand::Rng;

use crate::expression::StepRecord;
use crate::generator::errors::GeneratorError;
use crate::generator::puzzle::PuzzleGenerator;
use crate::generator::state::PuzzleState;
use crate::value::{Representable, position_of};

impl<T: Representable, R: Rng> PuzzleGenerator<T, R> {
    /// Check a submitted solution against the selection and the goal.
    ///
    /// Steps are replayed strictly in the given order: every operand must
    /// already be available when its step is reached, so a correct solution
    /// listed out of dependency order is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error unless the puzzle is `Evaluating`.
    pub fn is_valid_solution(&self, candidate: &[StepRecord<T>]) -> Result<bool, GeneratorError> {
        self.require("is_valid_solution", &[PuzzleState::Evaluating])?;

        let values_used = candidate.len() + 1;
        if values_used < self.min_use || values_used > self.max_use {
            debug!(
                "Rejecting solution of {} steps: must use {}..={} values",
                candidate.len(),
                self.min_use,
                self.max_use
            );
            return Ok(false);
        }

        let Some(goal) = self.goal.as_ref() else {
            return Ok(false);
        };

        Ok(replay_steps(&self.selected, candidate).is_some_and(|last| last.is_equivalent_to(goal)))
    }
}

/// Consume `steps` in order against the multiset `values`.
///
/// Each step removes its two operands and adds its result. Returns the single
/// value left at the end, or `None` if an operand is missing, an operation is
/// illegal, a recorded result is wrong, or more than one value remains.
pub fn replay_steps<T: Representable>(values: &[T], steps: &[StepRecord<T>]) -> Option<T> {
    let mut available = values.to_vec();

    for (i, step) in steps.iter().enumerate() {
        let left = step.left().value();
        let right = step.right().value();

        let Some(left_index) = position_of(&available, left) else {
            debug!("Step {}: left operand {} is not available", i, left.as_text());
            return None;
        };
        available.swap_remove(left_index);

        let Some(right_index) = position_of(&available, right) else {
            debug!("Step {}: right operand {} is not available", i, right.as_text());
            return None;
        };
        available.swap_remove(right_index);

        let operation = step.operation();
        if !operation.is_legal(left, right) {
            debug!(
                "Step {}: {} {} {} is not legal",
                i,
                left.as_text(),
                operation.symbol(),
                right.as_text()
            );
            return None;
        }

        match operation.evaluate(left, right) {
            Some(actual) if actual.is_equivalent_to(step.result()) => {}
            _ => {
                debug!(
                    "Step {}: recorded result {} is wrong",
                    i,
                    step.result().as_text()
                );
                return None;
            }
        }

        available.push(step.result().clone());
    }

    if available.len() == 1 {
        available.pop()
    } else {
        debug!("{} values left after replay, expected 1", available.len());
        None
    }
}
