use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::expression::{Factor, StepRecord};
use crate::generator::constants::REPETITIONS;
use crate::generator::errors::GeneratorError;
use crate::generator::puzzle::PuzzleGenerator;
use crate::generator::state::PuzzleState;
use crate::operation::Operation;
use crate::value::Representable;

impl<T: Representable, R: Rng> PuzzleGenerator<T, R> {
    /// Build a new goal by randomly combining the selected values.
    ///
    /// Each trial repeatedly takes two random operands, applies a random
    /// legal operator and puts the result back, until a single value is left.
    /// The first trial whose final value passes the end-state check becomes
    /// the goal. Calling this again while `Evaluating` replaces the goal.
    ///
    /// Returns the new state: `Evaluating` on success, `Error` when every
    /// trial failed.
    ///
    /// # Errors
    ///
    /// Returns an error unless the puzzle is `Randomizing` or `Evaluating`.
    pub fn randomize_goal(&mut self) -> Result<PuzzleState, GeneratorError> {
        self.require(
            "randomize_goal",
            &[PuzzleState::Randomizing, PuzzleState::Evaluating],
        )?;

        for trial in 0..REPETITIONS {
            let Some((value, steps)) = run_trial(&self.selected, &self.operators, &mut self.rng)
            else {
                debug!("Trial {} abandoned: no legal operator for a pair", trial);
                continue;
            };

            if (self.end_state_validator)(&value) {
                info!(
                    "Found goal {} in {} steps after {} trial(s)",
                    value.as_text(),
                    steps.len(),
                    trial + 1
                );
                self.goal = Some(value);
                self.steps = steps;
                self.state = PuzzleState::Evaluating;
                return Ok(self.state);
            }

            debug!("Trial {} reached {}, rejected as end state", trial, value.as_text());
        }

        warn!("No acceptable goal found after {} trials", REPETITIONS);
        self.goal = None;
        self.steps.clear();
        self.state = PuzzleState::Error;
        Ok(self.state)
    }
}

/// One randomized reduction of `selected` to a single value
fn run_trial<T, R>(
    selected: &[T],
    operators: &[Operation<T>],
    rng: &mut R,
) -> Option<(T, Vec<StepRecord<T>>)>
where
    T: Representable,
    R: Rng,
{
    let mut working: Vec<Factor<T>> = selected.iter().cloned().map(Factor::Literal).collect();
    let mut steps = Vec::with_capacity(selected.len().saturating_sub(1));

    while working.len() > 1 {
        let left = working.swap_remove(rng.gen_range(0..working.len()));
        let right = working.swap_remove(rng.gen_range(0..working.len()));

        let operation = draw_operator(operators, left.value(), right.value(), rng)?;
        let step = StepRecord::apply(operation, left, right).ok()?;

        working.push(Factor::from(step.clone()));
        steps.push(step);
    }

    let last = working.pop()?;
    Some((last.value().clone(), steps))
}

/// Draw operators with replacement until one is legal for the pair
fn draw_operator<'a, T, R>(
    operators: &'a [Operation<T>],
    left: &T,
    right: &T,
    rng: &mut R,
) -> Option<&'a Operation<T>>
where
    T: Representable,
    R: Rng,
{
    for _ in 0..REPETITIONS {
        let operation = operators.choose(rng)?;
        if operation.is_legal(left, right) {
            return Some(operation);
        }
    }
    None
}
