use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::generator::{GeneratorError, PuzzleGenerator};
use crate::operation::arithmetic_operators;

/// Configuration for an integer numbers round
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub big_pool: Vec<i64>,
    pub small_pool: Vec<i64>,
    pub min_use: usize,
    pub max_use: usize,
    /// Goals outside this range are rejected by the search
    pub goal_range: RangeInclusive<i64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            big_pool: vec![25, 50, 75, 100],
            small_pool: (1..=10).chain(1..=10).collect(),
            min_use: 6,
            max_use: 6,
            goal_range: 100..=999,
        }
    }
}

impl GameConfig {
    /// Build a generator with the four arithmetic operators
    ///
    /// # Errors
    ///
    /// Returns an error if the selection bounds do not fit the pools.
    pub fn build<R: Rng>(&self, rng: R) -> Result<PuzzleGenerator<i64, R>, GeneratorError> {
        let goal_range = self.goal_range.clone();
        PuzzleGenerator::new(
            self.big_pool.clone(),
            self.small_pool.clone(),
            arithmetic_operators(),
            self.min_use,
            self.max_use,
            move |goal: &i64| goal_range.contains(goal),
            rng,
        )
    }

    /// Build a generator with a deterministic random source
    ///
    /// # Errors
    ///
    /// Returns an error if the selection bounds do not fit the pools.
    pub fn seeded(&self, seed: u64) -> Result<PuzzleGenerator<i64, StdRng>, GeneratorError> {
        self.build(StdRng::seed_from_u64(seed))
    }
}
