use log::{debug, info, warn};
use rand::Rng;
use rand::rngs::StdRng;

use crate::expression::StepRecord;
use crate::generator::errors::GeneratorError;
use crate::generator::pool::{Pool, PoolKind};
use crate::generator::state::PuzzleState;
use crate::operation::Operation;
use crate::value::Representable;

/// Decides whether a reachable value is acceptable as a goal
pub type EndStateValidator<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// One numbers-round game.
///
/// The generator owns its random source and all of its mutable state. Every
/// mutating call takes `&mut self`, so a generator is driven by one caller at
/// a time; it is not meant to be shared between threads.
pub struct PuzzleGenerator<T, R = StdRng> {
    pub(super) big_pool: Pool<T, R>,
    pub(super) small_pool: Pool<T, R>,
    pub(super) operators: Vec<Operation<T>>,
    pub(super) min_use: usize,
    pub(super) max_use: usize,
    pub(super) end_state_validator: EndStateValidator<T>,
    pub(super) selected: Vec<T>,
    pub(super) chosen_tiles: Vec<(PoolKind, usize)>,
    pub(super) state: PuzzleState,
    pub(super) goal: Option<T>,
    pub(super) steps: Vec<StepRecord<T>>,
    pub(super) rng: R,
}

impl<T: Representable, R: Rng> PuzzleGenerator<T, R> {
    /// Create a generator in the `Selecting` state; both pools are filled
    /// (shuffled or generated) from `rng` straight away.
    ///
    /// # Errors
    ///
    /// Returns an error if `operators` is empty or the bounds violate
    /// `1 <= min_use <= max_use <= |big| + |small|`.
    pub fn new<V>(
        big_pool: impl Into<Pool<T, R>>,
        small_pool: impl Into<Pool<T, R>>,
        operators: Vec<Operation<T>>,
        min_use: usize,
        max_use: usize,
        end_state_validator: V,
        mut rng: R,
    ) -> Result<Self, GeneratorError>
    where
        V: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let mut big_pool = big_pool.into();
        let mut small_pool = small_pool.into();

        if operators.is_empty() {
            warn!("Generator requested without operators");
            return Err(GeneratorError::NoOperators);
        }

        let available = big_pool.len() + small_pool.len();
        if min_use < 1 || min_use > max_use || max_use > available {
            warn!(
                "Invalid selection bounds: min_use={}, max_use={}, available={}",
                min_use, max_use, available
            );
            return Err(GeneratorError::InvalidUseBounds {
                min_use,
                max_use,
                available,
            });
        }

        big_pool.refill(&mut rng);
        small_pool.refill(&mut rng);

        debug!(
            "Created generator with {} big, {} small values, {} operators, using {}..={}",
            big_pool.len(),
            small_pool.len(),
            operators.len(),
            min_use,
            max_use
        );

        Ok(Self {
            big_pool,
            small_pool,
            operators,
            min_use,
            max_use,
            end_state_validator: Box::new(end_state_validator),
            selected: Vec::with_capacity(max_use),
            chosen_tiles: Vec::with_capacity(max_use),
            state: PuzzleState::Selecting,
            goal: None,
            steps: Vec::new(),
            rng,
        })
    }

    pub(super) fn require(
        &self,
        operation: &'static str,
        allowed: &[PuzzleState],
    ) -> Result<(), GeneratorError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            debug!("Rejected {} in state {}", operation, self.state);
            Err(GeneratorError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    fn pool(&self, kind: PoolKind) -> &Pool<T, R> {
        match kind {
            PoolKind::Big => &self.big_pool,
            PoolKind::Small => &self.small_pool,
        }
    }

    fn is_chosen(&self, kind: PoolKind, index: usize) -> bool {
        self.chosen_tiles.contains(&(kind, index))
    }

    /// Choose the first unchosen tile holding a value equivalent to `value`,
    /// searching the big pool before the small one.
    ///
    /// # Errors
    ///
    /// Returns an error outside `Selecting`, or if no unchosen tile holds the value.
    pub fn choose(&mut self, value: &T) -> Result<PuzzleState, GeneratorError> {
        self.require("choose", &[PuzzleState::Selecting])?;

        let found = [PoolKind::Big, PoolKind::Small].into_iter().find_map(|kind| {
            self.pool(kind)
                .values()
                .iter()
                .enumerate()
                .position(|(index, v)| !self.is_chosen(kind, index) && v.is_equivalent_to(value))
                .map(|index| (kind, index))
        });

        match found {
            Some((kind, index)) => Ok(self.claim(kind, index, value.clone())),
            None => {
                warn!("No unchosen tile holds {}", value.as_text());
                Err(GeneratorError::ValueUnavailable(value.as_text()))
            }
        }
    }

    /// Choose the tile at `index` of the given pool
    ///
    /// # Errors
    ///
    /// Returns an error outside `Selecting`, for an out-of-range position, or
    /// for a tile that was already chosen.
    pub fn choose_from(
        &mut self,
        kind: PoolKind,
        index: usize,
    ) -> Result<PuzzleState, GeneratorError> {
        self.require("choose_from", &[PuzzleState::Selecting])?;

        let pool = self.pool(kind);
        let Some(value) = pool.get(index).cloned() else {
            return Err(GeneratorError::TileOutOfRange {
                pool: kind,
                index,
                len: pool.len(),
            });
        };
        if self.is_chosen(kind, index) {
            return Err(GeneratorError::TileAlreadyChosen { pool: kind, index });
        }

        Ok(self.claim(kind, index, value))
    }

    fn claim(&mut self, kind: PoolKind, index: usize, value: T) -> PuzzleState {
        debug!("Chose {} from the {} pool (position {})", value.as_text(), kind, index);
        self.chosen_tiles.push((kind, index));
        self.selected.push(value);

        if self.selected.len() >= self.max_use {
            info!("Selection complete with {} values", self.selected.len());
            self.state = PuzzleState::Randomizing;
        }
        self.state
    }

    /// Stop choosing before `max_use` values, once at least `min_use` are chosen
    ///
    /// # Errors
    ///
    /// Returns an error outside `Selecting` or when fewer than `min_use` values are chosen.
    pub fn finish_selection(&mut self) -> Result<PuzzleState, GeneratorError> {
        self.require("finish_selection", &[PuzzleState::Selecting])?;
        if self.selected.len() < self.min_use {
            return Err(GeneratorError::SelectionTooSmall {
                selected: self.selected.len(),
                min_use: self.min_use,
            });
        }
        self.state = PuzzleState::Randomizing;
        Ok(self.state)
    }

    /// Start a new game: refill both pools and forget the selection and solution
    pub fn reset(&mut self) {
        self.big_pool.refill(&mut self.rng);
        self.small_pool.refill(&mut self.rng);
        self.selected.clear();
        self.chosen_tiles.clear();
        self.goal = None;
        self.steps.clear();
        self.state = PuzzleState::Selecting;
        debug!("Generator reset");
    }

    pub fn state(&self) -> PuzzleState {
        self.state
    }

    pub fn selected(&self) -> &[T] {
        &self.selected
    }

    pub fn big_pool(&self) -> &[T] {
        self.big_pool.values()
    }

    pub fn small_pool(&self) -> &[T] {
        self.small_pool.values()
    }

    /// # Errors
    ///
    /// Returns an error unless the puzzle is `Evaluating`.
    pub fn goal(&self) -> Result<&T, GeneratorError> {
        self.require("goal", &[PuzzleState::Evaluating])?;
        self.goal.as_ref().ok_or(GeneratorError::InvalidState {
            operation: "goal",
            state: self.state,
        })
    }

    /// The generator's own solution, in the order it was built
    ///
    /// # Errors
    ///
    /// Returns an error unless the puzzle is `Evaluating`.
    pub fn steps(&self) -> Result<&[StepRecord<T>], GeneratorError> {
        self.require("steps", &[PuzzleState::Evaluating])?;
        Ok(&self.steps)
    }

    /// Owned copy of [`PuzzleGenerator::steps`]
    ///
    /// # Errors
    ///
    /// Returns an error unless the puzzle is `Evaluating`.
    pub fn intended_solution(&self) -> Result<Vec<StepRecord<T>>, GeneratorError> {
        self.steps().map(<[StepRecord<T>]>::to_vec)
    }

    /// Whether the last search produced a goal
    ///
    /// # Errors
    ///
    /// Returns an error before any search has finished.
    pub fn found_valid_solution(&self) -> Result<bool, GeneratorError> {
        match self.state {
            PuzzleState::Evaluating => Ok(true),
            PuzzleState::Error => Ok(false),
            state => Err(GeneratorError::InvalidState {
                operation: "found_valid_solution",
                state,
            }),
        }
    }
}
