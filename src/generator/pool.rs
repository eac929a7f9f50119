use std::fmt;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// Which of the two tile pools a value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    Big,
    Small,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PoolKind::Big => write!(f, "big"),
            PoolKind::Small => write!(f, "small"),
        }
    }
}

/// Produces a fresh pool value from the generator's random source
pub type ValueFactory<T, R> = Box<dyn Fn(&mut R) -> T + Send + Sync>;

enum PoolSource<T, R> {
    Fixed,
    Generated {
        count: usize,
        factory: ValueFactory<T, R>,
    },
}

/// A pool of tiles: a fixed list that is reshuffled on every refill, or a
/// factory that draws a new set of values on every refill.
pub struct Pool<T, R> {
    values: Vec<T>,
    source: PoolSource<T, R>,
}

impl<T, R: Rng> Pool<T, R> {
    pub fn fixed(values: Vec<T>) -> Self {
        Self {
            values,
            source: PoolSource::Fixed,
        }
    }

    /// A pool of `count` values drawn from `factory`; empty until its generator is built
    pub fn generated<F>(count: usize, factory: F) -> Self
    where
        F: Fn(&mut R) -> T + Send + Sync + 'static,
    {
        Self {
            values: Vec::with_capacity(count),
            source: PoolSource::Generated {
                count,
                factory: Box::new(factory),
            },
        }
    }

    /// Number of tiles the pool holds once filled
    pub fn len(&self) -> usize {
        match &self.source {
            PoolSource::Fixed => self.values.len(),
            PoolSource::Generated { count, .. } => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    pub(crate) fn refill(&mut self, rng: &mut R) {
        match &self.source {
            PoolSource::Fixed => {
                self.values.shuffle(rng);
                debug!("Reshuffled fixed pool of {} values", self.values.len());
            }
            PoolSource::Generated { count, factory } => {
                self.values.clear();
                for _ in 0..*count {
                    self.values.push(factory(rng));
                }
                debug!("Generated pool of {} values", count);
            }
        }
    }
}

impl<T, R: Rng> From<Vec<T>> for Pool<T, R> {
    fn from(values: Vec<T>) -> Self {
        Self::fixed(values)
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Pool<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.source {
            PoolSource::Fixed => "fixed",
            PoolSource::Generated { .. } => "generated",
        };
        f.debug_struct("Pool")
            .field("values", &self.values)
            .field("source", &kind)
            .finish()
    }
}
