//! Parent selection from the elite pool.
//!
//! After ranking, the first `pool_size` individuals of the population form the
//! breeding pool. Both parents of every child are drawn uniformly and independently
//! from that pool, so a parent may be paired with itself and the same pair may
//! breed several children.

use rand::Rng;
use tracing::instrument;

/// Draws parent indices uniformly from `0..pool_size`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Selector {
    pool_size: usize,
}

/// Errors that can occur during parent selection.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum SelectionError {
    /// The elite pool is empty, so there is nothing to draw parents from.
    ///
    /// Occurs when `floor(population_size * reproduction_rate)` is zero.
    #[error("No breeding pool: population_size={population_size}")]
    NoBreedingPool { population_size: usize },

    /// The pool is larger than the population it is drawn from.
    #[error("Breeding pool of {pool_size} exceeds population of {population_size}")]
    PoolExceedsPopulation {
        pool_size: usize,
        population_size: usize,
    },
}

impl Selector {
    /// Creates a selector over a pool of `pool_size` elite individuals.
    pub fn elite(pool_size: usize) -> Self {
        Self { pool_size }
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Validates the pool against the population it will be drawn from.
    pub(crate) fn check(&self, population_size: usize) -> Result<(), SelectionError> {
        if self.pool_size == 0 {
            return Err(SelectionError::NoBreedingPool { population_size });
        }

        if self.pool_size > population_size {
            return Err(SelectionError::PoolExceedsPopulation {
                pool_size: self.pool_size,
                population_size,
            });
        }

        Ok(())
    }

    /// Picks two parent indices, duplicates allowed.
    #[instrument(level = "trace", skip(self, rng), fields(pool_size = self.pool_size))]
    pub(crate) fn select_pair<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        let lhs = rng.random_range(0..self.pool_size);
        let rhs = rng.random_range(0..self.pool_size);

        (lhs, rhs)
    }
}
