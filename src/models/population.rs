use super::{Individual, Robot};
use rand::Rng;
use tracing::instrument;

/// A fixed-size, ordered set of individuals.
///
/// After [`Population::rank`] the individuals are ordered by descending fitness
/// against the robot they were ranked for.
#[derive(Debug, Clone)]
pub struct Population {
    pub(crate) individuals: Vec<Individual>,
}

impl Population {
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    #[instrument(level = "debug", skip(rng))]
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        let individuals = (0..size).map(|_| Individual::random(rng)).collect();

        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// The best-ranked individual, if any.
    pub fn leader(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    /// Sorts in place by descending fitness and returns the fitness of each
    /// individual in the new order.
    ///
    /// Each individual is scored once. The sort is stable, so exact ties keep their
    /// previous relative order.
    #[instrument(level = "debug", skip(self, robot), fields(population_size = self.individuals.len()))]
    pub fn rank(&mut self, robot: &Robot) -> Vec<f64> {
        let mut scored: Vec<(f64, Individual)> = self
            .individuals
            .drain(..)
            .map(|individual| (individual.compute_fitness(robot), individual))
            .collect();

        scored.sort_by(|(lhs, _), (rhs, _)| rhs.total_cmp(lhs));

        let (fitness, individuals): (Vec<f64>, Vec<Individual>) = scored.into_iter().unzip();
        self.individuals = individuals;

        fitness
    }
}
