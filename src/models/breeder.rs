use crate::models::{Individual, Mutagen, SelectionError, Selector};
use tracing::instrument;

/// Counts of what a breeding pass did to the non-elite part of a population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct BreedingSummary {
    pub(crate) bred: usize,
    pub(crate) mutated: usize,
}

pub(crate) struct Breeder<'a> {
    selector: Selector,
    mutagen: &'a Mutagen,
}

impl<'a> Breeder<'a> {
    pub(crate) fn new(selector: Selector, mutagen: &'a Mutagen) -> Self {
        Self { selector, mutagen }
    }

    fn breed_child(
        &self,
        elite: &[Individual],
        child: &mut Individual,
        rng: &mut impl rand::Rng,
    ) -> bool {
        let (i, j) = self.selector.select_pair(rng);
        child.breed(&elite[i], &elite[j]);

        self.mutagen.mutate(rng, child)
    }

    /// Replaces every individual past the elite pool with a mutated child of two
    /// elite parents. The elite pool itself is left untouched.
    ///
    /// Expects `population` to be ranked already.
    #[instrument(level = "debug", skip(self, population, rng), fields(population_size = population.len(), pool_size = self.selector.pool_size()))]
    pub(crate) fn breed_batch(
        &self,
        population: &mut [Individual],
        rng: &mut impl rand::Rng,
    ) -> Result<BreedingSummary, SelectionError> {
        self.selector.check(population.len())?;

        let (elite, rest) = population.split_at_mut(self.selector.pool_size());
        let mut summary = BreedingSummary::default();

        for child in rest.iter_mut() {
            if self.breed_child(elite, child, rng) {
                summary.mutated += 1;
            }
            summary.bred += 1;
        }

        Ok(summary)
    }
}
