use serde::{Deserialize, Serialize};

/// Per-generation samples recorded by a run.
///
/// Both sequences grow together, one entry per recorded generation, so they always
/// have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    fitness: Vec<f64>,
    convergence: Vec<f64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, fitness: f64, distance_to_target: f64) {
        self.fitness.push(fitness);
        self.convergence.push(distance_to_target);
    }

    /// Best fitness per recorded generation.
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Robot distance to target after each recorded generation.
    pub fn convergence(&self) -> &[f64] {
        &self.convergence
    }

    pub fn len(&self) -> usize {
        self.fitness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fitness.is_empty()
    }

    /// Index of the generation with the highest recorded fitness. The first index
    /// wins on ties.
    pub fn peak_generation(&self) -> Option<usize> {
        self.fitness
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (index, &fitness)| match best {
                Some((_, best_fitness)) if best_fitness >= fitness => best,
                _ => Some((index, fitness)),
            })
            .map(|(index, _)| index)
    }

    pub fn final_distance(&self) -> Option<f64> {
        self.convergence.last().copied()
    }
}
