use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Controls how many generations run and how large the elite pool is.
///
/// # Termination
///
/// A run ends either when `max_generations` generations have been recorded or as
/// soon as the leader of a generation fails to strictly improve on the best fitness
/// recorded so far. The second case is a stall: nothing is recorded for the
/// stalled generation and the robot does not move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Upper bound on generations. A run may stop earlier.
    pub max_generations: u32,
    /// Fraction of the population kept as the elite breeding pool.
    pub reproduction_rate: f64,
}

/// What to do with a generation once its leader has been scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScheduleDecision {
    /// The leader improved on the best fitness. Record it and move the robot.
    Advance { best_fitness: f64 },
    /// The leader did not improve. Stop without recording.
    Stall,
}

impl Schedule {
    pub fn new(max_generations: u32, reproduction_rate: f64) -> Self {
        Self {
            max_generations,
            reproduction_rate,
        }
    }

    /// Size of the elite pool, `floor(population_size * reproduction_rate)`.
    pub fn num_to_breed(&self, population_size: usize) -> usize {
        (population_size as f64 * self.reproduction_rate).floor() as usize
    }

    /// Compares a generation's leader fitness against the best so far.
    #[instrument(level = "debug", skip(self))]
    pub fn decide(&self, best_fitness: f64, candidate: f64) -> ScheduleDecision {
        if candidate > best_fitness {
            ScheduleDecision::Advance {
                best_fitness: candidate,
            }
        } else {
            ScheduleDecision::Stall
        }
    }
}
