use super::Error;
use crate::models::{
    Breeder, Metrics, Mutagen, Population, Robot, Schedule, ScheduleDecision, Selector,
};
use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::instrument;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Termination {
    /// The leader of `generation` did not improve on the best fitness.
    Stalled { generation: u32 },
    /// Every scheduled generation was recorded.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvolutionOutcome {
    /// Number of generations recorded in the metrics.
    pub generations_completed: u32,
    pub termination: Termination,
}

/// Runs the generation loop.
///
/// Each generation ranks `population` against `robot`, replaces everything past
/// the elite pool with mutated children of elite parents, then scores the leader.
/// On strict improvement the robot moves by the leader's velocity and one sample is
/// appended to each metrics sequence. Otherwise the loop stops with nothing
/// recorded and the robot left in place.
#[instrument(level = "info", skip_all, fields(population_size = population.len(), max_generations = schedule.max_generations, reproduction_rate = schedule.reproduction_rate))]
pub fn evolve<R: Rng>(
    population: &mut Population,
    robot: &mut Robot,
    schedule: &Schedule,
    mutagen: &Mutagen,
    metrics: &mut Metrics,
    rng: &mut R,
) -> Result<EvolutionOutcome, Error> {
    let selector = Selector::elite(schedule.num_to_breed(population.len()));
    selector.check(population.len())?;

    let breeder = Breeder::new(selector, mutagen);
    let mut best_fitness = 0.0;

    for generation in 0..schedule.max_generations {
        population.rank(robot);

        let summary = breeder.breed_batch(&mut population.individuals, rng)?;
        tracing::debug!(
            generation,
            bred = summary.bred,
            mutated = summary.mutated,
            "Bred generation"
        );

        // The elite pool is untouched by breeding, so the leader is still the best
        // ranked individual.
        let leader = &population.individuals[0];
        let candidate = leader.compute_fitness(robot);

        match schedule.decide(best_fitness, candidate) {
            ScheduleDecision::Advance {
                best_fitness: improved,
            } => {
                best_fitness = improved;
                robot.move_by(leader.velocity());
                metrics.record(candidate, robot.distance_to_target());

                tracing::info!(
                    generation,
                    best_fitness,
                    distance_to_target = robot.distance_to_target(),
                    "Generation recorded"
                );
            }
            ScheduleDecision::Stall => {
                tracing::info!(generation, best_fitness, candidate, "Fitness stalled");

                return Ok(EvolutionOutcome {
                    generations_completed: generation,
                    termination: Termination::Stalled { generation },
                });
            }
        }
    }

    tracing::info!(best_fitness, "Generation budget exhausted");

    Ok(EvolutionOutcome {
        generations_completed: schedule.max_generations,
        termination: Termination::Exhausted,
    })
}

/// Owns the state of one simulation run.
pub struct Service {
    robot: Robot,
    population: Population,
    schedule: Schedule,
    mutagen: Mutagen,
    rng: StdRng,
}

impl Service {
    pub(crate) fn new(
        robot: Robot,
        population: Population,
        schedule: Schedule,
        mutagen: Mutagen,
        rng: StdRng,
    ) -> Self {
        Self {
            robot,
            population,
            schedule,
            mutagen,
            rng,
        }
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Runs [`evolve`] on the owned state, appending to the caller's metrics.
    pub fn evolve(&mut self, metrics: &mut Metrics) -> Result<EvolutionOutcome, Error> {
        evolve(
            &mut self.population,
            &mut self.robot,
            &self.schedule,
            &self.mutagen,
            metrics,
            &mut self.rng,
        )
    }
}
