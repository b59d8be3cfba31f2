use super::{Robot, Velocity, fitness_from_distance};
use rand::Rng;
use tracing::instrument;

pub type Gene = f64;

/// Scale of the initial velocity components, drawn from `[0, VELOCITY_MULTIPLIER)`.
pub const VELOCITY_MULTIPLIER: f64 = 0.1;

/// A candidate velocity.
///
/// The first two genes are the velocity components. A genome may carry extra genes
/// when mutated in [`MutationMode::Append`](super::MutationMode::Append); those never
/// contribute to movement or fitness.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Individual {
    pub(crate) genome: Vec<Gene>,
}

impl Individual {
    pub fn new(velocity: Velocity) -> Self {
        Self {
            genome: vec![velocity.x, velocity.y],
        }
    }

    /// Creates an individual with both components drawn uniformly from `[0, VELOCITY_MULTIPLIER)`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let x = VELOCITY_MULTIPLIER * rng.random::<f64>();
        let y = VELOCITY_MULTIPLIER * rng.random::<f64>();

        Self::new(Velocity::new(x, y))
    }

    pub fn velocity(&self) -> Velocity {
        Velocity::new(self.genome[0], self.genome[1])
    }

    pub fn genome(&self) -> &[Gene] {
        &self.genome
    }

    /// Scores the position a single move by this velocity would reach.
    ///
    /// The move is applied to a copy, the robot passed in is left untouched.
    pub fn compute_fitness(&self, robot: &Robot) -> f64 {
        let mut lookahead = *robot;
        lookahead.move_by(self.velocity());

        fitness_from_distance(lookahead.distance_to_target())
    }

    /// Overwrites the velocity with the mean of the parents' velocities.
    #[instrument(level = "trace", skip(self, lhs, rhs))]
    pub fn breed(&mut self, lhs: &Individual, rhs: &Individual) {
        let lhs = lhs.velocity();
        let rhs = rhs.velocity();

        self.genome[0] = (lhs.x + rhs.x) / 2.0;
        self.genome[1] = (lhs.y + rhs.y) / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use rand::{SeedableRng, rngs::StdRng};

    fn get_test_robot() -> Robot {
        Robot::new(Position::new(0.0, 0.0), Position::new(10.0, 10.0), 2.0)
    }

    #[test]
    fn it_draws_components_within_the_multiplier() {
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..1_000 {
            let velocity = Individual::random(&mut rng).velocity();
            assert!((0.0..VELOCITY_MULTIPLIER).contains(&velocity.x));
            assert!((0.0..VELOCITY_MULTIPLIER).contains(&velocity.y));
        }
    }

    #[test]
    fn it_is_reproducible_for_a_seed() {
        let a = Individual::random(&mut StdRng::seed_from_u64(7));
        let b = Individual::random(&mut StdRng::seed_from_u64(7));

        assert_eq!(a, b);
    }

    #[test]
    fn compute_fitness_does_not_move_the_robot() {
        let robot = get_test_robot();
        let before = robot;
        let individual = Individual::new(Velocity::new(1.0, 2.0));

        let first = individual.compute_fitness(&robot);
        let second = individual.compute_fitness(&robot);

        assert_eq!(robot, before);
        assert_eq!(first, second);
    }

    #[test]
    fn compute_fitness_scores_the_lookahead_position() {
        let robot = get_test_robot();
        // (0,0) + (1.5, 2.0) * 2 = (3, 4), distance to (10, 10) is sqrt(49 + 36)
        let individual = Individual::new(Velocity::new(1.5, 2.0));
        let expected = 1.0 / (0.001 + 85.0_f64.sqrt());

        assert!((individual.compute_fitness(&robot) - expected).abs() < 1e-12);
    }

    #[test]
    fn closer_lookahead_scores_higher() {
        let robot = get_test_robot();
        let near = Individual::new(Velocity::new(2.5, 2.5));
        let far = Individual::new(Velocity::new(0.5, 0.5));
        let overshoot = Individual::new(Velocity::new(10.0, 10.0));

        assert!(near.compute_fitness(&robot) > far.compute_fitness(&robot));
        assert!(far.compute_fitness(&robot) > overshoot.compute_fitness(&robot));
    }

    #[test]
    fn it_breeds_the_mean_of_both_parents() {
        let lhs = Individual::new(Velocity::new(0.25, 0.75));
        let rhs = Individual::new(Velocity::new(0.75, 0.25));
        let mut child = Individual::new(Velocity::new(9.0, 9.0));

        child.breed(&lhs, &rhs);

        assert_eq!(child.velocity(), Velocity::new(0.5, 0.5));
        assert_eq!(child.genome().len(), 2);
    }

    #[test]
    fn breeding_leaves_surplus_genes_untouched() {
        let parent = Individual::new(Velocity::new(0.2, 0.4));
        let mut child = Individual {
            genome: vec![1.0, 1.0, 0.3, 0.7],
        };

        child.breed(&parent, &parent);

        assert_eq!(child.genome(), &[0.2, 0.4, 0.3, 0.7]);
    }
}
