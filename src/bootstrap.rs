use crate::config::Configuration;
use crate::models::{Mutagen, MutationRate, Population, Robot};
use crate::services::simulation::{self, Service};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::instrument;

/// Validates `config` and builds the initial state of a run.
///
/// The generator is seeded once here and owned by the returned service, so a
/// configuration always produces the same run.
#[instrument(level = "info", skip(config), fields(seed = config.seed, population_size = config.population_size, mutation_mode = ?config.mutation_mode))]
pub fn bootstrap(config: &Configuration) -> Result<Service, simulation::Error> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let robot = Robot::new(
        config.initial_position,
        config.target_position,
        config.step_size,
    );
    let population = Population::random(config.population_size, &mut rng);
    let mutagen = Mutagen::new(MutationRate::default(), config.mutation_mode);

    tracing::info!("Simulation bootstrapped");

    Ok(Service::new(
        robot,
        population,
        config.schedule(),
        mutagen,
        rng,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::models::VELOCITY_MULTIPLIER;

    #[test]
    fn it_builds_the_reference_scenario() {
        let service = bootstrap(&Configuration::default()).unwrap();

        assert_eq!(service.population().len(), 100);
        assert!((service.robot().distance_to_target() - 200.0_f64.sqrt()).abs() < 1e-12);
        assert!(service.population().individuals().iter().all(|individual| {
            let velocity = individual.velocity();
            velocity.x < VELOCITY_MULTIPLIER && velocity.y < VELOCITY_MULTIPLIER
        }));
    }

    #[test]
    fn it_rejects_invalid_configuration() {
        let config = Configuration {
            population_size: 1,
            ..Configuration::default()
        };

        assert!(matches!(
            bootstrap(&config),
            Err(simulation::Error::ConfigError(
                ConfigError::InvalidPopulationSize(1)
            ))
        ));
    }
}
