use super::{Individual, VELOCITY_MULTIPLIER};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Default threshold for a mutation draw.
pub const MUTATION_RATE: f64 = 0.01;

// ============================================================
// MutationRate
// ============================================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationRate(f64);

#[derive(Debug, thiserror::Error)]
#[error("mutation_rate must be between 0.0 and 1.0, got: {0}")]
pub struct MutationRateOutOfRange(f64);

impl MutationRate {
    pub fn new(value: f64) -> Result<Self, MutationRateOutOfRange> {
        if !(0.0..=1.0).contains(&value) {
            return Err(MutationRateOutOfRange(value));
        }

        Ok(Self(value))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for MutationRate {
    fn default() -> Self {
        Self(MUTATION_RATE)
    }
}

// ============================================================
// MutationMode
// ============================================================
/// What a fired mutation does with its two perturbation draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationMode {
    /// Adds the draws to the two velocity components.
    #[default]
    Additive,
    /// Appends the draws to the genome. Velocity reads only the first two genes, so
    /// the appended genes never affect movement.
    Append,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown mutation mode: {0}, expected `additive` or `append`")]
pub struct UnknownMutationMode(String);

impl std::str::FromStr for MutationMode {
    type Err = UnknownMutationMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "additive" => Ok(Self::Additive),
            "append" => Ok(Self::Append),
            other => Err(UnknownMutationMode(other.to_string())),
        }
    }
}

// ============================================================
// Mutagen
// ============================================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mutagen {
    mutation_rate: MutationRate,
    mode: MutationMode,
}

impl Mutagen {
    pub fn new(mutation_rate: MutationRate, mode: MutationMode) -> Self {
        Self {
            mutation_rate,
            mode,
        }
    }

    pub fn mode(&self) -> MutationMode {
        self.mode
    }

    /// Perturbs an individual when a uniform draw exceeds the mutation rate.
    ///
    /// Each perturbation component is `VELOCITY_MULTIPLIER * rate * U[0, 1)`. Both modes
    /// consume the same draws.
    #[instrument(level = "trace", skip(self, rng, individual), fields(mode = ?self.mode))]
    pub(crate) fn mutate<R: Rng>(&self, rng: &mut R, individual: &mut Individual) -> bool {
        let rate = self.mutation_rate.get();

        if rng.random::<f64>() <= rate {
            return false;
        }

        let scale = VELOCITY_MULTIPLIER * rate;
        let dx = scale * rng.random::<f64>();
        let dy = scale * rng.random::<f64>();

        match self.mode {
            MutationMode::Additive => {
                individual.genome[0] += dx;
                individual.genome[1] += dy;
            }
            MutationMode::Append => {
                individual.genome.extend_from_slice(&[dx, dy]);
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Velocity;
    use rand::{SeedableRng, rngs::StdRng};

    fn get_test_individual() -> Individual {
        Individual::new(Velocity::new(0.05, 0.05))
    }

    #[test]
    fn test_mutation_rate_validation_errors() {
        assert!(MutationRate::new(-0.1).is_err());
        assert!(MutationRate::new(1.5).is_err());
        assert!(MutationRate::new(f64::NAN).is_err());
        assert!(MutationRate::new(0.0).is_ok());
        assert!(MutationRate::new(1.0).is_ok());
    }

    #[test]
    fn test_mutation_mode_parsing() {
        assert_eq!("additive".parse::<MutationMode>().unwrap(), MutationMode::Additive);
        assert_eq!(" Append ".parse::<MutationMode>().unwrap(), MutationMode::Append);
        assert!("replace".parse::<MutationMode>().is_err());
    }

    #[test]
    fn it_perturbs_both_components_additively() {
        let mut rng = StdRng::seed_from_u64(42);
        let mutagen = Mutagen::new(MutationRate::new(0.5).unwrap(), MutationMode::Additive);

        // Repeat until a draw fires; with rate 0.5 this happens almost immediately.
        let mut individual = get_test_individual();
        while !mutagen.mutate(&mut rng, &mut individual) {}

        let velocity = individual.velocity();
        assert_eq!(individual.genome().len(), 2);
        assert!(velocity.x >= 0.05 && velocity.x < 0.05 + VELOCITY_MULTIPLIER * 0.5);
        assert!(velocity.y >= 0.05 && velocity.y < 0.05 + VELOCITY_MULTIPLIER * 0.5);
        assert_ne!(velocity, Velocity::new(0.05, 0.05));
    }

    #[test]
    fn it_appends_without_changing_velocity() {
        let mut rng = StdRng::seed_from_u64(42);
        let mutagen = Mutagen::new(MutationRate::default(), MutationMode::Append);
        let mut individual = get_test_individual();

        let mut fired = 0;
        for _ in 0..10 {
            if mutagen.mutate(&mut rng, &mut individual) {
                fired += 1;
            }
        }

        assert!(fired > 0);
        assert_eq!(individual.genome().len(), 2 + 2 * fired);
        assert_eq!(individual.velocity(), Velocity::new(0.05, 0.05));
    }

    #[test]
    fn it_never_fires_with_full_rate() {
        let mut rng = StdRng::seed_from_u64(42);
        let mutagen = Mutagen::new(MutationRate::new(1.0).unwrap(), MutationMode::Additive);
        let mut individual = get_test_individual();

        for _ in 0..100 {
            assert!(!mutagen.mutate(&mut rng, &mut individual));
        }

        assert_eq!(individual, get_test_individual());
    }

    #[test]
    fn both_modes_consume_the_same_draws() {
        let additive = Mutagen::new(MutationRate::default(), MutationMode::Additive);
        let append = Mutagen::new(MutationRate::default(), MutationMode::Append);
        let mut rng_a = StdRng::seed_from_u64(3);
        let mut rng_b = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            additive.mutate(&mut rng_a, &mut get_test_individual());
            append.mutate(&mut rng_b, &mut get_test_individual());
        }

        assert_eq!(rng_a.random::<u64>(), rng_b.random::<u64>());
    }
}
