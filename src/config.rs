use crate::models::{MutationMode, Position, Schedule};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::instrument;

pub const SEED: u64 = 0;
pub const INITIAL_POSITION: Position = Position::new(0.0, 0.0);
pub const TARGET_POSITION: Position = Position::new(10.0, 10.0);
pub const STEP_SIZE: f64 = 2.0;
pub const POPULATION_SIZE: usize = 100;
pub const NUMBER_OF_GENERATIONS: u32 = 60;
pub const REPRODUCTION_RATE: f64 = 0.2;

const ENV_PREFIX: &str = "ROBOT_GA_";

/// Errors raised while loading or validating a [`Configuration`].
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ConfigError {
    #[error("InvalidPopulationSize: population_size must be at least 2, got {0}")]
    InvalidPopulationSize(usize),
    #[error("InvalidReproductionRate: reproduction_rate must be in (0, 1), got {0}")]
    InvalidReproductionRate(f64),
    #[error(
        "EmptyBreedingPool: population_size={population_size} with reproduction_rate={reproduction_rate} leaves no elite"
    )]
    EmptyBreedingPool {
        population_size: usize,
        reproduction_rate: f64,
    },
    #[error("InvalidStepSize: step_size must be finite and positive, got {0}")]
    InvalidStepSize(f64),
    #[error("NonFiniteCoordinate: {field} = ({x}, {y})")]
    NonFiniteCoordinate { field: &'static str, x: f64, y: f64 },
    #[error("NoGenerations: number_of_generations must be at least 1")]
    NoGenerations,
    #[error("InvalidVariable: {key}={value}: {reason}")]
    InvalidVariable {
        key: String,
        value: String,
        reason: String,
    },
}

/// Parameters of a single simulation run.
///
/// `Default` is the reference scenario: seed 0, a robot at the origin heading for
/// (10, 10) with step size 2, 100 individuals, 60 generations and a 20% elite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub seed: u64,
    pub initial_position: Position,
    pub target_position: Position,
    pub step_size: f64,
    pub population_size: usize,
    pub number_of_generations: u32,
    pub reproduction_rate: f64,
    pub mutation_mode: MutationMode,
    pub report_path: Option<PathBuf>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            seed: SEED,
            initial_position: INITIAL_POSITION,
            target_position: TARGET_POSITION,
            step_size: STEP_SIZE,
            population_size: POPULATION_SIZE,
            number_of_generations: NUMBER_OF_GENERATIONS,
            reproduction_rate: REPRODUCTION_RATE,
            mutation_mode: MutationMode::default(),
            report_path: None,
        }
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidVariable {
            key: key.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_position(key: &str, value: &str) -> Result<Position, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidVariable {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let (x, y) = value.split_once(',').ok_or_else(|| invalid("expected `x,y`"))?;
    let x = x.trim().parse().map_err(|_| invalid("x is not a number"))?;
    let y = y.trim().parse().map_err(|_| invalid("y is not a number"))?;

    Ok(Position::new(x, y))
}

impl Configuration {
    /// Loads `.env.local` when present, then applies `ROBOT_GA_*` overrides from the
    /// process environment on top of the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::from_filename(".env.local").ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, keyed by the full variable name.
    #[instrument(level = "debug", skip(lookup))]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            let key = format!("{ENV_PREFIX}{name}");
            lookup(key.as_str()).map(|value| (key, value))
        };

        let mut config = Self::default();

        if let Some((key, value)) = var("SEED") {
            config.seed = parse(&key, &value)?;
        }
        if let Some((key, value)) = var("POSITION") {
            config.initial_position = parse_position(&key, &value)?;
        }
        if let Some((key, value)) = var("TARGET") {
            config.target_position = parse_position(&key, &value)?;
        }
        if let Some((key, value)) = var("STEP_SIZE") {
            config.step_size = parse(&key, &value)?;
        }
        if let Some((key, value)) = var("POPULATION_SIZE") {
            config.population_size = parse(&key, &value)?;
        }
        if let Some((key, value)) = var("GENERATIONS") {
            config.number_of_generations = parse(&key, &value)?;
        }
        if let Some((key, value)) = var("REPRODUCTION_RATE") {
            config.reproduction_rate = parse(&key, &value)?;
        }
        if let Some((key, value)) = var("MUTATION_MODE") {
            config.mutation_mode = parse(&key, &value)?;
        }
        if let Some((_, value)) = var("REPORT_PATH") {
            config.report_path = Some(PathBuf::from(value));
        }

        Ok(config)
    }

    pub fn schedule(&self) -> Schedule {
        Schedule::new(self.number_of_generations, self.reproduction_rate)
    }

    /// Rejects configurations that would make the generation loop degenerate.
    #[instrument(level = "debug", skip(self), fields(population_size = self.population_size, reproduction_rate = self.reproduction_rate))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::InvalidPopulationSize(self.population_size));
        }

        if !(self.reproduction_rate > 0.0 && self.reproduction_rate < 1.0) {
            return Err(ConfigError::InvalidReproductionRate(self.reproduction_rate));
        }

        if self.schedule().num_to_breed(self.population_size) == 0 {
            return Err(ConfigError::EmptyBreedingPool {
                population_size: self.population_size,
                reproduction_rate: self.reproduction_rate,
            });
        }

        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(ConfigError::InvalidStepSize(self.step_size));
        }

        for (field, position) in [
            ("initial_position", self.initial_position),
            ("target_position", self.target_position),
        ] {
            if !position.is_finite() {
                return Err(ConfigError::NonFiniteCoordinate {
                    field,
                    x: position.x,
                    y: position.y,
                });
            }
        }

        if self.number_of_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }

        Ok(())
    }
}
