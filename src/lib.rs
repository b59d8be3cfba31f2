pub mod bootstrap;
pub mod config;
pub mod models;
pub mod render;
pub mod services;

pub use bootstrap::bootstrap;
pub use config::{ConfigError, Configuration};
pub use render::{Report, render};
pub use services::simulation::{EvolutionOutcome, Service, Termination, evolve};
