mod errors;
mod service;

pub use errors::Error;
pub use service::{EvolutionOutcome, Service, Termination, evolve};
