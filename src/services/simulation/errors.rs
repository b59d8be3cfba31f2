use crate::config::ConfigError;
use crate::models::SelectionError;

/// Errors that can occur while setting up or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ConfigError: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Selection error: {0}")]
    SelectionError(#[from] SelectionError),
}
