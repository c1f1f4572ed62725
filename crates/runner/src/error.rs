//! Runner errors

use monetize_framework::FrameworkError;
use monetize_ports::GenerationError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to set up text generator: {0}")]
    Generator(#[from] GenerationError),

    #[error("Framework execution failed: {0}")]
    Framework(#[from] FrameworkError),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
