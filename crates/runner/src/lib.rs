//! Monetize Runner
//!
//! Wires the framework to concrete collaborators:
//!
//! - **Config**: JSON file describing feed, model backend, and risk rules
//! - **Bootstrap**: builds the adapters and injects them into the framework
//! - **Binary**: `monetize` runs one execution and prints the report as JSON

pub mod bootstrap;
pub mod config;
pub mod error;

// Re-export main types
pub use bootstrap::{bootstrap, run_once};
pub use config::{ConfigError, FeedConfig, GeneratorConfig, RunnerConfig};
pub use error::{Result, RunnerError};
