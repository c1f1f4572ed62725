//! Stage-scoped error context
//!
//! Each pipeline step runs inside [`run`], which logs a failure once with
//! the stage's description and hands the error back untouched.

use log::error;
use std::fmt;

use crate::error::Result;

/// A step of the monetization pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    FetchData,
    ProcessMarketData,
    GenerateStrategies,
    ParseStrategy,
    AssessRisk,
    Shutdown,
}

impl Stage {
    /// Log prefix for failures in this stage
    pub fn failure_message(&self) -> &'static str {
        match self {
            Stage::FetchData => "Failed to fetch market data",
            Stage::ProcessMarketData => "Failed to process market data",
            Stage::GenerateStrategies => "Error generating strategies",
            Stage::ParseStrategy => "Error parsing strategy output",
            Stage::AssessRisk => "Risk assessment failed",
            Stage::Shutdown => "Error during shutdown",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::FetchData => "fetch_data",
            Stage::ProcessMarketData => "process_market_data",
            Stage::GenerateStrategies => "generate_strategies",
            Stage::ParseStrategy => "parse_strategy",
            Stage::AssessRisk => "assess_risk",
            Stage::Shutdown => "shutdown",
        };
        f.write_str(name)
    }
}

/// Run `f` as `stage`, logging any error before returning it
pub fn run<T>(stage: Stage, f: impl FnOnce() -> Result<T>) -> Result<T> {
    f().inspect_err(|e| error!("{}: {} [stage={}]", stage.failure_message(), e, stage))
}
