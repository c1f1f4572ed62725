use monetize_core::{RiskAssessment, StrategySet};

use crate::error::RiskResult;

/// Port for risk assessment of generated strategies
///
/// The result is opaque to the orchestrator and is returned to the caller
/// untouched.
pub trait RiskAssessor: Send {
    /// Assess a set of strategies
    fn assess(&self, strategies: &StrategySet) -> RiskResult<RiskAssessment>;

    /// Get the assessor's name for logging
    fn name(&self) -> &str {
        "RiskAssessor"
    }
}
