//! Monetize Core Domain
//!
//! Pure domain records for the monetization strategy orchestrator.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    MARKET_TRENDS_KEY, MarketData, MarketTrends, ModelOutput, MonetizationReport, RiskAssessment,
    StrategySet, TrendsError,
};
pub use values::{GenerationParams, Timestamp};
