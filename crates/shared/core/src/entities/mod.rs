mod market_data;
mod output;
mod report;
mod strategy;

pub use market_data::{MARKET_TRENDS_KEY, MarketData, MarketTrends, TrendsError};
pub use output::ModelOutput;
pub use report::{MonetizationReport, RiskAssessment};
pub use strategy::StrategySet;
