use monetize_core::MarketData;

use crate::error::FeedResult;

/// Port for market data sources
///
/// Implementations may read a file, call a vendor API, or replay a fixture.
/// The orchestrator only requires that the returned mapping carries
/// `market_trends`.
pub trait MarketDataFeeder: Send {
    /// Fetch the latest market data snapshot
    fn fetch_data(&mut self) -> FeedResult<MarketData>;

    /// Get the feeder's name for logging
    fn name(&self) -> &str {
        "MarketDataFeeder"
    }
}
