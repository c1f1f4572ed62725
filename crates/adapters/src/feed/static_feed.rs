use log::debug;
use monetize_core::MarketData;
use monetize_ports::{FeedResult, MarketDataFeeder};

/// Feed that publishes the same snapshot on every fetch
#[derive(Debug, Clone)]
pub struct StaticFeeder {
    data: MarketData,
    fetches: usize,
}

impl StaticFeeder {
    pub fn new(data: MarketData) -> Self {
        Self { data, fetches: 0 }
    }

    /// Feed carrying only a trend series
    pub fn with_trends(trends: impl IntoIterator<Item = f64>) -> Self {
        Self::new(MarketData::with_trends(trends))
    }

    /// Number of snapshots served so far
    pub fn fetches(&self) -> usize {
        self.fetches
    }
}

impl MarketDataFeeder for StaticFeeder {
    fn fetch_data(&mut self) -> FeedResult<MarketData> {
        self.fetches += 1;
        debug!("StaticFeeder serving snapshot #{} ({} keys)", self.fetches, self.data.len());
        Ok(self.data.clone())
    }

    fn name(&self) -> &str {
        "StaticFeeder"
    }
}
