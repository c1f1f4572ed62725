use log::debug;
use monetize_core::MarketData;
use monetize_ports::{FeedError, FeedResult, MarketDataFeeder};
use std::path::{Path, PathBuf};

/// Feed that re-reads a JSON object from disk on every fetch
#[derive(Debug, Clone)]
pub struct JsonFileFeeder {
    path: PathBuf,
}

impl JsonFileFeeder {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MarketDataFeeder for JsonFileFeeder {
    fn fetch_data(&mut self) -> FeedResult<MarketData> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| FeedError::Io {
            path: self.path.display().to_string(),
            error: e.to_string(),
        })?;

        let data = MarketData::from_json(&content).map_err(|e| FeedError::Parse(e.to_string()))?;
        debug!(
            "Loaded market data from {} ({} keys)",
            self.path.display(),
            data.len()
        );
        Ok(data)
    }

    fn name(&self) -> &str {
        "JsonFileFeeder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monetize_core::MARKET_TRENDS_KEY;
    use uuid::Uuid;

    fn temp_file(content: &str) -> PathBuf {
        let _ = env_logger::try_init();
        let path = std::env::temp_dir().join(format!("monetize-feed-{}.json", Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_reads_object_from_file() {
        let path = temp_file(r#"{"market_trends": [1.0, 2.0, 3.0]}"#);
        let mut feeder = JsonFileFeeder::new(&path);

        let data = feeder.fetch_data().unwrap();
        assert!(data.contains_key(MARKET_TRENDS_KEY));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_picks_up_changes_between_fetches() {
        let path = temp_file(r#"{"market_trends": [1.0]}"#);
        let mut feeder = JsonFileFeeder::new(&path);
        assert_eq!(feeder.fetch_data().unwrap().len(), 1);

        std::fs::write(&path, r#"{"market_trends": [1.0], "volume": 10}"#).unwrap();
        assert_eq!(feeder.fetch_data().unwrap().len(), 2);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let _ = env_logger::try_init();
        let mut feeder = JsonFileFeeder::new("/nonexistent/monetize/feed.json");
        match feeder.fetch_data() {
            Err(FeedError::Io { path, .. }) => assert!(path.ends_with("feed.json")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_is_parse_error() {
        let path = temp_file("[1, 2, 3]");
        let mut feeder = JsonFileFeeder::new(&path);

        assert!(matches!(feeder.fetch_data(), Err(FeedError::Parse(_))));

        std::fs::remove_file(path).unwrap();
    }
}
