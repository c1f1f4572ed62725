//! Monetization framework
//!
//! Drives the collaborators through one straight-line pipeline per call to
//! `execute`. There is no retry and no partial result: the first stage
//! error ends the run.

use log::{debug, info, warn};
use monetize_core::{
    MARKET_TRENDS_KEY, MarketData, MarketTrends, ModelOutput, MonetizationReport, StrategySet,
};
use monetize_ports::{KnowledgeBase, MarketDataFeeder, RiskAssessor, TextGenerator};
use uuid::Uuid;

use crate::config::FrameworkConfig;
use crate::error::{FrameworkError, Result};
use crate::stage::{self, Stage};

/// The orchestration object
///
/// Lifecycle: construct, `execute` any number of times, `shutdown` once.
/// Shutdown unloads the model, so later executions fail at the generation
/// stage with [`FrameworkError::ModelUnloaded`].
pub struct MonetizationFramework {
    config: FrameworkConfig,
    knowledge_base: Box<dyn KnowledgeBase>,
    risk_assessor: Box<dyn RiskAssessor>,
    market_data_feeder: Box<dyn MarketDataFeeder>,
    /// `None` once shut down
    generator: Option<Box<dyn TextGenerator>>,
    shut_down: bool,
}

impl MonetizationFramework {
    /// Create a framework with the default configuration
    pub fn new(
        knowledge_base: Box<dyn KnowledgeBase>,
        risk_assessor: Box<dyn RiskAssessor>,
        market_data_feeder: Box<dyn MarketDataFeeder>,
        generator: Box<dyn TextGenerator>,
    ) -> Self {
        Self::with_config(
            FrameworkConfig::default(),
            knowledge_base,
            risk_assessor,
            market_data_feeder,
            generator,
        )
    }

    /// Create a framework with custom configuration
    pub fn with_config(
        config: FrameworkConfig,
        knowledge_base: Box<dyn KnowledgeBase>,
        risk_assessor: Box<dyn RiskAssessor>,
        market_data_feeder: Box<dyn MarketDataFeeder>,
        generator: Box<dyn TextGenerator>,
    ) -> Self {
        info!(
            "Monetization framework ready: feeder={}, assessor={}, knowledge_base={}, model={}",
            market_data_feeder.name(),
            risk_assessor.name(),
            knowledge_base.name(),
            generator.model_id()
        );

        Self {
            config,
            knowledge_base,
            risk_assessor,
            market_data_feeder,
            generator: Some(generator),
            shut_down: false,
        }
    }

    pub fn config(&self) -> &FrameworkConfig {
        &self.config
    }

    /// Identifier of the loaded model, `None` after shutdown
    pub fn model_id(&self) -> Option<&str> {
        self.generator.as_deref().map(|g| g.model_id())
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn knowledge_base_open(&self) -> bool {
        self.knowledge_base.is_open()
    }

    /// Extract the trend series from raw market data
    pub fn process_market_data(&self, data: &MarketData) -> Result<MarketTrends> {
        stage::run(Stage::ProcessMarketData, || trends_from(data))
    }

    /// Run the model on the configured prompt and parse its output
    ///
    /// The trend series is not part of the prompt; the result does not
    /// depend on it.
    pub fn generate_strategies(&mut self, trends: &MarketTrends) -> Result<StrategySet> {
        let output = stage::run(Stage::GenerateStrategies, || self.run_model(trends))?;
        self.parse_strategy(&output)
    }

    /// Turn model output into the strategy set
    ///
    /// The decoded text is read but not used: the fixed set is returned.
    pub fn parse_strategy(&self, output: &ModelOutput) -> Result<StrategySet> {
        stage::run(Stage::ParseStrategy, || strategies_from(output))
    }

    /// Fetch, process, generate, assess
    pub fn execute(&mut self) -> Result<MonetizationReport> {
        let run_id = Uuid::new_v4();
        info!("Executing monetization framework [run={}]", run_id);

        let market_data = stage::run(Stage::FetchData, || {
            Ok(self.market_data_feeder.fetch_data()?)
        })?;
        let trends = self.process_market_data(&market_data)?;
        let strategies = self.generate_strategies(&trends)?;
        let risk_assessment = stage::run(Stage::AssessRisk, || {
            Ok(self.risk_assessor.assess(&strategies)?)
        })?;

        info!(
            "Run {} produced {} strategies from {} trend points",
            run_id,
            strategies.len(),
            trends.len()
        );

        Ok(MonetizationReport {
            strategies,
            risk_assessment,
        })
    }

    /// Close the knowledge base and unload the model
    ///
    /// Never fails: a close error is logged and dropped.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            warn!("Shutdown requested on a framework that is already shut down");
        }

        let closed = stage::run(Stage::Shutdown, || Ok(self.knowledge_base.close()?));
        self.generator = None;
        self.shut_down = true;

        if closed.is_ok() {
            info!("Monetization framework shut down");
        }
    }

    fn run_model(&mut self, trends: &MarketTrends) -> Result<ModelOutput> {
        let generator = self
            .generator
            .as_mut()
            .ok_or(FrameworkError::ModelUnloaded)?;

        debug!(
            "Generating with {} ({} trend points not passed to the model)",
            generator.model_id(),
            trends.len()
        );
        Ok(generator.generate(&self.config.prompt, &self.config.generation)?)
    }
}

fn trends_from(data: &MarketData) -> Result<MarketTrends> {
    let value = data
        .get(MARKET_TRENDS_KEY)
        .ok_or_else(|| FrameworkError::MissingKey(MARKET_TRENDS_KEY.to_string()))?;
    Ok(MarketTrends::from_json(value)?)
}

fn strategies_from(output: &ModelOutput) -> Result<StrategySet> {
    let decoded = output.first().ok_or(FrameworkError::EmptyOutput)?;
    debug!(
        "Decoded {} chars from {}, using fixed strategies",
        decoded.len(),
        output.model
    );
    Ok(StrategySet::fixed())
}
