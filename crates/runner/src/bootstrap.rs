//! Bootstrap - collaborator construction and framework setup
//!
//! Builds each port's adapter from configuration and injects them into a
//! fresh framework. The knowledge base is always the in-memory one.

use log::info;
use monetize_adapters::{
    CannedGenerator, InMemoryKnowledgeBase, JsonFileFeeder, OllamaGenerator,
    RuleBasedRiskAssessor, StaticFeeder,
};
use monetize_core::MonetizationReport;
use monetize_framework::MonetizationFramework;
use monetize_ports::{MarketDataFeeder, TextGenerator};
use std::time::Duration;

use crate::config::{FeedConfig, GeneratorConfig, RunnerConfig};
use crate::error::Result;

/// Build a framework from configuration
pub fn bootstrap(config: &RunnerConfig) -> Result<MonetizationFramework> {
    let feeder = build_feeder(&config.feed);
    let generator = build_generator(&config.generator)?;

    info!(
        "Bootstrapping framework with feeder {} and model {}",
        feeder.name(),
        generator.model_id()
    );

    Ok(MonetizationFramework::with_config(
        config.framework.clone(),
        Box::new(InMemoryKnowledgeBase::new()),
        Box::new(RuleBasedRiskAssessor::with_rules(config.risk.clone())),
        feeder,
        generator,
    ))
}

/// Bootstrap, execute once, shut down
///
/// Shutdown happens whether or not the execution succeeded.
pub fn run_once(config: &RunnerConfig) -> Result<MonetizationReport> {
    let mut framework = bootstrap(config)?;
    let report = framework.execute();
    framework.shutdown();
    Ok(report?)
}

fn build_feeder(config: &FeedConfig) -> Box<dyn MarketDataFeeder> {
    match config {
        FeedConfig::File { path } => Box::new(JsonFileFeeder::new(path)),
        FeedConfig::Inline { data } => Box::new(StaticFeeder::new(data.clone())),
    }
}

fn build_generator(config: &GeneratorConfig) -> Result<Box<dyn TextGenerator>> {
    let generator: Box<dyn TextGenerator> = match config {
        GeneratorConfig::Canned { text, model } => {
            let generator = match text {
                Some(text) => CannedGenerator::new(text.clone()),
                None => CannedGenerator::default(),
            };
            Box::new(generator.with_model_id(model.clone()))
        }
        GeneratorConfig::Ollama {
            base_url,
            model,
            timeout_secs,
        } => Box::new(OllamaGenerator::with_timeout(
            base_url.clone(),
            model.clone(),
            Duration::from_secs(*timeout_secs),
        )?),
    };
    Ok(generator)
}
