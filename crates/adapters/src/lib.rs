//! Monetize Adapters
//!
//! Reference implementations of the orchestrator's ports:
//! - Market data feeds (static fixture, JSON file)
//! - An in-memory knowledge base connection
//! - A keyword rule risk assessor
//! - Text generation backends (canned offline output, Ollama-compatible HTTP)
//!
//! ## Architecture
//!
//! ```text
//!   JSON file / fixture ──► feed ──────────┐
//!                                          │ MarketData
//!   Ollama server ◄──────── generator ◄────┤
//!                                          │ StrategySet
//!   keyword rules ────────► risk ◄─────────┘
//! ```

pub mod feed;
pub mod generator;
pub mod knowledge;
pub mod risk;

// Re-export main types
pub use feed::{JsonFileFeeder, StaticFeeder};
pub use generator::{CannedGenerator, DEFAULT_MODEL_ID, OllamaGenerator};
pub use knowledge::InMemoryKnowledgeBase;
pub use risk::{RiskLevel, RiskRule, RiskRules, RuleBasedRiskAssessor};
