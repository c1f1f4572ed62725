//! Monetize Ports
//!
//! Port definitions (traits) for the collaborators the orchestrator drives.
//! These define the boundaries between orchestration and infrastructure.

mod error;
mod feeder;
mod generator;
mod knowledge;
mod risk;

pub use error::{
    FeedError, FeedResult, GenerationError, GenerationResult, KnowledgeBaseError,
    KnowledgeBaseResult, RiskError, RiskResult,
};
pub use feeder::MarketDataFeeder;
pub use generator::TextGenerator;
pub use knowledge::KnowledgeBase;
pub use risk::RiskAssessor;
