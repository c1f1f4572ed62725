//! Framework errors

use monetize_core::TrendsError;
use monetize_ports::{FeedError, GenerationError, KnowledgeBaseError, RiskError};
use thiserror::Error;

/// Errors surfaced by the framework
///
/// Collaborator errors are wrapped transparently so callers see the
/// collaborator's own message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Missing key in market data: {0}")]
    MissingKey(String),

    #[error("Invalid market trends: {0}")]
    InvalidTrends(#[from] TrendsError),

    #[error("Model produced no output sequences")]
    EmptyOutput,

    #[error("Model has been unloaded by shutdown")]
    ModelUnloaded,

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Risk(#[from] RiskError),

    #[error(transparent)]
    KnowledgeBase(#[from] KnowledgeBaseError),
}

pub type Result<T> = std::result::Result<T, FrameworkError>;
