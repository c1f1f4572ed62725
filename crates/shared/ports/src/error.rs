use thiserror::Error;

/// Errors raised while fetching market data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Market data unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read market data from {path}: {error}")]
    Io { path: String, error: String },

    #[error("Malformed market data: {0}")]
    Parse(String),
}

pub type FeedResult<T> = std::result::Result<T, FeedError>;

/// Errors raised by a text generation backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Failed to load model {model}: {reason}")]
    Load { model: String, reason: String },

    #[error("Generation request failed: {0}")]
    Request(String),

    #[error("Malformed generation response: {0}")]
    Response(String),
}

pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

/// Errors raised by a risk assessor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    #[error("Risk assessment rejected: {0}")]
    Rejected(String),

    #[error("Risk assessor unavailable: {0}")]
    Unavailable(String),
}

pub type RiskResult<T> = std::result::Result<T, RiskError>;

/// Errors raised by a knowledge base connection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeBaseError {
    #[error("Knowledge base connection is closed")]
    Closed,

    #[error("Knowledge base connection already closed")]
    AlreadyClosed,

    #[error("Failed to close knowledge base: {0}")]
    Close(String),
}

pub type KnowledgeBaseResult<T> = std::result::Result<T, KnowledgeBaseError>;
