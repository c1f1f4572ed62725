use crate::error::KnowledgeBaseResult;

/// Port for the knowledge base connection held for the framework's lifetime
pub trait KnowledgeBase: Send {
    /// Release the connection
    fn close(&mut self) -> KnowledgeBaseResult<()>;

    /// Whether the connection is still usable
    fn is_open(&self) -> bool;

    /// Get the connection's name for logging
    fn name(&self) -> &str {
        "KnowledgeBase"
    }
}
