use log::info;
use monetize_ports::{KnowledgeBase, KnowledgeBaseError, KnowledgeBaseResult};
use serde_json::Value;
use std::collections::HashMap;

/// Process-local knowledge base
///
/// Every operation fails with `Closed` once the connection is closed.
#[derive(Debug, Clone)]
pub struct InMemoryKnowledgeBase {
    entries: HashMap<String, Value>,
    open: bool,
}

impl InMemoryKnowledgeBase {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            open: true,
        }
    }

    pub fn put(&mut self, key: impl Into<String>, value: Value) -> KnowledgeBaseResult<()> {
        self.ensure_open()?;
        self.entries.insert(key.into(), value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> KnowledgeBaseResult<Option<&Value>> {
        self.ensure_open()?;
        Ok(self.entries.get(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ensure_open(&self) -> KnowledgeBaseResult<()> {
        if self.open {
            Ok(())
        } else {
            Err(KnowledgeBaseError::Closed)
        }
    }
}

impl Default for InMemoryKnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase for InMemoryKnowledgeBase {
    fn close(&mut self) -> KnowledgeBaseResult<()> {
        if !self.open {
            return Err(KnowledgeBaseError::AlreadyClosed);
        }
        self.open = false;
        info!("In-memory knowledge base closed ({} entries)", self.entries.len());
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn name(&self) -> &str {
        "InMemoryKnowledgeBase"
    }
}
