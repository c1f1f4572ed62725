//! Knowledge base connections

mod in_memory;

pub use in_memory::InMemoryKnowledgeBase;
