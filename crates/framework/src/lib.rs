//! Monetize Framework
//!
//! The orchestration object. One call to [`MonetizationFramework::execute`]
//! runs the whole pipeline:
//!
//! ```text
//!   MarketDataFeeder ──► process_market_data ──► generate_strategies
//!                                                     │
//!                                 TextGenerator ◄─────┤ prompt
//!                                                     │ ModelOutput
//!                                                     ▼
//!                                               parse_strategy
//!                                                     │ StrategySet
//!                                                     ▼
//!                                               RiskAssessor
//!                                                     │
//!                                                     ▼
//!                                            MonetizationReport
//! ```
//!
//! Collaborators are injected at construction; nothing is process-global.
//! Every stage error is logged once with its stage and propagated unchanged.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use monetize_adapters::{CannedGenerator, InMemoryKnowledgeBase, RuleBasedRiskAssessor, StaticFeeder};
//! use monetize_framework::MonetizationFramework;
//!
//! let mut framework = MonetizationFramework::new(
//!     Box::new(InMemoryKnowledgeBase::new()),
//!     Box::new(RuleBasedRiskAssessor::new()),
//!     Box::new(StaticFeeder::with_trends([1.0, 2.0, 3.0])),
//!     Box::new(CannedGenerator::default()),
//! );
//! let report = framework.execute()?;
//! framework.shutdown();
//! ```

pub mod config;
pub mod error;
pub mod framework;
pub mod stage;

// Re-export main types
pub use config::{DEFAULT_PROMPT, FrameworkConfig};
pub use error::{FrameworkError, Result};
pub use framework::MonetizationFramework;
pub use stage::Stage;
