//! Risk assessors

mod rule_based;

pub use rule_based::{RiskLevel, RiskRule, RiskRules, RuleBasedRiskAssessor};
