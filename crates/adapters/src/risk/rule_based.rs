use chrono::Utc;
use log::debug;
use monetize_core::{RiskAssessment, StrategySet};
use monetize_ports::{RiskAssessor, RiskError, RiskResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Coarse risk bucket, ordered from least to most risky
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Assigns `level` to any strategy whose description mentions `keyword`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRule {
    pub keyword: String,
    pub level: RiskLevel,
}

impl RiskRule {
    pub fn new(keyword: impl Into<String>, level: RiskLevel) -> Self {
        Self {
            keyword: keyword.into(),
            level,
        }
    }

    fn matches(&self, description: &str) -> bool {
        description
            .to_lowercase()
            .contains(&self.keyword.to_lowercase())
    }
}

/// Rule table for [`RuleBasedRiskAssessor`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskRules {
    pub rules: Vec<RiskRule>,
    /// Level for strategies no rule matches
    pub default_level: RiskLevel,
}

impl Default for RiskRules {
    fn default() -> Self {
        Self {
            rules: vec![
                RiskRule::new("pricing", RiskLevel::Medium),
                RiskRule::new("subscription", RiskLevel::Low),
                RiskRule::new("predictive", RiskLevel::Medium),
                RiskRule::new("upsell", RiskLevel::Medium),
            ],
            default_level: RiskLevel::Medium,
        }
    }
}

/// Keyword rule risk assessor
///
/// Output shape:
/// `{"assessed_at": <rfc3339>, "overall": <level>, "strategies": {<name>: <level>}}`
/// where `overall` is the highest per-strategy level.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedRiskAssessor {
    rules: RiskRules,
}

impl RuleBasedRiskAssessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: RiskRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RiskRules {
        &self.rules
    }

    /// Highest level among matching rules, or the default
    pub fn level_for(&self, description: &str) -> RiskLevel {
        self.rules
            .rules
            .iter()
            .filter(|rule| rule.matches(description))
            .map(|rule| rule.level)
            .max()
            .unwrap_or(self.rules.default_level)
    }
}

impl RiskAssessor for RuleBasedRiskAssessor {
    fn assess(&self, strategies: &StrategySet) -> RiskResult<RiskAssessment> {
        if strategies.is_empty() {
            return Err(RiskError::Rejected("no strategies to assess".to_string()));
        }

        let mut per_strategy = Map::new();
        let mut overall = RiskLevel::Low;
        for (name, description) in strategies.iter() {
            let level = self.level_for(description);
            debug!("Strategy {} assessed as {:?}", name, level);
            overall = overall.max(level);
            per_strategy.insert(name.to_string(), json!(level));
        }

        Ok(RiskAssessment::new(json!({
            "assessed_at": Utc::now().to_rfc3339(),
            "overall": overall,
            "strategies": Value::Object(per_strategy),
        })))
    }

    fn name(&self) -> &str {
        "RuleBasedRiskAssessor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_on_fixed_strategies() {
        let assessor = RuleBasedRiskAssessor::new();
        let assessment = assessor.assess(&StrategySet::fixed()).unwrap();
        let value = assessment.as_value();

        assert_eq!(value["strategies"]["strategy_1"], "medium");
        assert_eq!(value["strategies"]["strategy_2"], "low");
        assert_eq!(value["strategies"]["strategy_3"], "medium");
        assert_eq!(value["overall"], "medium");
        assert!(value["assessed_at"].is_string());
    }

    #[test]
    fn test_highest_matching_rule_wins() {
        let assessor = RuleBasedRiskAssessor::with_rules(RiskRules {
            rules: vec![
                RiskRule::new("pricing", RiskLevel::Low),
                RiskRule::new("dynamic", RiskLevel::High),
            ],
            default_level: RiskLevel::Low,
        });

        assert_eq!(
            assessor.level_for("Dynamic pricing based on demand"),
            RiskLevel::High
        );
    }

    #[test]
    fn test_unmatched_uses_default_level() {
        let assessor = RuleBasedRiskAssessor::with_rules(RiskRules {
            rules: Vec::new(),
            default_level: RiskLevel::High,
        });
        assert_eq!(assessor.level_for("Anything"), RiskLevel::High);
    }

    #[test]
    fn test_empty_strategy_set_is_rejected() {
        let assessor = RuleBasedRiskAssessor::new();
        assert!(matches!(
            assessor.assess(&StrategySet::default()),
            Err(RiskError::Rejected(_))
        ));
    }

    #[test]
    fn test_rules_from_json() {
        let rules: RiskRules = serde_json::from_str(
            r#"{"rules": [{"keyword": "loyalty", "level": "low"}], "default_level": "high"}"#,
        )
        .unwrap();
        assert_eq!(rules.rules[0].level, RiskLevel::Low);
        assert_eq!(rules.default_level, RiskLevel::High);
    }
}
