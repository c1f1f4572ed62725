use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::StrategySet;

/// Assessor output, passed through untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskAssessment(pub Value);

impl RiskAssessment {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Result of one execution: the strategies and their risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetizationReport {
    pub strategies: StrategySet,
    pub risk_assessment: RiskAssessment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_has_exactly_two_entries() {
        let report = MonetizationReport {
            strategies: StrategySet::fixed(),
            risk_assessment: RiskAssessment::new(json!({"overall": "low"})),
        };

        let value = serde_json::to_value(&report).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(value["risk_assessment"]["overall"], "low");
        assert_eq!(
            value["strategies"]["strategy_1"],
            "Dynamic pricing based on demand"
        );
    }
}
