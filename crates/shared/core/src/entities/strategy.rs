use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Strategy name to description, ordered by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategySet(BTreeMap<String, String>);

impl StrategySet {
    /// The three strategies every generation run yields
    pub fn fixed() -> Self {
        [
            ("strategy_1", "Dynamic pricing based on demand"),
            ("strategy_2", "Subscription model with tiered options"),
            ("strategy_3", "Predictive analytics for upselling"),
        ]
        .into_iter()
        .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StrategySet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_set_contents() {
        let set = StrategySet::fixed();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get("strategy_1"), Some("Dynamic pricing based on demand"));
        assert_eq!(
            set.get("strategy_2"),
            Some("Subscription model with tiered options")
        );
        assert_eq!(set.get("strategy_3"), Some("Predictive analytics for upselling"));
    }

    #[test]
    fn test_names_are_ordered() {
        let set = StrategySet::fixed();
        let names: Vec<_> = set.names().collect();
        assert_eq!(names, vec!["strategy_1", "strategy_2", "strategy_3"]);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let json = serde_json::to_value(StrategySet::fixed()).unwrap();
        assert_eq!(json["strategy_3"], "Predictive analytics for upselling");
    }
}
