use ndarray::Array1;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Key under which a feed publishes its trend series
pub const MARKET_TRENDS_KEY: &str = "market_trends";

/// Raw market data as published by a feeder
///
/// No schema is enforced beyond what the consumer asks for; the only key
/// the orchestrator reads is [`MARKET_TRENDS_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketData(Map<String, Value>);

impl MarketData {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parse a JSON object
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Convenience constructor for a feed carrying only a trend series
    pub fn with_trends(trends: impl IntoIterator<Item = f64>) -> Self {
        let mut data = Self::new();
        data.insert(
            MARKET_TRENDS_KEY,
            Value::Array(trends.into_iter().map(Value::from).collect()),
        );
        data
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

impl From<Map<String, Value>> for MarketData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Errors converting a trend value into a numeric series
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrendsError {
    #[error("expected a sequence of numbers, found {0}")]
    NotASequence(&'static str),

    #[error("element {index} is not a number: found {found}")]
    NotANumber { index: usize, found: String },

    #[error("element {index} does not match the shape of the elements before it")]
    Ragged { index: usize },
}

/// Processed trend series, single precision
#[derive(Debug, Clone, PartialEq)]
pub struct MarketTrends(Array1<f32>);

impl MarketTrends {
    pub fn from_values(values: Vec<f32>) -> Self {
        Self(Array1::from_vec(values))
    }

    /// Convert a JSON trend value
    ///
    /// Leaves follow float32 casting: numbers and numeric strings as is,
    /// booleans as 1.0/0.0, null as NaN. Rectangular nested arrays are
    /// flattened in row-major order; a bare scalar is a one-element series.
    pub fn from_json(value: &Value) -> Result<Self, TrendsError> {
        match value {
            Value::Array(items) => {
                let mut values = Vec::new();
                let mut row_shape = None;
                for (index, item) in items.iter().enumerate() {
                    let shape = flatten_into(item, &mut values).map_err(|e| match e {
                        Flatten::NotANumber(found) => TrendsError::NotANumber { index, found },
                        Flatten::Ragged => TrendsError::Ragged { index },
                    })?;
                    if !same_shape(&mut row_shape, shape) {
                        return Err(TrendsError::Ragged { index });
                    }
                }
                Ok(Self::from_values(values))
            }
            Value::Object(_) => Err(TrendsError::NotASequence("an object")),
            scalar => to_f32(scalar)
                .map(|v| Self::from_values(vec![v]))
                .ok_or(TrendsError::NotASequence("a non-numeric string")),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &Array1<f32> {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.0.to_vec()
    }
}

enum Flatten {
    NotANumber(String),
    Ragged,
}

/// Append the leaves of `value` to `out` and return its shape
fn flatten_into(value: &Value, out: &mut Vec<f32>) -> Result<Vec<usize>, Flatten> {
    match value {
        Value::Array(items) => {
            let mut inner = None;
            for item in items {
                let shape = flatten_into(item, out)?;
                if !same_shape(&mut inner, shape) {
                    return Err(Flatten::Ragged);
                }
            }
            let mut shape = vec![items.len()];
            shape.extend(inner.unwrap_or_default());
            Ok(shape)
        }
        leaf => {
            let v = to_f32(leaf).ok_or_else(|| Flatten::NotANumber(leaf.to_string()))?;
            out.push(v);
            Ok(Vec::new())
        }
    }
}

/// Record the first sibling's shape, then compare later ones against it
fn same_shape(expected: &mut Option<Vec<usize>>, shape: Vec<usize>) -> bool {
    match expected {
        Some(first) => *first == shape,
        None => {
            *expected = Some(shape);
            true
        }
    }
}

fn to_f32(value: &Value) -> Option<f32> {
    match value {
        Value::Number(n) => n.as_f64().map(|v| v as f32),
        Value::String(s) => s.trim().parse::<f32>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(f32::NAN),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_market_data_from_json_object() {
        let data = MarketData::from_json(r#"{"market_trends": [1.0, 2.0], "source": "feed"}"#)
            .unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.contains_key(MARKET_TRENDS_KEY));
    }

    #[test]
    fn test_market_data_rejects_non_object() {
        assert!(MarketData::from_json("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_trends_from_integer_and_float_mix() {
        let trends = MarketTrends::from_json(&json!([1, 2.5, -3])).unwrap();
        assert_eq!(trends.to_vec(), vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn test_trends_accept_numeric_strings() {
        let trends = MarketTrends::from_json(&json!(["1.5", " 2 "])).unwrap();
        assert_eq!(trends.to_vec(), vec![1.5, 2.0]);
    }

    #[test]
    fn test_scalar_is_single_element_series() {
        let trends = MarketTrends::from_json(&json!(4.0)).unwrap();
        assert_eq!(trends.len(), 1);
    }

    #[test]
    fn test_empty_array_gives_empty_trends() {
        let trends = MarketTrends::from_json(&json!([])).unwrap();
        assert!(trends.is_empty());
    }

    #[test]
    fn test_non_numeric_element_reports_index() {
        let err = MarketTrends::from_json(&json!([1.0, "up", 3.0])).unwrap_err();
        assert_eq!(
            err,
            TrendsError::NotANumber {
                index: 1,
                found: "\"up\"".to_string()
            }
        );
    }

    #[test]
    fn test_object_is_not_a_sequence() {
        let err = MarketTrends::from_json(&json!({"a": 1})).unwrap_err();
        assert_eq!(err, TrendsError::NotASequence("an object"));
    }

    #[test]
    fn test_booleans_and_null_cast_like_float32() {
        let values = MarketTrends::from_json(&json!([true, null, 1.0, false])).unwrap().to_vec();
        assert_eq!(values[0], 1.0);
        assert!(values[1].is_nan());
        assert_eq!(values[2], 1.0);
        assert_eq!(values[3], 0.0);
    }

    #[test]
    fn test_scalar_boolean_is_single_element_series() {
        let trends = MarketTrends::from_json(&json!(false)).unwrap();
        assert_eq!(trends.to_vec(), vec![0.0]);
    }

    #[test]
    fn test_rectangular_nested_arrays_flatten_row_major() {
        let trends = MarketTrends::from_json(&json!([[1.0, 2.0], [3.0, 4.0]])).unwrap();
        assert_eq!(trends.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let err = MarketTrends::from_json(&json!([[1.0, 2.0], [3.0]])).unwrap_err();
        assert_eq!(err, TrendsError::Ragged { index: 1 });

        let err = MarketTrends::from_json(&json!([1.0, [2.0]])).unwrap_err();
        assert_eq!(err, TrendsError::Ragged { index: 1 });
    }

    #[test]
    fn test_ragged_inside_a_row_reports_the_row() {
        let err = MarketTrends::from_json(&json!([[[1.0], [2.0, 3.0]]])).unwrap_err();
        assert_eq!(err, TrendsError::Ragged { index: 0 });
    }

    #[test]
    fn test_nested_non_numeric_leaf_reports_top_level_index() {
        let err = MarketTrends::from_json(&json!([[1.0], ["x"]])).unwrap_err();
        assert_eq!(
            err,
            TrendsError::NotANumber {
                index: 1,
                found: "\"x\"".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_scalar_string() {
        let err = MarketTrends::from_json(&json!("rising")).unwrap_err();
        assert_eq!(err, TrendsError::NotASequence("a non-numeric string"));
    }

    #[test]
    fn test_with_trends_round_trips_through_converter() {
        let data = MarketData::with_trends([1.0, 2.0, 3.0]);
        let trends = MarketTrends::from_json(data.get(MARKET_TRENDS_KEY).unwrap()).unwrap();
        assert_eq!(trends.to_vec(), vec![1.0, 2.0, 3.0]);
    }
}
