//! Field filters for record listings
//!
//! A filter is a set of `field = value` criteria matched against the JSON
//! form of a record. Values are compared as strings, ignoring ASCII case,
//! so `status=closed` matches `"Closed"` and `severity_rating=7` matches `7`.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Equality criteria over serialized record fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    criteria: BTreeMap<String, String>,
}

impl RecordFilter {
    /// Creates a filter that matches every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filter from `(field, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            criteria: pairs
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        }
    }

    /// Adds a criterion
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.criteria.insert(field.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// True when every criterion matches; unknown fields never match
    pub fn matches<R: Serialize>(&self, record: &R) -> bool {
        if self.criteria.is_empty() {
            return true;
        }
        let fields = match serde_json::to_value(record) {
            Ok(Value::Object(fields)) => fields,
            Ok(_) => return false,
            Err(err) => {
                debug!(error = %err, "Record could not be serialized for filtering");
                return false;
            }
        };
        self.criteria.iter().all(|(field, expected)| {
            fields
                .get(field)
                .map(|value| render(value).eq_ignore_ascii_case(expected.trim()))
                .unwrap_or(false)
        })
    }

    /// Records matching the filter, in their original order
    pub fn apply<'a, R: Serialize>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(RecordFilter::new().matches(&json!({"id": 1})));
    }

    #[test]
    fn test_case_insensitive_string_match() {
        let filter = RecordFilter::new().with("status", "closed");
        assert!(filter.matches(&json!({"status": "Closed"})));
        assert!(!filter.matches(&json!({"status": "Open"})));
    }

    #[test]
    fn test_numbers_and_booleans_match_as_text() {
        let filter = RecordFilter::from_pairs([("severity_rating", "7"), ("total_loss", "TRUE")]);
        assert!(filter.matches(&json!({"severity_rating": 7, "total_loss": true})));
        assert!(!filter.matches(&json!({"severity_rating": 8, "total_loss": true})));
    }

    #[test]
    fn test_unknown_field_never_matches() {
        let filter = RecordFilter::new().with("colour", "red");
        assert!(!filter.matches(&json!({"id": 1})));
    }
}
