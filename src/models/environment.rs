use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The currently observed level for each environmental factor,
/// e.g. sun -> "low", wind -> "high".
///
/// Factors absent from the environment are never applied to any plant,
/// no matter what the plant's sensitivity table defines. An empty
/// environment leaves every yield unadjusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    levels: BTreeMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the observed level for a factor.
    pub fn with(mut self, factor: impl Into<String>, level: impl Into<String>) -> Self {
        self.levels.insert(factor.into(), level.into());
        self
    }

    pub fn level(&self, factor: &str) -> Option<&str> {
        self.levels.get(factor).map(String::as_str)
    }

    /// (factor, level) pairs in deterministic (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.levels.iter().map(|(f, l)| (f.as_str(), l.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_environment_has_no_levels() {
        let env = Environment::new();
        assert!(env.is_empty());
        assert_eq!(env.level("sun"), None);
    }

    #[test]
    fn iteration_is_sorted_by_factor() {
        let env = Environment::new()
            .with("wind", "high")
            .with("sun", "low")
            .with("rain", "medium");

        let factors: Vec<&str> = env.iter().map(|(f, _)| f).collect();
        assert_eq!(factors, ["rain", "sun", "wind"]);
    }

    #[test]
    fn later_observation_replaces_earlier() {
        let env = Environment::new().with("sun", "low").with("sun", "high");
        assert_eq!(env.level("sun"), Some("high"));
    }

    #[test]
    fn deserialize_from_plain_mapping() {
        let env: Environment = serde_json::from_str(r#"{"sun": "low", "wind": "high"}"#).unwrap();
        assert_eq!(env.level("sun"), Some("low"));
        assert_eq!(env.level("wind"), Some("high"));
    }
}
