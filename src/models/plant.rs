use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Percentage adjustments keyed by level name, e.g. {"low": -50.0, "high": 50.0}
pub type FactorLevels = BTreeMap<String, f64>;

/// A botanical definition: base yield per plant plus optional economics and
/// an optional table of environmental sensitivities.
///
/// The factor table maps factor name -> level name -> percentage adjustment.
/// It need not cover every factor an [`Environment`](super::Environment) may
/// report; factors missing from the table are neutral for this plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub name: String,
    pub base_yield: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub factors: BTreeMap<String, FactorLevels>,
}

impl Plant {
    pub fn new(name: impl Into<String>, base_yield: f64) -> Self {
        Self {
            name: name.into(),
            base_yield,
            cost: None,
            sale_price: None,
            factors: BTreeMap::new(),
        }
    }

    /// Planting cost per plant.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Sale price per unit of yield.
    pub fn with_sale_price(mut self, sale_price: f64) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Register a sensitivity table for one environmental factor. Levels are
    /// (level name, percentage adjustment) pairs.
    pub fn with_factor<S, L>(mut self, factor: S, levels: L) -> Self
    where
        S: Into<String>,
        L: IntoIterator<Item = (&'static str, f64)>,
    {
        self.factors.insert(
            factor.into(),
            levels
                .into_iter()
                .map(|(level, pct)| (level.to_string(), pct))
                .collect(),
        );
        self
    }

    pub fn factor_levels(&self, factor: &str) -> Option<&FactorLevels> {
        self.factors.get(factor)
    }
}

impl std::fmt::Display for Plant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
