use super::yields::yield_for_crop;
use crate::error::{FarmCalcError, Result};
use crate::models::{Crop, Environment, Portfolio};

fn require_field(crop: &Crop, field: &'static str, value: Option<f64>) -> Result<f64> {
    value.ok_or_else(|| FarmCalcError::MissingField {
        plant: crop.plant.name.clone(),
        field,
    })
}

/// Planting cost for a crop: per-plant cost times quantity. Cost is a sowing
/// expense and does not depend on the environment or the eventual yield.
pub fn cost_for_crop(crop: &Crop) -> Result<f64> {
    if crop.num_crops == 0.0 {
        return Ok(0.0);
    }
    Ok(require_field(crop, "cost", crop.plant.cost)? * crop.num_crops)
}

/// Revenue for a crop: sale price per unit of yield times the
/// environment-adjusted crop yield.
pub fn revenue_for_crop(crop: &Crop, environment: Option<&Environment>) -> Result<f64> {
    if crop.num_crops == 0.0 {
        return Ok(0.0);
    }
    Ok(require_field(crop, "sale_price", crop.plant.sale_price)?
        * yield_for_crop(crop, environment)?)
}

/// Profit for a crop: revenue minus planting cost.
pub fn profit_for_crop(crop: &Crop, environment: Option<&Environment>) -> Result<f64> {
    Ok(revenue_for_crop(crop, environment)? - cost_for_crop(crop)?)
}

/// Sum of per-crop profits across the portfolio. Empty portfolio is 0.
pub fn total_profit(portfolio: &Portfolio, environment: Option<&Environment>) -> Result<f64> {
    let mut total = 0.0;
    for crop in portfolio.iter() {
        total += profit_for_crop(crop, environment)?;
    }
    Ok(total)
}
