use crate::error::{FarmCalcError, Result};
use crate::models::{Environment, Plant};

/// Resolve the multiplicative yield modifier for a plant under the given
/// environment.
///
/// Each environment factor the plant is sensitive to contributes
/// `(100 + percentage) / 100` to the product; factors the plant's table does
/// not mention are neutral. Effects compound multiplicatively, so low sun and
/// high wind can each shrink the yield and their reductions multiply.
///
/// An environment level that a known factor's table does not define is a
/// configuration inconsistency and fails with
/// [`FarmCalcError::UnknownFactorLevel`] rather than silently poisoning
/// downstream totals.
pub fn resolve_modifier(plant: &Plant, environment: Option<&Environment>) -> Result<f64> {
    let Some(environment) = environment else {
        return Ok(1.0);
    };

    let mut modifier = 1.0;

    for (factor, level) in environment.iter() {
        let Some(levels) = plant.factor_levels(factor) else {
            continue;
        };

        let percentage =
            levels
                .get(level)
                .copied()
                .ok_or_else(|| FarmCalcError::UnknownFactorLevel {
                    plant: plant.name.clone(),
                    factor: factor.to_string(),
                    level: level.to_string(),
                })?;

        modifier *= (100.0 + percentage) / 100.0;
        tracing::trace!(
            plant = %plant.name,
            factor,
            level,
            percentage,
            modifier,
            "applied environmental factor"
        );
    }

    Ok(modifier)
}
