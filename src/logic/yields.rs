use super::modifier::resolve_modifier;
use crate::error::Result;
use crate::models::{Crop, Environment, Plant, Portfolio};

/// Adjusted yield for a single plant: base yield scaled by the environmental
/// modifier. With no environment this is just the base yield.
pub fn yield_for_plant(plant: &Plant, environment: Option<&Environment>) -> Result<f64> {
    Ok(plant.base_yield * resolve_modifier(plant, environment)?)
}

/// Total yield for a planted crop: per-plant yield times quantity.
///
/// A zero quantity yields exactly 0 without consulting the plant at all, so
/// an empty planting never fails on its plant's configuration.
pub fn yield_for_crop(crop: &Crop, environment: Option<&Environment>) -> Result<f64> {
    if crop.num_crops == 0.0 {
        return Ok(0.0);
    }
    Ok(crop.num_crops * yield_for_plant(&crop.plant, environment)?)
}

/// Sum of crop yields across the portfolio, applying the same environment to
/// every crop independently. Empty portfolio yields 0.
pub fn total_yield(portfolio: &Portfolio, environment: Option<&Environment>) -> Result<f64> {
    let mut total = 0.0;
    for crop in portfolio.iter() {
        total += yield_for_crop(crop, environment)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn corn() -> Plant {
        Plant::new("corn", 30.0)
            .with_factor("sun", [("low", -50.0), ("medium", 0.0), ("high", 50.0)])
            .with_factor("wind", [("low", 0.0), ("medium", -30.0), ("high", -60.0)])
    }

    #[test]
    fn plant_yield_without_environment() {
        assert_eq!(yield_for_plant(&Plant::new("corn", 30.0), None), Ok(30.0));
    }

    #[test]
    fn plant_yield_low_sun_ignores_unobserved_wind() {
        let env = Environment::new().with("sun", "low");
        assert_eq!(yield_for_plant(&corn(), Some(&env)), Ok(15.0));
    }

    #[test]
    fn plant_yield_compounds_sun_and_wind() {
        let avocado = Plant::new("avocado", 3.0)
            .with_factor("sun", [("low", -20.0), ("medium", 0.0), ("high", 50.0)])
            .with_factor("wind", [("low", 0.0), ("medium", -30.0), ("high", -60.0)]);
        let env = Environment::new().with("sun", "high").with("wind", "high");

        let adjusted = yield_for_plant(&avocado, Some(&env)).unwrap();
        assert_relative_eq!(adjusted, 1.8, epsilon = 1e-9);
    }

    #[test]
    fn crop_yield_scales_by_quantity() {
        let crop = Crop::new(Plant::new("corn", 3.0), 10.0);
        assert_eq!(yield_for_crop(&crop, None), Ok(30.0));
    }

    #[test]
    fn crop_yield_low_sun() {
        let crop = Crop::new(corn(), 10.0);
        let env = Environment::new().with("sun", "low");
        assert_eq!(yield_for_crop(&crop, Some(&env)), Ok(150.0));
    }

    #[test]
    fn zero_quantity_yields_zero_even_with_bad_environment() {
        // A level corn's table doesn't define would normally fail, but an
        // empty planting short-circuits first
        let crop = Crop::new(corn(), 0.0);
        let env = Environment::new().with("sun", "scorching");
        assert_eq!(yield_for_crop(&crop, Some(&env)), Ok(0.0));
    }

    #[test]
    fn zero_quantity_yields_zero_for_bare_plant() {
        let crop = Crop::new(Plant::new("corn", 3.0), 0.0);
        assert_eq!(yield_for_crop(&crop, None), Ok(0.0));
    }

    #[test]
    fn total_yield_multiple_crops() {
        let portfolio = Portfolio::new()
            .with_crop(Plant::new("corn", 3.0), 5.0)
            .with_crop(Plant::new("pumpkin", 4.0), 2.0);
        assert_eq!(total_yield(&portfolio, None), Ok(23.0));
    }

    #[test]
    fn total_yield_empty_portfolio() {
        assert_eq!(total_yield(&Portfolio::new(), None), Ok(0.0));
    }

    #[test]
    fn total_yield_single_crop_matches_crop_yield() {
        let env = Environment::new().with("sun", "low");
        let portfolio = Portfolio::new().with_crop(corn(), 10.0);
        assert_eq!(
            total_yield(&portfolio, Some(&env)),
            yield_for_crop(&portfolio.crops[0], Some(&env))
        );
    }

    #[test]
    fn total_yield_applies_environment_per_plant() {
        // Corn halves in low sun, pumpkin has no sun table and is unaffected
        let portfolio = Portfolio::new()
            .with_crop(corn(), 2.0)
            .with_crop(Plant::new("pumpkin", 4.0), 3.0);
        let env = Environment::new().with("sun", "low");
        assert_eq!(total_yield(&portfolio, Some(&env)), Ok(30.0 + 12.0));
    }

    #[test]
    fn total_yield_propagates_configuration_errors() {
        let portfolio = Portfolio::new().with_crop(corn(), 1.0);
        let env = Environment::new().with("wind", "hurricane");
        assert!(total_yield(&portfolio, Some(&env)).is_err());
    }
}
