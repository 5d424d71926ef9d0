//! Yield and profit calculations for crops under configurable environmental
//! conditions.
//!
//! A [`Plant`] carries a base yield, optional economics, and a table of
//! percentage adjustments per environmental factor and level. An
//! [`Environment`] records the currently observed level of each factor. The
//! functions in [`logic`] compose the applicable adjustments into a single
//! multiplicative modifier and derive per-crop and portfolio-level yield,
//! cost, revenue, and profit from it.
//!
//! ```
//! use farmcalc::{total_profit, Environment, Plant, Portfolio};
//!
//! let apples = Plant::new("apples", 10.0)
//!     .with_cost(1.0)
//!     .with_sale_price(2.0)
//!     .with_factor("sun", [("low", -20.0), ("high", 30.0)]);
//!
//! let portfolio = Portfolio::new().with_crop(apples, 5.0);
//! let env = Environment::new().with("sun", "high");
//!
//! assert_eq!(total_profit(&portfolio, Some(&env)).unwrap(), 125.0);
//! ```
//!
//! Everything is a pure function of immutable value objects; nothing is
//! mutated and any number of calculations may run concurrently over shared
//! data.

pub mod error;
pub mod logic;
pub mod models;

pub use error::{FarmCalcError, Result};
pub use logic::{
    cost_for_crop, profit_for_crop, resolve_modifier, revenue_for_crop, total_profit, total_yield,
    yield_for_crop, yield_for_plant,
};
pub use models::{Crop, Environment, FactorLevels, Plant, Portfolio};
