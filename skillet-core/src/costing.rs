//! Per-ingredient cost derivation and recipe aggregation.
//!
//! The cost to make with one ingredient is the fraction of the purchased
//! package consumed, scaled by the price paid for the whole package. Price
//! is assumed linear in package size: no bulk discounts, no fixed fees.

use serde::{Deserialize, Serialize};

use crate::error::CostingError;
use crate::quantity::Quantity;
use crate::units::{compatible, convert};

/// `price * used / bought`, both magnitudes in the same unit.
///
/// Callers go through [`ingredient_cost`] to get unit conversion and
/// validation; this is the bare formula. Consuming exactly what was bought
/// costs exactly the price paid.
pub fn derive_cost(used: f64, bought_in_used_unit: f64, price: f64) -> f64 {
    price * (used / bought_in_used_unit)
}

/// Cost to make for one ingredient.
///
/// Checks the two amounts are convertible before anything else, rescales
/// the bought amount into the used amount's unit, rejects purchases
/// smaller than the usage, then derives the cost.
pub fn ingredient_cost(
    used: &Quantity,
    bought: &Quantity,
    price: f64,
) -> Result<f64, CostingError> {
    if !compatible(used.unit, bought.unit) {
        return Err(CostingError::IncompatibleUnits {
            expected: used.unit.dimension(),
            found: bought.unit.dimension(),
        });
    }

    let bought_converted = convert(bought.magnitude, bought.unit, used.unit);
    if bought_converted < used.magnitude {
        return Err(CostingError::InsufficientPurchase {
            used: used.magnitude,
            bought: bought_converted,
        });
    }

    Ok(derive_cost(used.magnitude, bought_converted, price))
}

/// One costed recipe line. `cost_to_make` is derived at construction and
/// never written again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub used: Quantity,
    pub bought: Quantity,
    pub price: f64,
    pub cost_to_make: f64,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        used: Quantity,
        bought: Quantity,
        price: f64,
    ) -> Result<Ingredient, CostingError> {
        let cost_to_make = ingredient_cost(&used, &bought, price)?;
        Ok(Ingredient {
            name: name.into(),
            used,
            bought,
            price,
            cost_to_make,
        })
    }
}

/// A recipe session's accumulated state. Total and per-serving costs are
/// derived views over `ingredients`, recomputed on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, servings: u32) -> Recipe {
        Recipe {
            name: name.into(),
            servings,
            ingredients: Vec::new(),
        }
    }

    pub fn total_cost(&self) -> f64 {
        self.ingredients.iter().map(|i| i.cost_to_make).sum()
    }

    /// `(total_cost, cost_per_serving)`.
    pub fn totals(&self) -> Result<(f64, f64), CostingError> {
        let costs: Vec<f64> = self.ingredients.iter().map(|i| i.cost_to_make).collect();
        aggregate(&costs, self.servings)
    }
}

/// Sum per-ingredient costs and split across servings.
///
/// Zero servings must be prevented upstream; it is rejected here rather
/// than silently coerced.
pub fn aggregate(costs: &[f64], servings: u32) -> Result<(f64, f64), CostingError> {
    if servings == 0 {
        return Err(CostingError::InvalidServings);
    }
    let total: f64 = costs.iter().sum();
    Ok((total, total / f64::from(servings)))
}
