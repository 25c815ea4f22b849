//! Recipe costing core.
//!
//! Parses mixed-unit ingredient amounts ("4", "250g", "2.5 cups"), checks
//! unit compatibility, converts between compatible units, and derives the
//! proportional cost to make per ingredient and per serving. The shell that
//! prompts, renders tables and writes reports lives in `skillet-cli`.

pub mod costing;
pub mod error;
pub mod quantity;
pub mod units;

pub use costing::{aggregate, derive_cost, ingredient_cost, Ingredient, Recipe};
pub use error::{CostingError, ParseError};
pub use quantity::Quantity;
pub use units::{compatible, convert, Dimension, Unit};
