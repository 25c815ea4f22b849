use thiserror::Error;

use crate::units::Dimension;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("amount can't be blank")]
    Blank,

    #[error("amount must be a bare count or a number followed by a unit")]
    Malformed,

    #[error("amount must be greater than 0")]
    ZeroOrNegative,

    #[error("unrecognized unit: {0}")]
    UnrecognizedUnit(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostingError {
    #[error("units are not compatible: expected base unit [ {expected} ], got [ {found} ]")]
    IncompatibleUnits {
        expected: Dimension,
        found: Dimension,
    },

    #[error("amount bought ({bought}) is less than amount used ({used})")]
    InsufficientPurchase { used: f64, bought: f64 },

    #[error("servings must be a positive integer")]
    InvalidServings,
}
