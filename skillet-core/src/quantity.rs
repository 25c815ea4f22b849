//! Quantity parsing.
//!
//! Turns a free-text amount into a `(magnitude, unit)` pair. Two grammars:
//! a bare run of digits is a count of discrete items ("4" meaning four
//! eggs, no unit attached), and anything else must be a number followed by
//! a unit ("250g", "2.5 cups"). Keeping the grammars separate means
//! unit-less counting never collides with decimal parsing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::units::Unit;

/// An optionally-decimal magnitude, optional whitespace, then a unit token,
/// consuming the whole input.
static AMOUNT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]*\.?[0-9]+)\s*([a-zA-Z]+)$").expect("Invalid amount regex")
});

/// A parsed amount: a strictly positive magnitude plus its unit.
/// Magnitude 0 is never constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn parse(raw: &str) -> Result<Quantity, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Blank);
        }

        // Bare digits are a count with no unit (e.g. "4" eggs).
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            let count: u64 = trimmed.parse().map_err(|_| ParseError::Malformed)?;
            if count == 0 {
                return Err(ParseError::ZeroOrNegative);
            }
            return Ok(Quantity {
                magnitude: count as f64,
                unit: Unit::Count,
            });
        }

        let captures = AMOUNT_REGEX.captures(trimmed).ok_or(ParseError::Malformed)?;
        let magnitude: f64 = captures[1].parse().map_err(|_| ParseError::Malformed)?;
        if magnitude <= 0.0 {
            return Err(ParseError::ZeroOrNegative);
        }

        let token = captures[2].to_lowercase();
        let unit = Unit::parse(&token).ok_or(ParseError::UnrecognizedUnit(token))?;

        Ok(Quantity { magnitude, unit })
    }
}

impl fmt::Display for Quantity {
    /// Magnitude immediately followed by the unit symbol; bare counts
    /// render as just the number ("200g", "2.5cup", "4").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}
