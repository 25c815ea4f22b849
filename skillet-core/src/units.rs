//! Unit registry and conversion.
//!
//! Every accepted unit spelling resolves to one canonical `Unit`. Each unit
//! belongs to a `Dimension` and carries a scale factor into that dimension's
//! base unit (grams for mass, millilitres for volume). Mass and volume are
//! never interchangeable; bare counts form their own third family.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Convertible unit families.
///
/// `Count` is the family of unit-less amounts (discrete items like eggs).
/// It is a real family of its own: two counts are compatible with each
/// other, but a count is never compatible with a mass or a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Count,
    Mass,
    Volume,
}

impl Dimension {
    /// Symbol of the base unit this family's scale factors are relative to.
    pub fn base_symbol(&self) -> &'static str {
        match self {
            Dimension::Count => "none",
            Dimension::Mass => "g",
            Dimension::Volume => "ml",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_symbol())
    }
}

/// Canonical units. Synonyms ("g", "gram", "grams") collapse to one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// The no-unit marker for bare counts. Distinct from any spelled unit.
    Count,
    Gram,
    Kilogram,
    Millilitre,
    Litre,
    Teaspoon,
    Tablespoon,
    Cup,
}

impl Unit {
    /// All units, for exhaustive property checks.
    pub const ALL: &'static [Unit] = &[
        Unit::Count,
        Unit::Gram,
        Unit::Kilogram,
        Unit::Millilitre,
        Unit::Litre,
        Unit::Teaspoon,
        Unit::Tablespoon,
        Unit::Cup,
    ];

    /// Resolve a unit token, case-insensitively. Accepts abbreviations,
    /// full names and plurals. There is no spelling for `Count`; bare
    /// counts are produced by the quantity parser, not by lookup.
    pub fn parse(token: &str) -> Option<Unit> {
        match token.to_ascii_lowercase().as_str() {
            "g" | "gram" | "grams" => Some(Unit::Gram),
            "kg" | "kilogram" | "kilograms" => Some(Unit::Kilogram),
            "ml" | "millilitre" | "millilitres" | "milliliter" | "milliliters" => {
                Some(Unit::Millilitre)
            }
            "l" | "litre" | "litres" | "liter" | "liters" => Some(Unit::Litre),
            "tsp" | "teaspoon" | "teaspoons" => Some(Unit::Teaspoon),
            "tbsp" | "tablespoon" | "tablespoons" => Some(Unit::Tablespoon),
            "cup" | "cups" => Some(Unit::Cup),
            _ => None,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Count => Dimension::Count,
            Unit::Gram | Unit::Kilogram => Dimension::Mass,
            Unit::Millilitre | Unit::Litre | Unit::Teaspoon | Unit::Tablespoon | Unit::Cup => {
                Dimension::Volume
            }
        }
    }

    /// Multiplier into the dimension's base unit. Always positive.
    pub fn scale_to_base(&self) -> f64 {
        match self {
            Unit::Count => 1.0,
            Unit::Gram => 1.0,
            Unit::Kilogram => 1000.0,
            Unit::Millilitre => 1.0,
            Unit::Litre => 1000.0,
            Unit::Teaspoon => 5.0,
            Unit::Tablespoon => 15.0,
            Unit::Cup => 250.0,
        }
    }

    /// Canonical symbol. Empty for bare counts, which render without one.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Count => "",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Millilitre => "ml",
            Unit::Litre => "l",
            Unit::Teaspoon => "tsp",
            Unit::Tablespoon => "tbsp",
            Unit::Cup => "cup",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two units are compatible iff they share a dimension.
pub fn compatible(a: Unit, b: Unit) -> bool {
    a.dimension() == b.dimension()
}

/// Rescale `magnitude` from one unit into another compatible unit.
///
/// Callers must check `compatible(from, to)` first. Same-unit conversion
/// returns the magnitude untouched so it never picks up rounding error.
pub fn convert(magnitude: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return magnitude;
    }
    magnitude * from.scale_to_base() / to.scale_to_base()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_resolve_to_same_unit() {
        assert_eq!(Unit::parse("g"), Some(Unit::Gram));
        assert_eq!(Unit::parse("gram"), Some(Unit::Gram));
        assert_eq!(Unit::parse("grams"), Some(Unit::Gram));
        assert_eq!(Unit::parse("kilograms"), Some(Unit::Kilogram));
        assert_eq!(Unit::parse("millilitres"), Some(Unit::Millilitre));
        assert_eq!(Unit::parse("milliliters"), Some(Unit::Millilitre));
        assert_eq!(Unit::parse("liter"), Some(Unit::Litre));
        assert_eq!(Unit::parse("teaspoons"), Some(Unit::Teaspoon));
        assert_eq!(Unit::parse("tbsp"), Some(Unit::Tablespoon));
        assert_eq!(Unit::parse("cups"), Some(Unit::Cup));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Unit::parse("KG"), Some(Unit::Kilogram));
        assert_eq!(Unit::parse("Cups"), Some(Unit::Cup));
    }

    #[test]
    fn test_unknown_token_fails() {
        assert_eq!(Unit::parse("xyz"), None);
        assert_eq!(Unit::parse("oz"), None);
        assert_eq!(Unit::parse(""), None);
    }

    #[test]
    fn test_scale_factors_are_positive() {
        for unit in Unit::ALL {
            assert!(unit.scale_to_base() > 0.0, "{unit:?}");
        }
    }

    #[test]
    fn test_compatible_is_reflexive() {
        for unit in Unit::ALL {
            assert!(compatible(*unit, *unit), "{unit:?}");
        }
    }

    #[test]
    fn test_compatible_is_symmetric() {
        for a in Unit::ALL {
            for b in Unit::ALL {
                assert_eq!(compatible(*a, *b), compatible(*b, *a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_count_is_incompatible_with_spelled_units() {
        for unit in Unit::ALL {
            if *unit != Unit::Count {
                assert!(!compatible(Unit::Count, *unit), "{unit:?}");
            }
        }
    }

    #[test]
    fn test_mass_and_volume_are_disjoint() {
        assert!(!compatible(Unit::Gram, Unit::Millilitre));
        assert!(!compatible(Unit::Kilogram, Unit::Cup));
    }

    #[test]
    fn test_convert_same_unit_is_identity() {
        assert_eq!(convert(2.5, Unit::Cup, Unit::Cup), 2.5);
        assert_eq!(convert(4.0, Unit::Count, Unit::Count), 4.0);
    }

    #[test]
    fn test_convert_scales() {
        assert_eq!(convert(1.0, Unit::Kilogram, Unit::Gram), 1000.0);
        assert_eq!(convert(500.0, Unit::Gram, Unit::Kilogram), 0.5);
        assert_eq!(convert(2.0, Unit::Litre, Unit::Millilitre), 2000.0);
        assert_eq!(convert(3.0, Unit::Tablespoon, Unit::Teaspoon), 9.0);
        assert_eq!(convert(1.0, Unit::Cup, Unit::Millilitre), 250.0);
    }

    #[test]
    fn test_convert_round_trips() {
        for a in Unit::ALL {
            for b in Unit::ALL {
                if compatible(*a, *b) {
                    let there = convert(7.3, *a, *b);
                    let back = convert(there, *b, *a);
                    assert!((back - 7.3).abs() < 1e-9, "{a:?} -> {b:?} -> {back}");
                }
            }
        }
    }
}
