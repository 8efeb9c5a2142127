//! Unit taxonomy for ingredient measurements.
//!
//! Every recognized unit maps to exactly one family (mass, volume, count) and
//! a fixed ratio to its family's base unit. The mapping is a closed table: an
//! unrecognized unit string is an error at the parse boundary, never a silent
//! default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CostError;

/// Measurement family a unit belongs to.
///
/// Conversion within a family is a fixed multiplicative factor. Conversion
/// between mass and volume requires an ingredient density. Count units never
/// convert to mass or volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitFamily {
    Mass,
    Volume,
    Count,
}

/// The base unit a quantity normalizes to before comparison.
///
/// Count units do not share a single base: `each` and `slice` are separate
/// bases, so a quantity in one is never comparable to the other (there is no
/// general answer to "how many slices is one each").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseUnit {
    Gram,
    Milliliter,
    Each,
    Slice,
}

impl BaseUnit {
    pub fn family(&self) -> UnitFamily {
        match self {
            BaseUnit::Gram => UnitFamily::Mass,
            BaseUnit::Milliliter => UnitFamily::Volume,
            BaseUnit::Each | BaseUnit::Slice => UnitFamily::Count,
        }
    }
}

/// Recognized measurement units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "l")]
    Liter,
    #[serde(rename = "each")]
    Each,
    #[serde(rename = "dozen")]
    Dozen,
    #[serde(rename = "slice")]
    Slice,
}

impl Unit {
    /// All recognized units.
    pub const ALL: &'static [Unit] = &[
        Unit::Gram,
        Unit::Kilogram,
        Unit::Milliliter,
        Unit::Liter,
        Unit::Each,
        Unit::Dozen,
        Unit::Slice,
    ];

    /// The base unit this unit normalizes to.
    pub fn base(&self) -> BaseUnit {
        match self {
            Unit::Gram | Unit::Kilogram => BaseUnit::Gram,
            Unit::Milliliter | Unit::Liter => BaseUnit::Milliliter,
            Unit::Each | Unit::Dozen => BaseUnit::Each,
            Unit::Slice => BaseUnit::Slice,
        }
    }

    /// Multiplier taking a quantity in this unit to its base unit.
    pub fn base_factor(&self) -> f64 {
        match self {
            Unit::Gram | Unit::Milliliter | Unit::Each | Unit::Slice => 1.0,
            Unit::Kilogram | Unit::Liter => 1000.0,
            Unit::Dozen => 12.0,
        }
    }

    pub fn family(&self) -> UnitFamily {
        self.base().family()
    }

    /// Canonical short form, as stored and displayed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Each => "each",
            Unit::Dozen => "dozen",
            Unit::Slice => "slice",
        }
    }

    /// Parse a unit from free text.
    ///
    /// Accepts canonical short forms plus common spelled-out aliases,
    /// case-insensitively. Anything outside the table is `UnknownUnit`.
    pub fn parse(s: &str) -> Result<Unit, CostError> {
        let normalized = s.trim().to_lowercase();
        let unit = match normalized.as_str() {
            "g" | "gram" | "grams" => Unit::Gram,
            "kg" | "kilogram" | "kilograms" | "kilo" | "kilos" => Unit::Kilogram,
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Unit::Milliliter,
            "l" | "liter" | "liters" | "litre" | "litres" => Unit::Liter,
            "each" | "ea" | "piece" | "pieces" | "pc" | "pcs" | "unit" | "units" => Unit::Each,
            "dozen" | "dz" => Unit::Dozen,
            "slice" | "slices" => Unit::Slice,
            _ => return Err(CostError::UnknownUnit { unit: s.to_string() }),
        };
        Ok(unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_forms() {
        for &unit in Unit::ALL {
            assert_eq!(Unit::parse(unit.as_str()).unwrap(), unit);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Unit::parse("grams").unwrap(), Unit::Gram);
        assert_eq!(Unit::parse("Kilogram").unwrap(), Unit::Kilogram);
        assert_eq!(Unit::parse("litres").unwrap(), Unit::Liter);
        assert_eq!(Unit::parse("pcs").unwrap(), Unit::Each);
        assert_eq!(Unit::parse(" SLICES ").unwrap(), Unit::Slice);
    }

    #[test]
    fn test_parse_unknown() {
        let err = Unit::parse("furlong").unwrap_err();
        assert_eq!(
            err,
            CostError::UnknownUnit {
                unit: "furlong".to_string()
            }
        );
    }

    #[test]
    fn test_families() {
        assert_eq!(Unit::Kilogram.family(), UnitFamily::Mass);
        assert_eq!(Unit::Liter.family(), UnitFamily::Volume);
        assert_eq!(Unit::Dozen.family(), UnitFamily::Count);
        assert_eq!(Unit::Slice.family(), UnitFamily::Count);
    }

    #[test]
    fn test_count_bases_are_distinct() {
        // Each and dozen share a base; slice stands alone.
        assert_eq!(Unit::Each.base(), Unit::Dozen.base());
        assert_ne!(Unit::Each.base(), Unit::Slice.base());
    }

    #[test]
    fn test_serde_round_trip() {
        for &unit in Unit::ALL {
            let json = serde_json::to_string(&unit).unwrap();
            assert_eq!(json, format!("\"{}\"", unit.as_str()));
            let back: Unit = serde_json::from_str(&json).unwrap();
            assert_eq!(back, unit);
        }
    }
}
