//! Ingredient usage costing.
//!
//! Converts a recipe-line quantity into money using the ingredient's pack
//! size and price, crossing mass/volume via density when needed. The engine
//! is a pure function over its inputs: no rounding, no I/O, no state.

use serde::{Deserialize, Serialize};

use crate::convert::convert_quantity;
use crate::error::{CostError, ValidationError};
use crate::units::Unit;

/// An ingredient's cost basis: how it is purchased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name; opaque to the engine, used for density lookup and
    /// error reporting only.
    pub name: String,
    /// Amount contained in one purchased pack, in `pack_unit`.
    pub pack_quantity: f64,
    /// Unit the ingredient is purchased in.
    pub pack_unit: Unit,
    /// Price of one pack. Currency-agnostic: costs come back in whatever
    /// currency this was denominated in.
    pub pack_price: f64,
    /// Grams per milliliter; only needed when a usage crosses mass/volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_g_per_ml: Option<f64>,
}

impl Ingredient {
    /// Boundary validation for caller input.
    ///
    /// `compute_usage_cost` guards the pack quantity itself; this
    /// additionally rejects the values the engine treats as programming
    /// errors (negative price, non-positive density), so forms can reject
    /// bad input before it reaches a costing pipeline.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pack_quantity <= 0.0 {
            return Err(ValidationError::NonPositivePackQuantity {
                quantity: self.pack_quantity,
            });
        }
        if self.pack_price < 0.0 {
            return Err(ValidationError::NegativePackPrice {
                price: self.pack_price,
            });
        }
        if let Some(density) = self.density_g_per_ml {
            if density <= 0.0 {
                return Err(ValidationError::NonPositiveDensity { density });
            }
        }
        Ok(())
    }
}

/// The quantity and unit a recipe line specifies when consuming an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub quantity: f64,
    pub unit: Unit,
}

impl Usage {
    pub fn new(quantity: f64, unit: Unit) -> Self {
        Usage { quantity, unit }
    }

    /// Boundary validation for caller input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.quantity < 0.0 {
            return Err(ValidationError::NegativeUsageQuantity {
                quantity: self.quantity,
            });
        }
        Ok(())
    }
}

/// Compute the cost of a usage against an ingredient's pack price.
///
/// The usage quantity is converted into the ingredient's pack unit (bridging
/// mass/volume through the ingredient's density when the families differ)
/// and priced pro rata against the pack. No rounding is applied; formatting
/// to currency precision is the caller's concern.
///
/// Fails with [`CostError::InvalidPackQuantity`] for a non-positive pack,
/// [`CostError::MissingDensity`] for a mass/volume crossing without a
/// density, and [`CostError::IncompatibleUnits`] when the units cannot be
/// reconciled at all. A missing density is a real error here — defaulting
/// the cost to zero is a display decision that belongs to callers.
pub fn compute_usage_cost(usage: &Usage, ingredient: &Ingredient) -> Result<f64, CostError> {
    if ingredient.pack_quantity <= 0.0 {
        return Err(CostError::InvalidPackQuantity {
            quantity: ingredient.pack_quantity,
        });
    }

    let quantity_in_pack_unit = convert_quantity(
        usage.quantity,
        usage.unit,
        ingredient.pack_unit,
        ingredient.density_g_per_ml,
    )?;

    let price_per_pack_unit = ingredient.pack_price / ingredient.pack_quantity;
    Ok(quantity_in_pack_unit * price_per_pack_unit)
}
