use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::Unit;

/// Domain errors from unit conversion and costing.
///
/// All variants arise from normal data entry (a recipe line in `ml` against
/// an ingredient with no density on file, a pack size typed as zero) and are
/// returned as values for the call boundary to handle. Callers typically
/// degrade to a placeholder display and prompt for the missing data.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CostError {
    /// Pack quantity is zero or negative, so cost-per-unit is undefined.
    #[error("invalid pack quantity {quantity}")]
    InvalidPackQuantity { quantity: f64 },

    /// A mass/volume crossing was requested but no density was supplied.
    #[error("density required to convert {from} to {to}")]
    MissingDensity { from: Unit, to: Unit },

    /// The two units belong to families that cannot be reconciled even with
    /// a density (count vs. mass/volume, or two unrelated count units).
    #[error("cannot convert {from} to {to}")]
    IncompatibleUnits { from: Unit, to: Unit },

    /// A unit string outside the recognized taxonomy.
    #[error("unknown unit \"{unit}\"")]
    UnknownUnit { unit: String },
}

/// Boundary validation failures for caller-supplied records.
///
/// The engine itself treats these as programming errors; forms reject them
/// before a record enters a costing pipeline.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("pack quantity must be positive, got {quantity}")]
    NonPositivePackQuantity { quantity: f64 },

    #[error("pack price must be non-negative, got {price}")]
    NegativePackPrice { price: f64 },

    #[error("density must be positive, got {density}")]
    NonPositiveDensity { density: f64 },

    #[error("usage quantity must be non-negative, got {quantity}")]
    NegativeUsageQuantity { quantity: f64 },
}
