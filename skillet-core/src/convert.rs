//! Quantity conversion between units.
//!
//! Same-base conversions are fixed ratios. Mass/volume crossings go through
//! grams and milliliters using the ingredient's density. Count units only
//! convert to count units sharing the same base.

use crate::error::CostError;
use crate::units::{Unit, UnitFamily};

/// Convert a quantity from one unit to another.
///
/// `density_g_per_ml` is only consulted for mass/volume crossings; it is
/// ignored for same-family conversions. No rounding is applied.
pub fn convert_quantity(
    quantity: f64,
    from: Unit,
    to: Unit,
    density_g_per_ml: Option<f64>,
) -> Result<f64, CostError> {
    if from.base() == to.base() {
        return Ok(quantity * from.base_factor() / to.base_factor());
    }

    match (from.family(), to.family()) {
        (UnitFamily::Mass, UnitFamily::Volume) => {
            let density = density_g_per_ml.ok_or(CostError::MissingDensity { from, to })?;
            let grams = quantity * from.base_factor();
            Ok(grams / density / to.base_factor())
        }
        (UnitFamily::Volume, UnitFamily::Mass) => {
            let density = density_g_per_ml.ok_or(CostError::MissingDensity { from, to })?;
            let milliliters = quantity * from.base_factor();
            Ok(milliliters * density / to.base_factor())
        }
        // Count vs. mass/volume, or count units with different bases
        // (each vs. slice): no density makes these commensurable.
        _ => Err(CostError::IncompatibleUnits { from, to }),
    }
}
