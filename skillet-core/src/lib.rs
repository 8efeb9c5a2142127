//! Unit conversion and ingredient usage costing.
//!
//! The engine answers one question: what does a recipe line cost, given how
//! the ingredient is purchased? A usage quantity in an arbitrary unit is
//! converted into the ingredient's pack unit (crossing mass/volume through
//! the ingredient's density when the families differ) and priced pro rata
//! against the pack price.
//!
//! Everything is a pure computation over caller-supplied values: no I/O, no
//! shared state, no rounding. Missing or contradictory data comes back as a
//! typed [`CostError`] for the caller to handle, never as a silent zero.
//!
//! # Example
//!
//! ```
//! use skillet_core::{compute_usage_cost, Ingredient, Unit, Usage};
//!
//! // A 1 kg bag of flour for 2.50, used 500 g at a time.
//! let flour = Ingredient {
//!     name: "all-purpose flour".to_string(),
//!     pack_quantity: 1000.0,
//!     pack_unit: Unit::Gram,
//!     pack_price: 2.50,
//!     density_g_per_ml: None,
//! };
//! let cost = compute_usage_cost(&Usage::new(500.0, Unit::Gram), &flour).unwrap();
//! assert!((cost - 1.25).abs() < 1e-9);
//! ```

pub mod convert;
pub mod costing;
pub mod enrich;
pub mod error;
pub mod recipe;
pub mod units;

pub use convert::convert_quantity;
pub use costing::{compute_usage_cost, Ingredient, Usage};
pub use enrich::{fill_densities_from_table, fill_density_from_table, DensityEnrichmentStats};
pub use error::{CostError, ValidationError};
pub use recipe::{cost_recipe, CostingStats, LineCost, RecipeCost, RecipeLine};
pub use units::{BaseUnit, Unit, UnitFamily};
