//! Ingredient density lookup for mass/volume conversion.
//!
//! This crate provides density data (grams per milliliter) for common kitchen
//! ingredients, enabling conversion between weight and volume measurements
//! when an ingredient record has no density of its own.
//!
//! Data sources:
//! - USDA FoodData Central SR Legacy (public domain, CC0)
//! - Curated entries with citations for specific ingredients
//!
//! # Example
//!
//! ```
//! use density_table::find_density;
//!
//! // Look up density for whole milk
//! if let Some(g_per_ml) = find_density("whole milk") {
//!     // Convert 250 ml to grams
//!     let grams = 250.0 * g_per_ml;
//!     println!("250 ml milk = {grams}g");
//! }
//! ```

mod lookup;

pub use lookup::find_density;
