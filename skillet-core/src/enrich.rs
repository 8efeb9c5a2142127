//! Density enrichment from the reference table.
//!
//! Fills a missing density on an ingredient record from the `density-table`
//! crate, matched by name, so mass/volume costings can go through without
//! manual data entry. Densities already on file are never overwritten:
//! a hand-entered value for a specific brand beats the generic table.

use serde::{Deserialize, Serialize};

use crate::costing::Ingredient;

/// Statistics about a density enrichment pass.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityEnrichmentStats {
    pub filled: usize,
    pub skipped_already_set: usize,
    pub skipped_unknown_ingredient: usize,
    /// Names of ingredients that had no density and no table match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_ingredients: Vec<String>,
}

/// Fill a missing density from the reference table.
pub fn fill_density_from_table(
    mut ingredient: Ingredient,
    stats: &mut DensityEnrichmentStats,
) -> Ingredient {
    if ingredient.density_g_per_ml.is_some() {
        stats.skipped_already_set += 1;
        return ingredient;
    }

    match density_table::find_density(&ingredient.name) {
        Some(density) => {
            tracing::debug!(
                ingredient = %ingredient.name,
                density,
                "filled density from reference table"
            );
            ingredient.density_g_per_ml = Some(density);
            stats.filled += 1;
        }
        None => {
            stats.skipped_unknown_ingredient += 1;
            stats.unknown_ingredients.push(ingredient.name.clone());
        }
    }

    ingredient
}

/// Enrich every ingredient of a batch in place.
pub fn fill_densities_from_table(
    ingredients: Vec<Ingredient>,
    stats: &mut DensityEnrichmentStats,
) -> Vec<Ingredient> {
    ingredients
        .into_iter()
        .map(|ingredient| fill_density_from_table(ingredient, stats))
        .collect()
}
