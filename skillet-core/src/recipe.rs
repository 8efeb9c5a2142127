//! Recipe-level cost aggregation.
//!
//! Wraps the per-line engine for whole recipes. Each line gets a cost or a
//! domain error; the recipe gets a total over the lines that costed, plus
//! counters a UI can use to prompt for missing data instead of failing the
//! whole computation.

use serde::{Deserialize, Serialize};

use crate::costing::{compute_usage_cost, Ingredient, Usage};
use crate::error::CostError;

/// One line of a recipe: an ingredient and how much of it is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    pub ingredient: Ingredient,
    pub usage: Usage,
}

/// The costing outcome for a single line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineCost {
    /// Ingredient name, carried through for display.
    pub ingredient: String,
    /// Cost in the pack-price currency, when the line could be costed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Why the line could not be costed, otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CostError>,
}

/// Counters describing a recipe costing run.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostingStats {
    pub costed: usize,
    pub failed_missing_density: usize,
    pub failed_incompatible_units: usize,
    pub failed_invalid_pack: usize,
    /// Names of ingredients that need a density on file before their lines
    /// can be costed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_density_ingredients: Vec<String>,
}

/// A full recipe costing: per-line outcomes plus the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCost {
    pub lines: Vec<LineCost>,
    /// Sum over the lines that costed. Lines that failed contribute nothing,
    /// so this is a lower bound while data is incomplete.
    pub total: f64,
    pub stats: CostingStats,
}

impl RecipeCost {
    /// Whether every line was costed.
    pub fn is_complete(&self) -> bool {
        self.stats.costed == self.lines.len()
    }

    /// Total divided over servings; `None` for zero servings.
    pub fn per_serving(&self, servings: u32) -> Option<f64> {
        if servings == 0 {
            return None;
        }
        Some(self.total / f64::from(servings))
    }
}

/// Cost every line of a recipe.
///
/// Domain errors on individual lines are recorded, counted, and skipped
/// rather than aborting the run: a recipe with one ingredient missing a
/// density still gets a total for everything else, and the stats name the
/// ingredients to prompt for.
pub fn cost_recipe(lines: &[RecipeLine]) -> RecipeCost {
    let mut out_lines = Vec::with_capacity(lines.len());
    let mut stats = CostingStats::default();
    let mut total = 0.0;

    for line in lines {
        match compute_usage_cost(&line.usage, &line.ingredient) {
            Ok(cost) => {
                total += cost;
                stats.costed += 1;
                out_lines.push(LineCost {
                    ingredient: line.ingredient.name.clone(),
                    cost: Some(cost),
                    error: None,
                });
            }
            Err(err) => {
                match &err {
                    CostError::MissingDensity { .. } => {
                        stats.failed_missing_density += 1;
                        stats
                            .missing_density_ingredients
                            .push(line.ingredient.name.clone());
                    }
                    CostError::IncompatibleUnits { .. } => {
                        stats.failed_incompatible_units += 1;
                    }
                    CostError::InvalidPackQuantity { .. } => {
                        stats.failed_invalid_pack += 1;
                    }
                    // Units are typed here; unknown-unit errors only occur
                    // at the string parse boundary.
                    CostError::UnknownUnit { .. } => {}
                }
                out_lines.push(LineCost {
                    ingredient: line.ingredient.name.clone(),
                    cost: None,
                    error: Some(err),
                });
            }
        }
    }

    RecipeCost {
        lines: out_lines,
        total,
        stats,
    }
}
