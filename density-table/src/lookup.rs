//! Ingredient density lookup.
//!
//! Densities are stored as grams per milliliter. Entries come from USDA
//! FoodData Central (public domain, CC0) plus curated additions with
//! citations kept alongside the values.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

// =============================================================================
// Data structures
// =============================================================================

/// A single density entry with its citation.
#[derive(Deserialize)]
struct DensityEntry {
    g_per_ml: f64,
    #[allow(dead_code)]
    source: String,
    #[allow(dead_code)]
    url: Option<String>,
}

/// On-disk data format.
#[derive(Deserialize)]
struct DensityDataFile {
    ingredients: HashMap<String, DensityEntry>,
    /// Aliases can be null to indicate "explicitly ambiguous, do not resolve"
    /// (e.g. "salt", where table and kosher salt differ by a factor of two).
    aliases: HashMap<String, Option<String>>,
}

/// Parsed density data.
struct DensityData {
    /// Ingredient name -> grams per milliliter
    ingredients: HashMap<String, f64>,
    /// Alias -> canonical name (or None if explicitly ambiguous)
    aliases: HashMap<String, Option<String>>,
}

// =============================================================================
// Data loading
// =============================================================================

/// Embedded JSON data file.
static DENSITIES_JSON: &str = include_str!("data/densities.json");

static DATA: LazyLock<DensityData> = LazyLock::new(|| {
    let file: DensityDataFile =
        serde_json::from_str(DENSITIES_JSON).expect("densities.json should be valid JSON");

    let ingredients = file
        .ingredients
        .into_iter()
        .map(|(name, entry)| (name, entry.g_per_ml))
        .collect();

    DensityData {
        ingredients,
        aliases: file.aliases,
    }
});

// =============================================================================
// Modifier stripping
// =============================================================================

/// Common modifiers to strip from ingredient names before matching.
const MODIFIERS_TO_STRIP: &[&str] = &[
    // Temperature/state modifiers (prefix)
    "room temperature ",
    "cold ",
    "warm ",
    "melted ",
    "softened ",
    "fresh ",
    // Preparation modifiers (suffix)
    ", softened",
    ", melted",
    ", cold",
    ", at room temperature",
    ", room temperature",
    ", chilled",
    ", sifted",
];

/// Strip common modifiers from ingredient name.
fn strip_modifiers(s: &str) -> String {
    let mut result = s.to_string();
    for modifier in MODIFIERS_TO_STRIP {
        if let Some(stripped) = result.strip_prefix(modifier) {
            result = stripped.to_string();
        }
        if let Some(stripped) = result.strip_suffix(modifier) {
            result = stripped.to_string();
        }
    }
    result
}

// =============================================================================
// Plural handling
// =============================================================================

/// Try plural/singular variations of a name.
fn try_plural_variations(name: &str, ingredients: &HashMap<String, f64>) -> Option<f64> {
    // Try adding 's' for singular -> plural (e.g., "onion" -> "onions")
    let with_s = format!("{name}s");
    if let Some(&density) = ingredients.get(&with_s) {
        return Some(density);
    }

    // Try removing 's' for plural -> singular (e.g., "eggs" -> "egg")
    if let Some(without_s) = name.strip_suffix('s') {
        if let Some(&density) = ingredients.get(without_s) {
            return Some(density);
        }
    }

    None
}

// =============================================================================
// Public API
// =============================================================================

/// Normalize ingredient name for matching.
fn normalize_ingredient_name(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

/// Find the density (grams per milliliter) for an ingredient name.
///
/// Lookup order:
/// 1. Direct lookup in ingredients
/// 2. Lookup via aliases (returns None if alias is explicitly null/ambiguous)
/// 3. Try plural/singular variations
/// 4. After stripping common modifiers, retry steps 1-3
pub fn find_density(ingredient_name: &str) -> Option<f64> {
    let normalized = normalize_ingredient_name(ingredient_name);

    fn lookup(name: &str, data: &DensityData) -> Option<f64> {
        // Direct lookup
        if let Some(&density) = data.ingredients.get(name) {
            return Some(density);
        }

        // Alias lookup
        if let Some(canonical_opt) = data.aliases.get(name) {
            match canonical_opt {
                Some(canonical) => {
                    if let Some(&density) = data.ingredients.get(canonical) {
                        return Some(density);
                    }
                }
                None => {
                    // Explicitly ambiguous alias - return None immediately
                    return None;
                }
            }
        }

        // Plural/singular variations
        if let Some(density) = try_plural_variations(name, &data.ingredients) {
            return Some(density);
        }

        None
    }

    // Try with original normalized name
    if let Some(density) = lookup(&normalized, &DATA) {
        return Some(density);
    }

    // Try with modifiers stripped
    let stripped = strip_modifiers(&normalized);
    if stripped != normalized {
        if let Some(density) = lookup(&stripped, &DATA) {
            return Some(density);
        }
    }

    None
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_density_direct() {
        let water = find_density("water").expect("water should have a density");
        assert!((water - 1.0).abs() < 1e-9);
        assert!(find_density("whole milk").is_some());
        assert!(find_density("honey").is_some());
    }

    #[test]
    fn test_find_density_alias() {
        assert_eq!(find_density("flour"), find_density("all-purpose flour"));
        assert_eq!(find_density("sugar"), find_density("granulated sugar"));
        assert_eq!(find_density("milk"), find_density("whole milk"));
        assert_eq!(find_density("oil"), find_density("vegetable oil"));
    }

    #[test]
    fn test_find_density_with_modifiers() {
        assert!(find_density("softened butter").is_some());
        assert!(find_density("melted butter").is_some());
        assert!(find_density("butter, melted").is_some());
    }

    #[test]
    fn test_find_density_case_insensitive() {
        assert!(find_density("HONEY").is_some());
        assert!(find_density("Whole Milk").is_some());
        assert!(find_density("  water  ").is_some());
    }

    #[test]
    fn test_find_density_unknown() {
        assert_eq!(find_density("unicorn tears"), None);
        assert_eq!(find_density("mystery powder"), None);
    }

    #[test]
    fn test_plural_fallback() {
        // "rolled oat" should find "rolled oats"
        assert!(find_density("rolled oat").is_some());
    }

    #[test]
    fn test_ambiguous_aliases_return_none() {
        // Salt varieties differ by a factor of two in density, so the bare
        // names must not resolve to anything.
        assert!(find_density("salt").is_none());
        assert!(find_density("kosher salt").is_none());
        // But explicit variants do resolve.
        assert!(find_density("table salt").is_some());
        assert!(find_density("fine sea salt").is_some());
    }

    #[test]
    fn test_liquid_densities_near_water() {
        for name in ["whole milk", "buttermilk", "lemon juice", "white vinegar"] {
            let density = find_density(name).unwrap_or_else(|| panic!("{name} should resolve"));
            assert!(
                (0.9..=1.1).contains(&density),
                "{name} density {density} out of expected range"
            );
        }
    }

    #[test]
    fn test_dry_goods_lighter_than_water() {
        for name in ["all-purpose flour", "rolled oats", "cocoa powder"] {
            let density = find_density(name).unwrap_or_else(|| panic!("{name} should resolve"));
            assert!(density < 1.0, "{name} density {density} should be < 1.0");
        }
    }
}
