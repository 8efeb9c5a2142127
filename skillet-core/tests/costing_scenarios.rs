//! Scenario tests for usage costing.
//!
//! Test cases are defined as JSON files in the `fixtures/` directory, one
//! scenario per file: an ingredient, a usage, and either an expected cost or
//! an expected error kind.

use serde::Deserialize;
use skillet_core::{compute_usage_cost, CostError, Ingredient, Usage};
use std::fs;
use std::path::Path;

/// A test case loaded from a JSON fixture file
#[derive(Debug, Deserialize)]
struct TestCase {
    /// Human-readable description of the scenario
    #[allow(dead_code)]
    description: String,
    ingredient: Ingredient,
    usage: Usage,
    expected: Expected,
}

/// Expected outcome: exactly one of `cost` or `error`
#[derive(Debug, Deserialize)]
struct Expected {
    #[serde(default)]
    cost: Option<f64>,
    /// Error kind: "invalid_pack_quantity", "missing_density",
    /// "incompatible_units" or "unknown_unit"
    #[serde(default)]
    error: Option<String>,
    /// Absolute tolerance for cost comparison
    #[serde(default = "default_tolerance")]
    tolerance: f64,
}

fn default_tolerance() -> f64 {
    1e-9
}

fn error_kind(err: &CostError) -> &'static str {
    match err {
        CostError::InvalidPackQuantity { .. } => "invalid_pack_quantity",
        CostError::MissingDensity { .. } => "missing_density",
        CostError::IncompatibleUnits { .. } => "incompatible_units",
        CostError::UnknownUnit { .. } => "unknown_unit",
    }
}

/// Load all test cases from the fixtures directory
fn load_test_cases() -> Vec<(String, TestCase)> {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");

    let mut cases = Vec::new();

    for entry in fs::read_dir(&fixtures_dir).expect("Failed to read fixtures directory") {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.extension().map(|e| e == "json").unwrap_or(false) {
            let name = path.file_stem().unwrap().to_string_lossy().into_owned();
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            let case: TestCase = serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
            cases.push((name, case));
        }
    }

    assert!(
        !cases.is_empty(),
        "No test fixtures found in {:?}",
        fixtures_dir
    );
    cases
}

#[test]
fn test_costing_scenarios() {
    let cases = load_test_cases();

    for (name, case) in cases {
        println!("Testing: {}", name);

        let result = compute_usage_cost(&case.usage, &case.ingredient);

        match (&case.expected.cost, &case.expected.error) {
            (Some(expected_cost), None) => {
                let cost = result
                    .unwrap_or_else(|e| panic!("Costing failed for {}: {}", name, e));
                assert!(
                    (cost - expected_cost).abs() < case.expected.tolerance,
                    "Cost mismatch for {}: expected {}, got {}",
                    name,
                    expected_cost,
                    cost
                );
            }
            (None, Some(expected_kind)) => {
                let err = result.expect_err(&format!(
                    "Expected {} to fail with {}, but it succeeded",
                    name, expected_kind
                ));
                assert_eq!(
                    error_kind(&err),
                    expected_kind,
                    "Error kind mismatch for {}: got {}",
                    name,
                    err
                );
            }
            _ => panic!(
                "Fixture {} must set exactly one of expected.cost / expected.error",
                name
            ),
        }
    }
}
