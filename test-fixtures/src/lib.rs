//! Test fixture loader for Augur golden forecast scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use std::collections::HashMap;
use std::path::PathBuf;

use augur_core::ForecastRequest;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// A golden forecast scenario: a request, the reference time it is scored
/// at, and the values a correct engine produces.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenForecast {
    pub description: String,
    /// RFC 3339 reference time for recency.
    pub now: String,
    pub request: ForecastRequest,
    pub expected: ExpectedForecast,
}

/// Expected engine output for a [`GoldenForecast`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedForecast {
    pub p0: f64,
    pub p_neutral: f64,
    pub p_aware: Option<f64>,
    #[serde(rename = "logLR")]
    pub log_lr: HashMap<String, f64>,
    #[serde(rename = "deltaPP")]
    pub delta_pp: HashMap<String, f64>,
    pub clusters: Vec<ExpectedCluster>,
    pub influence_under_threshold: bool,
    pub tolerance: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedCluster {
    pub cluster_id: String,
    pub size: usize,
    pub rho: f64,
    #[serde(rename = "mEff")]
    pub m_eff: f64,
    #[serde(rename = "meanLogLR")]
    pub mean_log_lr: f64,
}

/// Load a golden forecast scenario by file stem, e.g. `"correlated_pair"`.
pub fn load_golden_forecast(name: &str) -> GoldenForecast {
    load_fixture(&format!("golden/forecast/{name}.json"))
}
