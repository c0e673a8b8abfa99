//! Golden mechanism networks shared by the workspace's integration tests and benches.
//!
//! Fixtures live under `crates/test-fixtures/golden/`. Each golden network is a
//! JSON document with a `mechanisms` array (store rows) and an `expected`
//! object holding hand-checked results for that network.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
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

/// Load only the `mechanisms` array of a golden network.
pub fn load_mechanisms<T: DeserializeOwned>(relative_path: &str) -> Vec<T> {
    let mut value = load_fixture_value(relative_path);
    let rows = value
        .get_mut("mechanisms")
        .map(serde_json::Value::take)
        .unwrap_or_else(|| panic!("Fixture {} has no `mechanisms` array", relative_path));
    serde_json::from_value(rows)
        .unwrap_or_else(|e| panic!("Failed to parse mechanisms in {}: {}", relative_path, e))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by path.
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

#[cfg(test)]
mod tests {
    use super::*;

    const SDOH: &str = "golden/mechanisms/sdoh_network.json";

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn golden_network_exists() {
        assert!(fixture_exists(SDOH), "Missing fixture: {}", SDOH);
        assert!(fixture_path(SDOH).ends_with("golden/mechanisms/sdoh_network.json"));
    }

    #[test]
    fn all_golden_mechanism_files_parse_as_json() {
        let files = list_fixtures("golden/mechanisms");
        assert!(!files.is_empty());
        for file in &files {
            let content = std::fs::read_to_string(file)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", file.display(), e));
            let value: serde_json::Value = serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", file.display(), e));
            assert!(value["mechanisms"].is_array(), "{} lacks mechanisms", file.display());
            assert!(value["expected"].is_object(), "{} lacks expected", file.display());
        }
    }

    #[test]
    fn sdoh_network_counts_agree_with_expected() {
        let value = load_fixture_value(SDOH);
        let rows = value["mechanisms"].as_array().unwrap();
        assert_eq!(rows.len() as u64, value["expected"]["edge_count"].as_u64().unwrap());
    }

    #[test]
    fn load_mechanisms_extracts_rows() {
        let rows: Vec<serde_json::Value> = load_mechanisms(SDOH);
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0]["id"], "m01");
    }
}
