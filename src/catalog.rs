//! Loading catalog records from a JSON file or a directory of JSON files.

use crate::error::{AutorecError, Result};
use crate::types::preferences::Preferences;
use crate::types::record::VehicleRecord;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct Catalog {
    pub records: Vec<VehicleRecord>,
    /// First 16 hex chars of SHA-256 over the source bytes, in path order.
    pub digest: String,
    pub sources: Vec<PathBuf>,
}

pub fn list_json_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .map(|entry| entry.path().to_path_buf())
        .collect();
    files.sort();
    files
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(AutorecError::CatalogNotFound(path.display().to_string()));
    }
    let sources = if path.is_dir() {
        list_json_files(path)
    } else {
        vec![path.to_path_buf()]
    };

    let mut hasher = Sha256::new();
    let mut records = Vec::new();
    for source in &sources {
        let bytes = std::fs::read(source)?;
        hasher.update(&bytes);
        let parsed = parse_records(&bytes)
            .map_err(|e| AutorecError::CatalogParse(format!("{}: {}", source.display(), e)))?;
        debug!(source = %source.display(), records = parsed.len(), "loaded catalog file");
        records.extend(parsed);
    }

    let digest = hex_prefix(&hasher.finalize(), 16);
    Ok(Catalog {
        records,
        digest,
        sources,
    })
}

/// A JSON array of objects, or a single object for a one-record catalog.
pub fn parse_records(bytes: &[u8]) -> serde_json::Result<Vec<VehicleRecord>> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value),
        other => serde_json::from_value(other).map(|record| vec![record]),
    }
}

/// Preferences from a `.toml` file, or JSON otherwise. `None` yields the
/// empty payload.
pub fn load_preferences(path: Option<&Path>) -> Result<Preferences> {
    let Some(path) = path else {
        return Ok(Preferences::default());
    };
    if !path.exists() {
        return Err(AutorecError::PreferencesNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let parsed = if is_toml {
        toml::from_str::<Preferences>(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str::<Preferences>(&content).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| AutorecError::PreferencesParse(format!("{}: {}", path.display(), e)))
}

fn hex_prefix(bytes: &[u8], len: usize) -> String {
    let mut hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    hex.truncate(len);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_single_file_and_hashes_it() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("cars.json");
        fs::write(&path, r#"[{"メーカー": "トヨタ"}, {"メーカー": "ホンダ"}]"#)
            .expect("catalog should write");

        let catalog = load_catalog(&path).expect("catalog should load");
        assert_eq!(catalog.records.len(), 2);
        assert_eq!(catalog.digest.len(), 16);
        assert!(catalog.digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn directory_catalogs_are_read_in_path_order() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("nested")).expect("nested dir should create");
        fs::write(dir.path().join("b.json"), r#"[{"model": "b"}]"#).expect("b should write");
        fs::write(dir.path().join("a.json"), r#"{"model": "a"}"#).expect("a should write");
        fs::write(dir.path().join("nested/c.json"), r#"[{"model": "c"}]"#)
            .expect("c should write");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("notes should write");

        let catalog = load_catalog(dir.path()).expect("catalog should load");
        let models: Vec<_> = catalog.records.iter().filter_map(|r| r.model()).collect();
        assert_eq!(models, vec!["a", "b", "c"]);
        assert_eq!(catalog.sources.len(), 3);
    }

    #[test]
    fn digest_is_stable_for_identical_bytes() {
        let dir = TempDir::new().expect("temp dir should be created");
        let first = dir.path().join("one.json");
        let second = dir.path().join("two.json");
        fs::write(&first, "[]").expect("first should write");
        fs::write(&second, "[]").expect("second should write");

        let a = load_catalog(&first).expect("first should load");
        let b = load_catalog(&second).expect("second should load");
        assert_eq!(a.digest, b.digest);
    }

    #[test]
    fn missing_and_malformed_catalogs_are_errors() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = load_catalog(&dir.path().join("nope.json")).expect_err("should fail");
        assert!(matches!(missing, AutorecError::CatalogNotFound(_)));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "[{").expect("broken catalog should write");
        let err = load_catalog(&broken).expect_err("should fail");
        assert!(matches!(err, AutorecError::CatalogParse(_)));
    }

    #[test]
    fn preferences_load_from_json_and_toml() {
        let dir = TempDir::new().expect("temp dir should be created");
        let json_path = dir.path().join("prefs.json");
        let toml_path = dir.path().join("prefs.toml");
        fs::write(&json_path, r#"{"max_price": 300, "min_seats": 5}"#)
            .expect("json prefs should write");
        fs::write(&toml_path, "body_types = [\"SUV\"]\n").expect("toml prefs should write");

        let json_prefs = load_preferences(Some(&json_path)).expect("json prefs should load");
        assert_eq!(json_prefs.max_price, Some(300.0));
        let toml_prefs = load_preferences(Some(&toml_path)).expect("toml prefs should load");
        assert_eq!(toml_prefs.body_types, vec!["SUV"]);
        assert!(load_preferences(None).expect("default prefs").is_empty());
    }
}
