#![allow(dead_code)]

use rxcheck::MedicineCatalog;
use rxcheck::models::medicine::MedicineRecord;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn catalog() -> MedicineCatalog {
    MedicineCatalog::builtin().unwrap()
}

/// Clone a built-in record by name for use in an accepted list.
pub fn accepted(catalog: &MedicineCatalog, names: &[&str]) -> Vec<MedicineRecord> {
    names
        .iter()
        .map(|n| catalog.get(n).unwrap().clone())
        .collect()
}

/// Write a catalog file into a fresh temp dir and return both.
pub fn write_catalog(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

/// A small catalog whose interaction data is deliberately one-sided.
pub const ASYMMETRIC_CATALOG: &str = r#"
[[medicine]]
id = "c-1"
name = "Clarithromycin"
strengths = ["250mg", "500mg"]
form = "tablet"
default_dosage = "1-0-1"
category = "antibiotic"
interactions = ["Simvastatin"]

[[medicine]]
id = "c-2"
name = "Simvastatin"
strengths = ["20mg"]
form = "tablet"
default_dosage = "0-0-1"
category = "statin"
interactions = []
"#;
