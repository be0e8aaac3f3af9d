//! Read-only medicine catalog.
//!
//! The catalog is built once at startup and handed to the matcher and the
//! validator by reference. Any problem with the data is reported as a
//! [`CatalogError`] at load time; nothing downstream can fail because of it.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::core::dosage::is_schedule;
use crate::models::medicine::{MedicineRecord, name_key};

const BUILTIN: &str = include_str!("../../data/catalog.toml");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog data: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog contains no medicines")]
    Empty,

    #[error("catalog entry {0} has a blank id or name")]
    Blank(usize),

    #[error("duplicate medicine id: {0}")]
    DuplicateId(String),

    #[error("duplicate medicine name: {0}")]
    DuplicateName(String),

    #[error("medicine {0} has a default dosage that is not a D-D-D schedule")]
    BadSchedule(String),
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    medicine: Vec<MedicineRecord>,
}

#[derive(Debug, Clone)]
pub struct MedicineCatalog {
    records: Vec<MedicineRecord>,
}

impl MedicineCatalog {
    /// The example catalog shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(s)?;
        Self::from_records(file.medicine)
    }

    /// Build a catalog, rejecting blank keys and duplicate ids or names.
    pub fn from_records(records: Vec<MedicineRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for (i, r) in records.iter().enumerate() {
            if r.id.trim().is_empty() || r.name.trim().is_empty() {
                return Err(CatalogError::Blank(i));
            }
            if !ids.insert(r.id.as_str()) {
                return Err(CatalogError::DuplicateId(r.id.clone()));
            }
            if !names.insert(name_key(&r.name)) {
                return Err(CatalogError::DuplicateName(r.name.clone()));
            }
            if !is_schedule(&r.default_dosage) {
                return Err(CatalogError::BadSchedule(r.name.clone()));
            }
        }
        tracing::debug!(count = records.len(), "medicine catalog loaded");
        Ok(Self { records })
    }

    /// Case-insensitive lookup by canonical name.
    pub fn get(&self, name: &str) -> Option<&MedicineRecord> {
        self.records.iter().find(|r| r.is_named(name))
    }

    pub fn get_by_id(&self, id: &str) -> Option<&MedicineRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MedicineRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
