use serde::{Deserialize, Serialize};

/// Key under which medicine names compare equal: trimmed, Unicode lowercase.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// MedicineRecord
// ---------------------------------------------------------------------------

/// A known medicine in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicineRecord {
    pub id: String,
    pub name: String,
    /// Valid strength labels, most common first.
    #[serde(default)]
    pub strengths: Vec<String>,
    pub form: String,
    pub default_dosage: String,
    pub category: String,
    /// Names of medicines this one is known to interact with.
    #[serde(default)]
    pub interactions: Vec<String>,
}

impl MedicineRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            strengths: Vec::new(),
            form: "tablet".to_string(),
            default_dosage: "1-0-1".to_string(),
            category: "general".to_string(),
            interactions: Vec::new(),
        }
    }

    /// The first listed strength, used when a line carries none.
    pub fn primary_strength(&self) -> Option<&str> {
        self.strengths.first().map(String::as_str)
    }

    /// Whether `other` appears in this medicine's interaction list.
    pub fn interacts_with(&self, other: &str) -> bool {
        let other = name_key(other);
        self.interactions.iter().any(|n| name_key(n) == other)
    }

    pub fn is_named(&self, name: &str) -> bool {
        name_key(&self.name) == name_key(name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
