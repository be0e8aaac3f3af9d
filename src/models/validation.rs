use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence reported for a line that matched nothing in the catalog.
pub const UNMATCHED_CONFIDENCE: u8 = 40;

// ---------------------------------------------------------------------------
// WarningKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    Interaction,
    Duplicate,
    Unknown,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interaction => write!(f, "interaction"),
            Self::Duplicate => write!(f, "duplicate"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

// ---------------------------------------------------------------------------
// Warning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub severity: Severity,
    pub message: String,
    pub medicines: Vec<String>,
}

impl Warning {
    pub fn interaction(candidate: &str, prior: &str) -> Self {
        Self {
            kind: WarningKind::Interaction,
            severity: Severity::Warning,
            message: format!("{candidate} may interact with {prior}"),
            medicines: vec![candidate.to_string(), prior.to_string()],
        }
    }

    pub fn duplicate(candidate: &str) -> Self {
        Self {
            kind: WarningKind::Duplicate,
            severity: Severity::Critical,
            message: format!("{candidate} is already in the medication list"),
            medicines: vec![candidate.to_string()],
        }
    }

    pub fn unknown(name: &str) -> Self {
        Self {
            kind: WarningKind::Unknown,
            severity: Severity::Warning,
            message: format!("'{name}' was not found in the medicine catalog"),
            medicines: vec![name.to_string()],
        }
    }

    /// Critical warnings block acceptance; the rest are advisory.
    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Critical
    }
}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// Outcome of validating one prescription line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub validated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medicine_id: Option<String>,
    pub name: String,
    /// Fragment of the raw line that was fed to the matcher.
    pub query: String,
    pub strength: Option<String>,
    pub dosage: String,
    pub confidence: u8,
    pub warnings: Vec<Warning>,
}

impl ValidationResult {
    pub fn is_blocked(&self) -> bool {
        self.warnings.iter().any(Warning::is_blocking)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn warning_constructors_set_kind_and_severity() {
        let w = Warning::interaction("Ibuprofen", "Aspirin");
        assert_eq!(w.kind, WarningKind::Interaction);
        assert_eq!(w.severity, Severity::Warning);
        assert_eq!(w.medicines, vec!["Ibuprofen", "Aspirin"]);
        assert!(!w.is_blocking());

        let d = Warning::duplicate("Ibuprofen");
        assert_eq!(d.kind, WarningKind::Duplicate);
        assert!(d.is_blocking());

        let u = Warning::unknown("Xanadolin");
        assert_eq!(u.kind, WarningKind::Unknown);
        assert_eq!(u.severity, Severity::Warning);
        assert!(u.message.contains("Xanadolin"));
    }

    #[test]
    fn warning_serializes_lowercase_tags() {
        let v = serde_json::to_value(Warning::duplicate("Aspirin")).unwrap();
        assert_eq!(v["kind"], "duplicate");
        assert_eq!(v["severity"], "critical");
        assert_eq!(v["medicines"], json!(["Aspirin"]));
    }

    #[test]
    fn unmatched_result_omits_medicine_id() {
        let r = ValidationResult {
            validated: false,
            medicine_id: None,
            name: "Xanadolin".into(),
            query: "Xanadolin".into(),
            strength: None,
            dosage: "1-0-1".into(),
            confidence: UNMATCHED_CONFIDENCE,
            warnings: vec![Warning::unknown("Xanadolin")],
        };
        let v = serde_json::to_value(&r).unwrap();
        assert!(v.get("medicine_id").is_none());
        assert!(v["strength"].is_null());
        assert_eq!(v["confidence"], 40);
        assert!(!r.is_blocked());
    }

    #[test]
    fn display_matches_serde_names() {
        assert_eq!(WarningKind::Interaction.to_string(), "interaction");
        assert_eq!(Severity::Critical.to_string(), "critical");
    }
}
