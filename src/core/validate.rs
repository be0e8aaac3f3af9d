//! Single-line validation: extraction, matching and interaction checks
//! composed into one result.

use crate::catalog::MedicineCatalog;
use crate::core::dosage::extract_dosage;
use crate::core::fragment::name_fragment;
use crate::core::interaction::check_interactions;
use crate::core::matcher::{DEFAULT_THRESHOLD, NameMatcher};
use crate::core::strength::extract_strength;
use crate::models::config::Config;
use crate::models::medicine::MedicineRecord;
use crate::models::validation::{UNMATCHED_CONFIDENCE, ValidationResult, Warning};

/// Name reported when a line has nothing to show at all.
const BLANK_NAME: &str = "unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorSettings {
    pub threshold: f64,
    /// Schedule assumed for unmatched lines that carry none.
    pub default_dosage: String,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            default_dosage: "1-0-1".to_string(),
        }
    }
}

impl From<&Config> for ValidatorSettings {
    fn from(config: &Config) -> Self {
        Self {
            threshold: config.matcher.threshold,
            default_dosage: config.defaults.dosage.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Validator<'a> {
    matcher: NameMatcher<'a>,
    default_dosage: String,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a MedicineCatalog) -> Self {
        Self::with_settings(catalog, &ValidatorSettings::default())
    }

    pub fn with_settings(catalog: &'a MedicineCatalog, settings: &ValidatorSettings) -> Self {
        Self {
            matcher: NameMatcher::with_threshold(catalog, settings.threshold),
            default_dosage: settings.default_dosage.clone(),
        }
    }

    pub fn catalog(&self) -> &'a MedicineCatalog {
        self.matcher.catalog()
    }

    /// Validate one line against the medicines accepted so far.
    ///
    /// Never fails: an unrecognised name comes back with `validated = false`
    /// and an `unknown` warning.
    pub fn validate(&self, raw_line: &str, accepted: &[MedicineRecord]) -> ValidationResult {
        let strength = extract_strength(raw_line);
        let dosage = extract_dosage(raw_line);
        let query = name_fragment(raw_line);

        let Some(found) = self.matcher.find(&query) else {
            let name = display_name(&query, raw_line);
            tracing::debug!(line = raw_line, name = %name, "line not validated");
            return ValidationResult {
                validated: false,
                medicine_id: None,
                warnings: vec![Warning::unknown(&name)],
                name,
                query,
                strength,
                dosage: dosage.unwrap_or_else(|| self.default_dosage.clone()),
                confidence: UNMATCHED_CONFIDENCE,
            };
        };

        let record = found.record;
        ValidationResult {
            validated: true,
            medicine_id: Some(record.id.clone()),
            name: record.name.clone(),
            query,
            strength: strength.or_else(|| record.primary_strength().map(String::from)),
            dosage: dosage.unwrap_or_else(|| record.default_dosage.clone()),
            confidence: found.confidence,
            warnings: check_interactions(accepted, record),
        }
    }
}

fn display_name(fragment: &str, raw_line: &str) -> String {
    if !fragment.is_empty() {
        return fragment.to_string();
    }
    let trimmed = raw_line.trim();
    if trimmed.is_empty() {
        BLANK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validation::WarningKind;

    fn catalog() -> MedicineCatalog {
        MedicineCatalog::builtin().unwrap()
    }

    #[test]
    fn fully_specified_line() {
        let cat = catalog();
        let r = Validator::new(&cat).validate("Paracetamol 500mg 1-0-1", &[]);
        assert!(r.validated);
        assert_eq!(r.medicine_id.as_deref(), Some("med-001"));
        assert_eq!(r.name, "Paracetamol");
        assert_eq!(r.query, "Paracetamol");
        assert_eq!(r.strength.as_deref(), Some("500mg"));
        assert_eq!(r.dosage, "1-0-1");
        assert!(r.confidence >= 95);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_record() {
        let cat = catalog();
        let r = Validator::new(&cat).validate("Omeprazole", &[]);
        assert!(r.validated);
        assert_eq!(r.strength.as_deref(), Some("20mg"));
        assert_eq!(r.dosage, "1-0-0");
    }

    #[test]
    fn unknown_medicine() {
        let cat = catalog();
        let r = Validator::new(&cat).validate("Xanadolin 10mg", &[]);
        assert!(!r.validated);
        assert!(r.medicine_id.is_none());
        assert_eq!(r.name, "Xanadolin");
        assert_eq!(r.strength.as_deref(), Some("10mg"));
        assert_eq!(r.dosage, "1-0-1");
        assert_eq!(r.confidence, 40);
        assert_eq!(r.warnings.len(), 1);
        assert_eq!(r.warnings[0].kind, WarningKind::Unknown);
    }

    #[test]
    fn unknown_keeps_extracted_dosage() {
        let cat = catalog();
        let r = Validator::new(&cat).validate("Xanadolin thrice", &[]);
        assert_eq!(r.dosage, "1-1-1");
        assert!(r.strength.is_none());
    }

    #[test]
    fn unknown_uses_configured_default_dosage() {
        let cat = catalog();
        let settings = ValidatorSettings {
            default_dosage: "0-0-1".into(),
            ..ValidatorSettings::default()
        };
        let r = Validator::with_settings(&cat, &settings).validate("Xanadolin", &[]);
        assert_eq!(r.dosage, "0-0-1");
    }

    #[test]
    fn nameless_line_degrades_to_raw_line() {
        let cat = catalog();
        let r = Validator::new(&cat).validate("  500mg 1-0-1 ", &[]);
        assert!(!r.validated);
        assert_eq!(r.name, "500mg 1-0-1");
        assert_eq!(r.query, "");
    }

    #[test]
    fn blank_line_still_has_a_name() {
        let cat = catalog();
        let r = Validator::new(&cat).validate("   ", &[]);
        assert!(!r.validated);
        assert_eq!(r.name, "unknown");
    }

    #[test]
    fn interaction_with_accepted_medicine() {
        let cat = catalog();
        let para = cat.get("Paracetamol").unwrap().clone();
        let r = Validator::new(&cat).validate("Ibuprofen 400mg twice daily", &[para]);
        assert!(r.validated);
        assert_eq!(r.name, "Ibuprofen");
        assert_eq!(r.dosage, "1-0-1");
        assert_eq!(r.warnings.len(), 1);
        assert_eq!(r.warnings[0].kind, WarningKind::Interaction);
    }

    #[test]
    fn repeated_line_is_blocked_as_duplicate() {
        let cat = catalog();
        let ibu = cat.get("Ibuprofen").unwrap().clone();
        let r = Validator::new(&cat).validate("Ibuprofen 200mg", &[ibu]);
        assert!(r.is_blocked());
        assert_eq!(r.warnings[0].kind, WarningKind::Duplicate);
    }

    #[test]
    fn validation_is_idempotent() {
        let cat = catalog();
        let accepted = vec![cat.get("Warfarin").unwrap().clone()];
        let v = Validator::new(&cat);
        let a = v.validate("Aspirin 75mg 0-1-0", &accepted);
        let b = v.validate("Aspirin 75mg 0-1-0", &accepted);
        assert_eq!(a, b);
    }
}
