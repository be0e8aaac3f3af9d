use crate::models::medicine::MedicineRecord;
use crate::models::validation::Warning;

/// Compare `candidate` against the medicines already accepted this session.
///
/// Only the candidate's own interaction list is consulted. A prior medicine
/// can raise both an interaction and a duplicate warning.
pub fn check_interactions(accepted: &[MedicineRecord], candidate: &MedicineRecord) -> Vec<Warning> {
    let mut warnings = Vec::new();
    for prior in accepted {
        if candidate.interacts_with(&prior.name) {
            warnings.push(Warning::interaction(&candidate.name, &prior.name));
        }
        if prior.is_named(&candidate.name) {
            warnings.push(Warning::duplicate(&candidate.name));
        }
    }
    if !warnings.is_empty() {
        tracing::debug!(candidate = %candidate.name, count = warnings.len(), "interaction warnings raised");
    }
    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
