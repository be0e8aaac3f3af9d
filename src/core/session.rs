use crate::core::validate::Validator;
use crate::models::medicine::MedicineRecord;
use crate::models::validation::ValidationResult;

/// Caller-side running list for one prescription.
///
/// Lines are validated one at a time; each accepted medicine is appended
/// before the next line is checked so later lines see earlier ones.
/// Unknown and blocked lines are not appended.
pub struct Session<'v, 'a> {
    validator: &'v Validator<'a>,
    accepted: Vec<MedicineRecord>,
}

impl<'v, 'a> Session<'v, 'a> {
    pub fn new(validator: &'v Validator<'a>) -> Self {
        Self::with_accepted(validator, Vec::new())
    }

    pub fn with_accepted(validator: &'v Validator<'a>, accepted: Vec<MedicineRecord>) -> Self {
        Self {
            validator,
            accepted,
        }
    }

    pub fn validate_line(&mut self, line: &str) -> ValidationResult {
        let result = self.validator.validate(line, &self.accepted);
        if result.validated
            && !result.is_blocked()
            && let Some(id) = result.medicine_id.as_deref()
            && let Some(record) = self.validator.catalog().get_by_id(id)
        {
            self.accepted.push(record.clone());
        }
        result
    }

    pub fn accepted(&self) -> &[MedicineRecord] {
        &self.accepted
    }

    pub fn into_accepted(self) -> Vec<MedicineRecord> {
        self.accepted
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
