pub mod config;
pub mod medicine;
pub mod validation;

pub use medicine::MedicineRecord;
pub use validation::{Severity, ValidationResult, Warning, WarningKind};
