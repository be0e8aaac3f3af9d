pub mod catalog;
pub mod core;
pub mod models;
pub mod output;

pub use catalog::{CatalogError, MedicineCatalog};
pub use crate::core::session::Session;
pub use crate::core::validate::{Validator, ValidatorSettings};
