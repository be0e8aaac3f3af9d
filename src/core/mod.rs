pub mod dosage;
pub mod fragment;
pub mod interaction;
pub mod matcher;
pub mod session;
pub mod strength;
pub mod validate;
