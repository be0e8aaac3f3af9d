pub mod catalog;
pub mod config;
pub mod prescription;
pub mod validate;

use anyhow::Result;
use std::path::Path;

use rxcheck::catalog::MedicineCatalog;
use rxcheck::models::config::Config;

/// Load the catalog once for this invocation: the `--catalog` flag wins over
/// `catalog.path` in the config, which wins over the built-in data.
pub fn load_catalog(flag: Option<&Path>, config: &Config) -> Result<MedicineCatalog> {
    let catalog = match flag.or(config.catalog.path.as_deref()) {
        Some(path) => MedicineCatalog::load(path)?,
        None => MedicineCatalog::builtin()?,
    };
    Ok(catalog)
}
