use anyhow::{Result, bail};
use serde_json::json;
use std::path::Path;

use rxcheck::core::matcher::NameMatcher;
use rxcheck::models::config::Config;
use rxcheck::output;

pub fn run_list(catalog_flag: Option<&Path>, human: bool) -> Result<()> {
    let config = Config::load()?;
    let catalog = super::load_catalog(catalog_flag, &config)?;

    if human {
        println!("{}", output::human::format_catalog(&catalog));
    } else {
        let medicines: Vec<_> = catalog.iter().collect();
        let out = output::success(
            "catalog_list",
            json!({
                "medicines": medicines,
                "count": catalog.len(),
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_show(name: &str, catalog_flag: Option<&Path>, human: bool) -> Result<()> {
    let config = Config::load()?;
    let catalog = super::load_catalog(catalog_flag, &config)?;

    let Some(record) = catalog.get(name) else {
        let matcher = NameMatcher::with_threshold(&catalog, config.matcher.threshold);
        match matcher.find(name) {
            Some(m) => bail!(
                "Medicine '{}' not found in the catalog. Did you mean '{}'?",
                name,
                m.record.name
            ),
            None => bail!("Medicine '{}' not found in the catalog.", name),
        }
    };

    if human {
        println!("{}", output::human::format_record(record));
    } else {
        output::print_success("catalog_show", record)?;
    }
    Ok(())
}
