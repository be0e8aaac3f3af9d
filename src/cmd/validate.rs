use anyhow::{Result, bail};
use std::path::Path;

use rxcheck::models::config::Config;
use rxcheck::models::medicine::MedicineRecord;
use rxcheck::output;
use rxcheck::{MedicineCatalog, Validator, ValidatorSettings};

/// Resolve `--accepted` names to catalog records, in the given order.
fn resolve_accepted(catalog: &MedicineCatalog, names: Option<&str>) -> Result<Vec<MedicineRecord>> {
    let Some(names) = names else {
        return Ok(Vec::new());
    };
    let mut accepted = Vec::new();
    for name in names.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match catalog.get(name) {
            Some(r) => accepted.push(r.clone()),
            None => bail!("Accepted medicine '{}' is not in the catalog.", name),
        }
    }
    Ok(accepted)
}

pub fn run(line: &str, accepted: Option<&str>, catalog_flag: Option<&Path>, human: bool) -> Result<()> {
    let config = Config::load()?;
    let catalog = super::load_catalog(catalog_flag, &config)?;
    let accepted = resolve_accepted(&catalog, accepted)?;

    let validator = Validator::with_settings(&catalog, &ValidatorSettings::from(&config));
    let result = validator.validate(line, &accepted);

    if human {
        println!("{}", output::human::format_result(&result));
    } else {
        output::print_success("validate", &result)?;
    }
    Ok(())
}
