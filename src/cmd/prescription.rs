use anyhow::Result;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

use rxcheck::models::config::Config;
use rxcheck::models::validation::ValidationResult;
use rxcheck::output;
use rxcheck::{Session, Validator, ValidatorSettings};

#[derive(Debug, Serialize)]
struct Summary {
    lines: usize,
    validated: usize,
    unknown: usize,
    blocked: usize,
}

#[derive(Debug, Serialize)]
struct Report {
    results: Vec<ValidationResult>,
    accepted: Vec<String>,
    summary: Summary,
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(p) if p != Path::new("-") => Ok(std::fs::read_to_string(p)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

pub fn run(file: Option<&Path>, catalog_flag: Option<&Path>, human: bool) -> Result<()> {
    let config = Config::load()?;
    let catalog = super::load_catalog(catalog_flag, &config)?;
    let validator = Validator::with_settings(&catalog, &ValidatorSettings::from(&config));
    let input = read_input(file)?;

    let mut session = Session::new(&validator);
    let results: Vec<ValidationResult> = input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| session.validate_line(l))
        .collect();

    let summary = Summary {
        lines: results.len(),
        validated: results.iter().filter(|r| r.validated).count(),
        unknown: results.iter().filter(|r| !r.validated).count(),
        blocked: results.iter().filter(|r| r.is_blocked()).count(),
    };
    let accepted = session
        .into_accepted()
        .into_iter()
        .map(|r| r.name)
        .collect();

    if human {
        println!("{}", output::human::format_prescription(&results));
        println!(
            "{} line(s): {} validated, {} unknown, {} blocked",
            summary.lines, summary.validated, summary.unknown, summary.blocked
        );
    } else {
        let report = Report {
            results,
            accepted,
            summary,
        };
        output::print_success("prescription", &report)?;
    }
    Ok(())
}
