use colored::Colorize;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use crate::catalog::MedicineCatalog;
use crate::models::medicine::MedicineRecord;
use crate::models::validation::{Severity, ValidationResult, Warning};

fn format_warning(w: &Warning) -> String {
    let tag = match w.severity {
        Severity::Critical => format!("[{}]", w.kind).red().bold().to_string(),
        Severity::Warning => format!("[{}]", w.kind).yellow().to_string(),
    };
    format!("  {} {}", tag, w.message)
}

/// Pretty-print one validation result with its warnings underneath.
pub fn format_result(r: &ValidationResult) -> String {
    let status = if r.is_blocked() {
        "BLOCKED".red().bold()
    } else if r.validated {
        "OK".green().bold()
    } else {
        "UNKNOWN".yellow().bold()
    };
    let strength = r.strength.as_deref().unwrap_or("-");
    let mut out = format!(
        "{} {} {} {} ({}%)",
        status, r.name, strength, r.dosage, r.confidence
    );
    for w in &r.warnings {
        out.push('\n');
        out.push_str(&format_warning(w));
    }
    out
}

/// Table of every line in a prescription, followed by its warnings.
pub fn format_prescription(results: &[ValidationResult]) -> String {
    if results.is_empty() {
        return "No lines to validate.".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Medicine", "Strength", "Dosage", "Confidence", "Status"]);

    for (i, r) in results.iter().enumerate() {
        let status = if r.is_blocked() {
            "blocked"
        } else if r.validated {
            "ok"
        } else {
            "unknown"
        };
        table.add_row(vec![
            (i + 1).to_string(),
            r.name.clone(),
            r.strength.clone().unwrap_or_else(|| "-".to_string()),
            r.dosage.clone(),
            format!("{}%", r.confidence),
            status.to_string(),
        ]);
    }

    let mut out = table.to_string();
    for (i, r) in results.iter().enumerate() {
        for w in &r.warnings {
            out.push_str(&format!("\n#{}{}", i + 1, format_warning(w)));
        }
    }
    out
}

pub fn format_catalog(catalog: &MedicineCatalog) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Strengths", "Form", "Dosage", "Category"]);
    for r in catalog.iter() {
        table.add_row(vec![
            r.id.clone(),
            r.name.clone(),
            r.strengths.join(", "),
            r.form.clone(),
            r.default_dosage.clone(),
            r.category.clone(),
        ]);
    }
    table.to_string()
}

pub fn format_record(r: &MedicineRecord) -> String {
    let interactions = if r.interactions.is_empty() {
        "none".to_string()
    } else {
        r.interactions.join(", ")
    };
    format!(
        "{} ({})\n  strengths:    {}\n  form:         {}\n  dosage:       {}\n  category:     {}\n  interactions: {}",
        r.name.bold(),
        r.id,
        r.strengths.join(", "),
        r.form,
        r.default_dosage,
        r.category,
        interactions
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
