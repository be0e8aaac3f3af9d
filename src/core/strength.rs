use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static STRENGTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d+\s*(?:mg|ml|mcg|g)").expect("strength pattern"));

/// Return the first strength token (digits plus a unit) in `line`, verbatim.
pub fn extract_strength(line: &str) -> Option<String> {
    STRENGTH.find(line).map(|m| m.as_str().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
