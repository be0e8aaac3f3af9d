use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static SCHEDULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[01]-[01]-[01]").expect("schedule pattern"));

static SCHEDULE_EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[01]-[01]-[01]$").expect("schedule pattern"));

/// Keyword fallbacks, checked in order. Multiplicity words come before
/// "daily" so "twice daily" reads as two doses.
const KEYWORDS: &[(&str, &str)] = &[
    ("thrice", "1-1-1"),
    ("twice", "1-0-1"),
    ("daily", "0-0-1"),
];

/// Extract a morning-afternoon-evening schedule such as `1-0-1`.
///
/// An explicit pattern always wins and is returned verbatim; otherwise the
/// first matching keyword decides. Returns `None` when neither applies.
pub fn extract_dosage(line: &str) -> Option<String> {
    if let Some(m) = SCHEDULE.find(line) {
        return Some(m.as_str().to_string());
    }

    let lower = line.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(word, _)| lower.contains(word))
        .map(|(_, schedule)| schedule.to_string())
}

/// Whether `s` is exactly a `D-D-D` schedule.
pub fn is_schedule(s: &str) -> bool {
    SCHEDULE_EXACT.is_match(s)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_pattern() {
        assert_eq!(extract_dosage("1-0-1").as_deref(), Some("1-0-1"));
        assert_eq!(
            extract_dosage("Paracetamol 500mg 0-1-0").as_deref(),
            Some("0-1-0")
        );
    }

    #[test]
    fn once_daily() {
        assert_eq!(extract_dosage("take once daily").as_deref(), Some("0-0-1"));
    }

    #[test]
    fn twice_a_day() {
        assert_eq!(extract_dosage("twice a day").as_deref(), Some("1-0-1"));
    }

    #[test]
    fn twice_daily_reads_as_twice() {
        assert_eq!(
            extract_dosage("Ibuprofen 400mg twice daily").as_deref(),
            Some("1-0-1")
        );
    }

    #[test]
    fn thrice() {
        assert_eq!(extract_dosage("THRICE after food").as_deref(), Some("1-1-1"));
    }

    #[test]
    fn no_schedule() {
        assert_eq!(extract_dosage("no schedule info"), None);
        assert_eq!(extract_dosage(""), None);
    }

    #[test]
    fn explicit_pattern_beats_keyword() {
        assert_eq!(
            extract_dosage("Cetirizine 10mg daily 1-0-0").as_deref(),
            Some("1-0-0")
        );
    }

    #[test]
    fn first_explicit_pattern_wins() {
        assert_eq!(extract_dosage("1-1-0 then 0-0-1").as_deref(), Some("1-1-0"));
    }

    #[test]
    fn digits_outside_zero_one_do_not_match() {
        assert_eq!(extract_dosage("2-0-2"), None);
    }

    #[test]
    fn is_schedule_requires_whole_string() {
        assert!(is_schedule("0-1-0"));
        assert!(!is_schedule("0-1-0 "));
        assert!(!is_schedule("1-2-1"));
    }
}
