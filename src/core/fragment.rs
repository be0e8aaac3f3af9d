//! Heuristic name-fragment tokenizer.
//!
//! Pulls the part of a prescription line that names the medicine, dropping
//! strength tokens, schedules and common schedule/form words. Everything that
//! depends on how the name is cut out of a line goes through [`name_fragment`].

use crate::core::dosage::SCHEDULE;
use crate::core::strength::STRENGTH;

/// Words that describe how a medicine is taken rather than what it is.
const NOISE_WORDS: &[&str] = &[
    "once", "twice", "thrice", "daily", "day", "a", "per", "every", "at", "night", "morning",
    "evening", "after", "before", "food", "meal", "meals", "take", "tab", "tabs", "tablet",
    "tablets", "cap", "caps", "capsule", "capsules", "syrup", "x", "mg", "ml", "mcg", "g",
];

fn is_noise(word: &str) -> bool {
    let w = word.to_lowercase();
    NOISE_WORDS.contains(&w.as_str())
}

fn carries_digit(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
}

fn clean(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Return the medicine-name portion of `line`, or an empty string.
///
/// Strength and schedule tokens are cut out first, so a name glued to its
/// strength (`"Paracetamol500mg"`) survives. Then takes the leading run of
/// words before the first word that carries a digit or is a schedule word.
/// When the line starts with such a word (e.g. `"Tab. Aspirin"`), every
/// remaining name-like word is kept.
pub fn name_fragment(line: &str) -> String {
    let without_schedule = SCHEDULE.replace_all(line, " ");
    let stripped = STRENGTH.replace_all(&without_schedule, " ");

    let words: Vec<&str> = stripped
        .split_whitespace()
        .map(clean)
        .filter(|w| !w.is_empty())
        .collect();

    let leading: Vec<&str> = words
        .iter()
        .copied()
        .take_while(|w| !carries_digit(w) && !is_noise(w))
        .collect();

    if !leading.is_empty() {
        return leading.join(" ");
    }

    words
        .into_iter()
        .filter(|w| !carries_digit(w) && !is_noise(w))
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_before_strength() {
        assert_eq!(name_fragment("Paracetamol 500mg 1-0-1"), "Paracetamol");
        assert_eq!(name_fragment("Xanadolin 10mg"), "Xanadolin");
    }

    #[test]
    fn spaced_strength() {
        assert_eq!(name_fragment("Amoxicillin 250 mg"), "Amoxicillin");
    }

    #[test]
    fn schedule_words_end_the_name() {
        assert_eq!(name_fragment("Ibuprofen twice daily"), "Ibuprofen");
        assert_eq!(name_fragment("Cetirizine tablet at night"), "Cetirizine");
    }

    #[test]
    fn multi_word_names_kept() {
        assert_eq!(name_fragment("Vitamin C 500mg"), "Vitamin C");
    }

    #[test]
    fn strength_first_keeps_later_name() {
        assert_eq!(name_fragment("500mg Paracetamol 1-0-1"), "Paracetamol");
        assert_eq!(name_fragment("Tab. Aspirin 75mg"), "Aspirin");
        assert_eq!(name_fragment("500 mg Paracetamol"), "Paracetamol");
    }

    #[test]
    fn punctuation_is_trimmed() {
        assert_eq!(name_fragment("  Omeprazole, 20mg"), "Omeprazole");
    }

    #[test]
    fn strength_glued_to_name() {
        assert_eq!(name_fragment("Paracetamol500mg 1-0-1"), "Paracetamol");
        assert_eq!(name_fragment("Ibuprofen400mg twice"), "Ibuprofen");
        assert_eq!(name_fragment("Paracetamol-500mg"), "Paracetamol");
        assert_eq!(name_fragment("Salbutamol100MCG"), "Salbutamol");
    }

    #[test]
    fn schedule_glued_to_name() {
        assert_eq!(name_fragment("Cetirizine,0-0-1"), "Cetirizine");
        assert_eq!(name_fragment("Aspirin75mg/0-1-0"), "Aspirin");
    }

    #[test]
    fn punctuation_only() {
        assert_eq!(name_fragment("... -- ,"), "");
        assert_eq!(name_fragment("-"), "");
    }

    #[test]
    fn nothing_name_like() {
        assert_eq!(name_fragment("500mg 1-0-1"), "");
        assert_eq!(name_fragment(""), "");
        assert_eq!(name_fragment("   "), "");
    }
}
