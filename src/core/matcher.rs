//! Fuzzy lookup of a noisy name fragment in the catalog.
//!
//! Dissimilarity is one minus the normalized Levenshtein similarity of the
//! lowercased query and a canonical name: 0 is an exact match, 1 shares
//! nothing. Candidates above the threshold are discarded and the
//! closest survivor wins.

use strsim::normalized_levenshtein;

use crate::catalog::MedicineCatalog;
use crate::models::medicine::{MedicineRecord, name_key};

/// Allow up to 40% divergence from a canonical name.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, PartialEq)]
pub struct NameMatch<'a> {
    pub record: &'a MedicineRecord,
    pub dissimilarity: f64,
    /// `(1 - dissimilarity) * 100`, rounded.
    pub confidence: u8,
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct NameMatcher<'a> {
    catalog: &'a MedicineCatalog,
    threshold: f64,
}

impl<'a> NameMatcher<'a> {
    pub fn new(catalog: &'a MedicineCatalog) -> Self {
        Self::with_threshold(catalog, DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(catalog: &'a MedicineCatalog, threshold: f64) -> Self {
        Self {
            catalog,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn catalog(&self) -> &'a MedicineCatalog {
        self.catalog
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Best catalog entry for `query`, if any lies within the threshold.
    /// Ties go to the entry listed first.
    pub fn find(&self, query: &str) -> Option<NameMatch<'a>> {
        let needle = name_key(query);
        if needle.is_empty() {
            return None;
        }

        let mut best: Option<(&'a MedicineRecord, f64)> = None;
        for record in self.catalog.iter() {
            let d = dissimilarity(&needle, &name_key(&record.name));
            if d > self.threshold {
                continue;
            }
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((record, d));
            }
        }

        match best {
            Some((record, d)) => {
                tracing::debug!(query, matched = %record.name, dissimilarity = d, "name matched");
                Some(NameMatch {
                    record,
                    dissimilarity: d,
                    confidence: confidence(d),
                    query: query.to_string(),
                })
            }
            None => {
                tracing::debug!(query, threshold = self.threshold, "no catalog name within threshold");
                None
            }
        }
    }
}

/// Normalized edit distance in [0, 1].
pub fn dissimilarity(a: &str, b: &str) -> f64 {
    (1.0 - normalized_levenshtein(a, b)).clamp(0.0, 1.0)
}

fn confidence(dissimilarity: f64) -> u8 {
    ((1.0 - dissimilarity) * 100.0).round().clamp(0.0, 100.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
