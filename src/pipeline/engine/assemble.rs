use tracing::debug;

use crate::models::BiomarkerRecord;

use super::locale::LocaleProfile;
use super::normalize::normalize_line;
use super::range::RangeGrammar;
use super::threshold::ThresholdGrammar;

/// Runs both grammars over every surviving line and accumulates matches.
///
/// Ordering guarantee: document order; within a line, range-grammar matches
/// before threshold-grammar matches, left to right within each grammar.
/// Append-only — no cross-line state and no deduplication, so a line that
/// satisfies both grammars contributes a record from each.
pub struct RecordExtractor {
    profile: LocaleProfile,
    range: RangeGrammar,
    threshold: ThresholdGrammar,
}

impl RecordExtractor {
    pub fn new(profile: LocaleProfile) -> Self {
        let range = RangeGrammar::new(&profile);
        let threshold = ThresholdGrammar::new(&profile);
        Self { profile, range, threshold }
    }

    /// Extract from an ordered sequence of raw lines.
    pub fn extract_lines<'a, I>(&self, lines: I) -> Vec<BiomarkerRecord>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut records = Vec::new();
        let mut seen = 0usize;
        let mut survived = 0usize;
        for raw in lines {
            seen += 1;
            let Some(line) = normalize_line(raw, &self.profile) else {
                continue;
            };
            survived += 1;
            records.extend(self.range.extract(&line));
            records.extend(self.threshold.extract(&line));
        }
        debug!(
            lines = seen,
            candidates = survived,
            records = records.len(),
            "record extraction complete"
        );
        records
    }

    /// Extract from newline-delimited flattened report text.
    pub fn extract_text(&self, text: &str) -> Vec<BiomarkerRecord> {
        self.extract_lines(text.lines())
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new(LocaleProfile::combined())
    }
}

/// One-shot extraction over flattened report text with the default locales.
pub fn extract_records(text: &str) -> Vec<BiomarkerRecord> {
    RecordExtractor::default().extract_text(text)
}
