use std::sync::LazyLock;

use regex::Regex;

use crate::config::RECORD_CATEGORY;
use crate::models::{BiomarkerRecord, ReferenceRange};

use super::locale::LocaleProfile;
use super::normalize::NormalizedLine;
use super::{parse_numeric, NAME_CLASS};

/// Two-sided "low–high reference range" grammar:
/// `<name> [H]<value> [unit] <low> (- | separator word) <high>`.
///
/// The `H` is an abnormal-high flag some labs print glued to the value.
/// A line may contain several non-overlapping occurrences (normalization
/// can concatenate clauses); all of them are emitted, left to right.
pub struct RangeGrammar {
    re: Regex,
}

impl RangeGrammar {
    pub fn new(profile: &LocaleProfile) -> Self {
        let separator = separator_alternation(profile);
        let pattern = format!(
            r"(?P<name>{NAME_CLASS})\s+H?(?P<value>[\d.,]+(?:E\d+)?)\s*(?P<unit>[a-zA-Z0-9/%µ.*]*)?\s+(?P<low>[\d.,]+)\s*(?:{separator})\s*(?P<high>[\d.,]+)(?:\s|$)"
        );
        Self {
            re: Regex::new(&pattern).expect("range grammar pattern is valid"),
        }
    }

    /// All range matches on one normalized line, in left-to-right order.
    pub fn extract(&self, line: &NormalizedLine) -> Vec<BiomarkerRecord> {
        let mut records = Vec::new();
        for caps in self.re.captures_iter(line.as_str()) {
            let (Some(value), Some(low), Some(high)) = (
                parse_numeric(&caps["value"]),
                parse_numeric(&caps["low"]),
                parse_numeric(&caps["high"]),
            ) else {
                continue;
            };
            records.push(BiomarkerRecord {
                name: caps["name"].trim().to_string(),
                value: Some(value),
                unit: caps
                    .name("unit")
                    .map(|m| m.as_str())
                    .unwrap_or_default()
                    .to_string(),
                reference_range: ReferenceRange { min: low, max: high },
                category: RECORD_CATEGORY.to_string(),
            });
        }
        records
    }
}

/// `-` plus any locale word separators, escaped for splicing.
fn separator_alternation(profile: &LocaleProfile) -> String {
    let mut parts = vec!["-".to_string()];
    parts.extend(profile.range_separator_words.iter().map(|w| regex::escape(w)));
    parts.join("|")
}

static DEFAULT_RANGE_GRAMMAR: LazyLock<RangeGrammar> =
    LazyLock::new(|| RangeGrammar::new(&LocaleProfile::combined()));

/// Range extraction with the default all-locales grammar.
pub fn extract_ranges(line: &NormalizedLine) -> Vec<BiomarkerRecord> {
    DEFAULT_RANGE_GRAMMAR.extract(line)
}
