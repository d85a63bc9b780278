use std::sync::LazyLock;

use regex::Regex;

use crate::config::{RECORD_CATEGORY, UNBOUNDED_UPPER};
use crate::models::{BiomarkerRecord, ReferenceRange};

use super::locale::LocaleProfile;
use super::normalize::NormalizedLine;
use super::{parse_numeric, NAME_CLASS};

/// One-sided threshold grammar:
/// `<name> [comparator][value [unit]] (< | >) [separator word] <limit>`.
///
/// Runs on every normalized line in addition to the range grammar. The
/// value/unit block is optional as a whole: a bare `CRP <5` line still
/// matches, producing a record whose `value` is absent — the line stated
/// only a limit, not a point measurement. The unit sub-grammar tolerates a
/// compound "per body-surface-area" token (`... m2`).
pub struct ThresholdGrammar {
    re: Regex,
}

impl ThresholdGrammar {
    pub fn new(profile: &LocaleProfile) -> Self {
        let unit = r"[a-zA-Z0-9/%µ.,^]*";
        let words = word_separator_group(profile);
        let pattern = format!(
            r"(?P<name>{NAME_CLASS})(?:\s*[<>]?\s*(?P<value>[\d.,]+(?:E\d+)?)\s*(?P<unit>{unit}\s*m2|{unit})?)?\s*(?P<cmp>[<>])\s*{words}(?P<limit>[\d.,]+)"
        );
        Self {
            re: Regex::new(&pattern).expect("threshold grammar pattern is valid"),
        }
    }

    /// All threshold matches on one normalized line, in left-to-right order.
    pub fn extract(&self, line: &NormalizedLine) -> Vec<BiomarkerRecord> {
        let mut records = Vec::new();
        for caps in self.re.captures_iter(line.as_str()) {
            let Some(limit) = parse_numeric(&caps["limit"]) else {
                continue;
            };
            let value = match caps.name("value") {
                // A bad point-value capture invalidates the whole match, not
                // just the value field.
                Some(m) => match parse_numeric(m.as_str()) {
                    Some(v) => Some(v),
                    None => continue,
                },
                None => None,
            };
            let reference_range = match &caps["cmp"] {
                "<" => ReferenceRange { min: 0.0, max: limit },
                _ => ReferenceRange { min: limit, max: UNBOUNDED_UPPER },
            };
            records.push(BiomarkerRecord {
                name: caps["name"].trim().to_string(),
                value,
                unit: caps
                    .name("unit")
                    .map(|m| m.as_str())
                    .unwrap_or_default()
                    .to_string(),
                reference_range,
                category: RECORD_CATEGORY.to_string(),
            });
        }
        records
    }
}

/// Optional locale word between the comparator and the limit ("< à 5").
fn word_separator_group(profile: &LocaleProfile) -> String {
    if profile.range_separator_words.is_empty() {
        return String::new();
    }
    let words: Vec<String> = profile
        .range_separator_words
        .iter()
        .map(|w| regex::escape(w))
        .collect();
    format!(r"(?:\s*(?:{})\s*)?", words.join("|"))
}

static DEFAULT_THRESHOLD_GRAMMAR: LazyLock<ThresholdGrammar> =
    LazyLock::new(|| ThresholdGrammar::new(&LocaleProfile::combined()));

/// Threshold extraction with the default all-locales grammar.
pub fn extract_thresholds(line: &NormalizedLine) -> Vec<BiomarkerRecord> {
    DEFAULT_THRESHOLD_GRAMMAR.extract(line)
}
