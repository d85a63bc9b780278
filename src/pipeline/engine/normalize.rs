use super::locale::LocaleProfile;

/// A report line after cleanup, ready for the grammars.
///
/// Invariants: non-empty, trimmed, contains at least one decimal digit,
/// no bracket/asterisk/parenthesis characters, `.` as the sole decimal
/// separator. Lines that cannot satisfy these are dropped before any
/// extractor sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLine(String);

impl NormalizedLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Clean one raw report line, or reject it.
///
/// Rejection, in order: empty after trim; page-marker prefix; no decimal
/// digit once cleanup is done. Cleanup: fold the locale annotation clause,
/// unify commas to periods, strip bracket/asterisk/parenthesis noise.
/// Pure function; rejected lines are expected and not an error.
pub fn normalize_line(raw: &str, profile: &LocaleProfile) -> Option<NormalizedLine> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if profile
        .page_marker_tokens
        .iter()
        .any(|token| trimmed.starts_with(token.as_str()))
    {
        return None;
    }

    let folded = fold_annotation_clause(trimmed, profile);

    let cleaned: String = folded
        .chars()
        .map(|c| if c == ',' { '.' } else { c })
        .filter(|c| !matches!(c, '[' | ']' | '*' | '(' | ')'))
        .collect();
    let cleaned = cleaned.trim();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(NormalizedLine(cleaned.to_string()))
}

/// Drop the redundant human-readable restatement a lab writes after an
/// annotation marker ("1.2 g/L soit 120 mg/dL" style). The segment before
/// the marker loses its digit/percent noise, the first segment after the
/// marker is kept verbatim, and any later restatements are discarded.
fn fold_annotation_clause(line: &str, profile: &LocaleProfile) -> String {
    for marker in &profile.annotation_marker_words {
        if !line.contains(marker.as_str()) {
            continue;
        }
        let mut segments = line.split(marker.as_str());
        let before = segments.next().unwrap_or_default();
        let Some(after) = segments.next() else {
            continue;
        };
        let mut folded: String = before
            .chars()
            .filter(|c| !c.is_ascii_digit() && *c != ',' && *c != '%')
            .collect();
        folded.push_str(after);
        return folded;
    }
    line.to_string()
}
