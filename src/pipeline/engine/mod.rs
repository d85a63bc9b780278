//! The extraction engine: a line normalizer feeding two competing grammars,
//! plus the assembler that merges their matches in encounter order.
//!
//! The whole engine is a synchronous, side-effect-free transform — text in,
//! records out. Lines that fail normalization or match neither grammar are
//! skipped silently; that is expected behavior, not an error.

pub mod assemble;
pub mod locale;
pub mod normalize;
pub mod range;
pub mod threshold;

pub use assemble::*;
pub use locale::*;
pub use normalize::*;
pub use range::*;
pub use threshold::*;

/// Test-name character class shared by both grammars: accented Latin
/// letters, digits, parentheses, slash, hyphen, space, asterisk, period.
/// Always used with a lazy quantifier so the name never swallows the
/// numeric fields that follow it.
pub(crate) const NAME_CLASS: &str = r"[A-Za-z0-9ÁÉÍÓÚÜáéíóúüñ()/\-\s*.]+?";

/// Parse a numeric capture, stripping internal spaces first.
///
/// The grammars only capture digit/period/comma/exponent characters, so a
/// failure here means a pathological capture like `1.2.3`. Such a match is
/// skipped — never the whole line or document.
pub(crate) fn parse_numeric(raw: &str) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(capture = raw, "unparseable numeric capture, skipping match");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_numeric;

    #[test]
    fn parses_plain_and_exponent_forms() {
        assert_eq!(parse_numeric("95"), Some(95.0));
        assert_eq!(parse_numeric("140.5"), Some(140.5));
        assert_eq!(parse_numeric("2.5E3"), Some(2500.0));
    }

    #[test]
    fn strips_internal_spaces() {
        assert_eq!(parse_numeric("1 234.5"), Some(1234.5));
    }

    #[test]
    fn pathological_capture_is_rejected() {
        assert_eq!(parse_numeric("1.2.3"), None);
        assert_eq!(parse_numeric("..."), None);
    }
}
