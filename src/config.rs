//! Crate-wide constants and defaults.

/// Category tag stamped on every record produced by this engine.
pub const RECORD_CATEGORY: &str = "Biomarkers";

/// Upper bound used for "greater-than" threshold observations.
///
/// A `> limit` reading has no textual upper bound. Downstream consumers
/// expect a purely numeric closed interval, so the range is capped with
/// this large finite sentinel (10^13) instead of `f64::INFINITY`. Keep the
/// value stable: exported records are compared across systems by value.
pub const UNBOUNDED_UPPER: f64 = 10e12;

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "labstract=info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_upper_is_finite() {
        assert!(UNBOUNDED_UPPER.is_finite());
        assert_eq!(UNBOUNDED_UPPER, 1e13);
    }

    #[test]
    fn category_is_biomarkers() {
        assert_eq!(RECORD_CATEGORY, "Biomarkers");
    }
}
