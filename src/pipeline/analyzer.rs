use tracing::info;

use crate::models::BiomarkerRecord;

use super::engine::{LocaleProfile, RecordExtractor};
use super::extraction::PageTextSource;
use super::standardize::Standardizer;
use super::ExtractError;

/// Full lab-report pipeline: page text source → line normalizer → both
/// grammars → assembled records → optional standardization pass.
///
/// Extraction is pure and offline; only the injected collaborators can
/// fail, and their failures abort the analysis rather than producing an
/// ambiguous partial result.
pub struct ReportAnalyzer {
    source: Box<dyn PageTextSource>,
    extractor: RecordExtractor,
    standardizer: Option<Standardizer>,
}

impl ReportAnalyzer {
    pub fn new(source: Box<dyn PageTextSource>) -> Self {
        Self {
            source,
            extractor: RecordExtractor::default(),
            standardizer: None,
        }
    }

    /// Restrict the grammars to one locale's literals instead of the
    /// default all-locales union.
    pub fn with_locale_profile(mut self, profile: LocaleProfile) -> Self {
        self.extractor = RecordExtractor::new(profile);
        self
    }

    /// Attach the rename pass. Without it, analysis is fully offline.
    pub fn with_standardizer(mut self, standardizer: Standardizer) -> Self {
        self.standardizer = Some(standardizer);
        self
    }

    /// Extract all records in document order.
    pub fn analyze(&self) -> Result<Vec<BiomarkerRecord>, ExtractError> {
        let pages = self.source.extract_pages()?;

        let mut records = Vec::new();
        for page in &pages {
            records.extend(self.extractor.extract_lines(page.text.lines()));
        }

        if let Some(standardizer) = &self.standardizer {
            standardizer.standardize(&mut records)?;
        }

        info!(
            pages = pages.len(),
            records = records.len(),
            standardized = self.standardizer.is_some(),
            "report analysis complete"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UNBOUNDED_UPPER;
    use crate::models::{rows, views, ReferenceRange};
    use crate::pipeline::extraction::MockPageSource;
    use crate::pipeline::standardize::{Language, MockRenameClient, RetryPolicy, Standardizer};

    fn report_pages() -> Vec<String> {
        vec![
            "Laboratory Report\nGlucose 95 mg/dL 70 - 100\nPage 1 of 2".to_string(),
            "Ferritin 300 >250 ng/mL\nCRP <5 mg/L".to_string(),
        ]
    }

    #[test]
    fn analyzes_pages_in_document_order() {
        let analyzer = ReportAnalyzer::new(Box::new(MockPageSource::new(report_pages())));
        let records = analyzer.analyze().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Glucose");
        assert_eq!(records[1].name, "Ferritin");
        assert_eq!(
            records[1].reference_range,
            ReferenceRange { min: 250.0, max: UNBOUNDED_UPPER }
        );
        assert_eq!(records[2].name, "CRP");
    }

    #[test]
    fn source_failure_propagates() {
        let analyzer = ReportAnalyzer::new(Box::new(MockPageSource::failing()));
        let err = analyzer.analyze().unwrap_err();
        assert!(matches!(err, ExtractError::DocumentSource(_)));
    }

    #[test]
    fn standardizer_renames_extracted_records() {
        let standardizer = Standardizer::new(
            Box::new(MockRenameClient::new("Glucose (canonical)")),
            Language::En,
        )
        .with_retry_policy(RetryPolicy {
            max_attempts: 1,
            base_delay: std::time::Duration::ZERO,
            max_delay: std::time::Duration::ZERO,
        });

        let analyzer = ReportAnalyzer::new(Box::new(MockPageSource::new(vec![
            "Glucose 95 mg/dL 70 - 100".to_string(),
        ])))
        .with_standardizer(standardizer);

        let records = analyzer.analyze().unwrap();
        assert_eq!(records[0].name, "Glucose (canonical)");
        assert_eq!(records[0].view().id, "Glucose (canonical)");
    }

    #[test]
    fn works_with_standardizer_entirely_absent() {
        let analyzer = ReportAnalyzer::new(Box::new(MockPageSource::new(vec![
            "Sodium 140,5 135,0-145,0".to_string(),
        ])));
        let records = analyzer.analyze().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, Some(140.5));
    }

    #[test]
    fn row_and_view_projections_agree_field_for_field() {
        let analyzer = ReportAnalyzer::new(Box::new(MockPageSource::new(report_pages())));
        let records = analyzer.analyze().unwrap();

        let rows = rows(&records);
        let views = views(&records);
        assert_eq!(rows.len(), views.len());
        for (row, view) in rows.iter().zip(&views) {
            assert_eq!(row.0, view.name);
            assert_eq!(row.1, view.value);
            assert_eq!(row.2, view.unit);
            assert_eq!(row.3, view.reference_range.min);
            assert_eq!(row.4, view.reference_range.max);
            assert_eq!(row.5, view.category);
        }
    }
}
