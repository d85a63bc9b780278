use std::path::PathBuf;

use super::types::{PageText, PageTextSource};
use super::SourceError;

/// Page separator conventionally emitted by upstream flatteners (form feed).
const PAGE_BREAK: char = '\u{0C}';

/// Source over already-materialized report text.
///
/// Splits on form-feed page breaks when present; otherwise the whole text is
/// one page. Empty pages are skipped, matching PDF extractors that drop
/// blank pages instead of emitting them.
pub struct PlainTextSource {
    text: String,
}

impl PlainTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl PageTextSource for PlainTextSource {
    fn extract_pages(&self) -> Result<Vec<PageText>, SourceError> {
        let pages = self
            .text
            .split(PAGE_BREAK)
            .filter(|page| !page.trim().is_empty())
            .enumerate()
            .map(|(i, text)| PageText { page_number: i + 1, text: text.to_string() })
            .collect();
        Ok(pages)
    }
}

/// Source reading flattened report text from a file on disk.
pub struct TextFileSource {
    path: PathBuf,
}

impl TextFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageTextSource for TextFileSource {
    fn extract_pages(&self) -> Result<Vec<PageText>, SourceError> {
        let text = std::fs::read_to_string(&self.path)?;
        PlainTextSource::new(text).extract_pages()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn whole_text_is_one_page_without_breaks() {
        let source = PlainTextSource::new("Glucose 95 mg/dL 70 - 100\nCRP <5 mg/L");
        let pages = source.extract_pages().unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].text.contains("Glucose"));
    }

    #[test]
    fn form_feed_splits_pages_and_blank_pages_dropped() {
        let source = PlainTextSource::new("first page\u{0C}\u{0C}third page");
        let pages = source.extract_pages().unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].text, "first page");
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[1].text, "third page");
    }

    #[test]
    fn file_source_reads_pages() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Sodium 140 mmol/L 135 - 145").unwrap();

        let source = TextFileSource::new(file.path());
        let pages = source.extract_pages().unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].text.contains("Sodium"));
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let source = TextFileSource::new("/nonexistent/report.txt");
        assert!(matches!(source.extract_pages(), Err(SourceError::Io(_))));
    }
}
