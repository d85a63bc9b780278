use super::SourceError;

/// Text of one document page, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub page_number: usize,
    pub text: String,
}

/// Document text source abstraction.
///
/// The engine never reads documents itself; whatever turns a PDF, a scan, or
/// a plain file into an ordered sequence of page texts lives behind this
/// trait. Empty pages may be omitted by implementations.
pub trait PageTextSource {
    fn extract_pages(&self) -> Result<Vec<PageText>, SourceError>;
}

/// Mock source for tests — fixed pages or a configurable failure.
pub struct MockPageSource {
    pages: Vec<String>,
    fail: bool,
}

impl MockPageSource {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages, fail: false }
    }

    pub fn failing() -> Self {
        Self { pages: vec![], fail: true }
    }
}

impl PageTextSource for MockPageSource {
    fn extract_pages(&self) -> Result<Vec<PageText>, SourceError> {
        if self.fail {
            return Err(SourceError::Parse("mock source failure".into()));
        }
        Ok(self
            .pages
            .iter()
            .enumerate()
            .map(|(i, text)| PageText { page_number: i + 1, text: text.clone() })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_source_numbers_pages_from_one() {
        let source = MockPageSource::new(vec!["first".into(), "second".into()]);
        let pages = source.extract_pages().unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[1].text, "second");
    }

    #[test]
    fn failing_mock_returns_parse_error() {
        let source = MockPageSource::failing();
        assert!(matches!(
            source.extract_pages(),
            Err(SourceError::Parse(_))
        ));
    }
}
