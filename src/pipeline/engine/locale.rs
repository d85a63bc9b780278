//! Locale literals consumed by the grammars.
//!
//! Page markers, the word form of the range separator, and the annotation
//! marker introducing a restated value are the only locale-specific pieces
//! of the engine. They live in one table so a new locale is added here
//! without touching parsing logic.

/// Locale-specific literals for one supported report locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleProfile {
    /// Exact prefixes marking page-break noise lines ("Page 3 of 10").
    pub page_marker_tokens: Vec<String>,
    /// Word alternatives to the `-` range separator ("12 à 24").
    pub range_separator_words: Vec<String>,
    /// Marker words introducing a restated/converted value clause.
    pub annotation_marker_words: Vec<String>,
}

impl LocaleProfile {
    fn new(pages: &[&str], separators: &[&str], annotations: &[&str]) -> Self {
        Self {
            page_marker_tokens: pages.iter().map(|s| s.to_string()).collect(),
            range_separator_words: separators.iter().map(|s| s.to_string()).collect(),
            annotation_marker_words: annotations.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn english() -> Self {
        Self::new(&["Page"], &[], &[])
    }

    pub fn spanish() -> Self {
        Self::new(&["Página"], &[], &[])
    }

    pub fn french() -> Self {
        Self::new(&[], &["à"], &["soit"])
    }

    /// Chinese reports carry no latin page markers or separator words;
    /// the symbolic grammar covers them.
    pub fn chinese() -> Self {
        Self::new(&[], &[], &[])
    }

    /// Union of every supported locale.
    ///
    /// Lab reports mix locales freely (a French report paginated by English
    /// software is common), so the engine runs with all literals active by
    /// default rather than requiring the caller to know the report locale.
    pub fn combined() -> Self {
        let mut profile = Self::english();
        for other in [Self::spanish(), Self::french(), Self::chinese()] {
            profile.merge(other);
        }
        profile
    }

    fn merge(&mut self, other: Self) {
        for token in other.page_marker_tokens {
            if !self.page_marker_tokens.contains(&token) {
                self.page_marker_tokens.push(token);
            }
        }
        for word in other.range_separator_words {
            if !self.range_separator_words.contains(&word) {
                self.range_separator_words.push(word);
            }
        }
        for word in other.annotation_marker_words {
            if !self.annotation_marker_words.contains(&word) {
                self.annotation_marker_words.push(word);
            }
        }
    }
}

impl Default for LocaleProfile {
    fn default() -> Self {
        Self::combined()
    }
}
