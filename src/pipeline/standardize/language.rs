use serde::{Deserialize, Serialize};

/// Target language for the standardization pass.
///
/// This selector only parameterizes the rename collaborator; it never
/// affects extraction itself. `Ch` is the historical code used upstream
/// for Chinese, kept for compatibility with stored configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Ch,
    Fr,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "ch" => Some(Self::Ch),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Ch => "ch",
            Self::Fr => "fr",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Ch => "Chinese",
            Self::Fr => "French",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.full_name())
    }
}
