//! Supported snippet languages
//!
//! The three languages are fixed: Splunk SPL, Elasticsearch ES|QL and the
//! fish shell. Everything else about them (token tables, rules, colors)
//! hangs off this tag.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::SnipviewError;

/// Language tag for a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Splunk Search Processing Language
    Spl,
    /// Elasticsearch ES|QL
    Esql,
    /// fish shell scripts
    Fish,
}

/// All supported languages, in display order
pub const ALL_LANGUAGES: [Language; 3] = [Language::Spl, Language::Esql, Language::Fish];

impl Language {
    /// Short identifier, also the CSS-friendly tag
    pub fn id(&self) -> &'static str {
        match self {
            Language::Spl => "spl",
            Language::Esql => "esql",
            Language::Fish => "fish",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Spl => "SPL",
            Language::Esql => "ES|QL",
            Language::Fish => "Fish",
        }
    }

    /// File extensions mapped to this language
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Spl => &["spl", "splunk"],
            Language::Esql => &["es", "esql"],
            Language::Fish => &["fish"],
        }
    }

    /// Whole filenames mapped to this language regardless of extension
    pub fn filenames(&self) -> &'static [&'static str] {
        match self {
            Language::Fish => &["config.fish"],
            _ => &[],
        }
    }

    /// Detect a language from a file path (filename first, then extension)
    pub fn from_path(path: &Path) -> Option<Self> {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            let name = name.to_lowercase();
            for lang in ALL_LANGUAGES {
                if lang.filenames().contains(&name.as_str()) {
                    return Some(lang);
                }
            }
        }
        let ext = path.extension()?.to_str()?.to_lowercase();
        ALL_LANGUAGES
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }
}

impl FromStr for Language {
    type Err = SnipviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spl" | "splunk" => Ok(Language::Spl),
            "esql" | "es|ql" | "es" | "elasticsearch" => Ok(Language::Esql),
            "fish" | "fish-shell" => Ok(Language::Fish),
            _ => Err(SnipviewError::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
