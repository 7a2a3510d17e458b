//! Language support registry
//!
//! Builds every language's tokenizers once at startup and resolves which
//! language applies to a given file. Tokenization itself is stateless per
//! render; the registry holds only immutable definitions.

use std::collections::HashMap;
use std::path::Path;

use crate::language::Language;

use super::builtin::{self, LanguageSupport};

/// Holds the compiled support for all languages
pub struct Registry {
    supports: HashMap<Language, LanguageSupport>,
}

impl Registry {
    /// Create a registry with all built-in languages
    pub fn new() -> Self {
        let supports = builtin::all_supports()
            .into_iter()
            .map(|s| (s.language, s))
            .collect();
        Self { supports }
    }

    /// Detect language from a file path
    pub fn detect(&self, path: &Path) -> Option<Language> {
        Language::from_path(path)
    }

    /// Get the support bundle for a language
    pub fn support(&self, lang: Language) -> &LanguageSupport {
        // Every Language variant is registered in new()
        &self.supports[&lang]
    }

    /// List supported languages, in display order
    pub fn list(&self) -> Vec<Language> {
        crate::language::ALL_LANGUAGES.to_vec()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_languages_registered() {
        let registry = Registry::new();
        for lang in registry.list() {
            assert_eq!(registry.support(lang).language, lang);
        }
    }

    #[test]
    fn test_detect() {
        let registry = Registry::new();
        assert_eq!(registry.detect(Path::new("q.spl")), Some(Language::Spl));
        assert_eq!(registry.detect(Path::new("q.esql")), Some(Language::Esql));
        assert_eq!(registry.detect(Path::new("config.fish")), Some(Language::Fish));
        assert_eq!(registry.detect(Path::new("q.sql")), None);
    }
}
