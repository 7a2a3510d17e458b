//! Auto-completion suggestion lists
//!
//! Built from the shared token tables for the embedding editor: keywords
//! and functions for the query languages, keywords and builtins for fish.

use crate::language::Language;

use super::defs;

/// What kind of completion a suggestion is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Keyword,
    Function,
    Builtin,
    Field,
}

impl SuggestionKind {
    pub fn name(&self) -> &'static str {
        match self {
            SuggestionKind::Keyword => "keyword",
            SuggestionKind::Function => "function",
            SuggestionKind::Builtin => "builtin",
            SuggestionKind::Field => "field",
        }
    }
}

/// One completion suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Shown label
    pub label: &'static str,
    /// Text inserted on accept (functions get trailing parentheses)
    pub insert_text: String,
    pub kind: SuggestionKind,
    /// Short description shown next to the label
    pub detail: &'static str,
}

impl Suggestion {
    fn plain(label: &'static str, kind: SuggestionKind, detail: &'static str) -> Self {
        Self {
            label,
            insert_text: label.to_string(),
            kind,
            detail,
        }
    }

    fn call(label: &'static str, detail: &'static str) -> Self {
        Self {
            label,
            insert_text: format!("{label}()"),
            kind: SuggestionKind::Function,
            detail,
        }
    }
}

/// Suggestion list for a language
pub fn completions(lang: Language) -> Vec<Suggestion> {
    let tables = defs::tables(lang);
    match lang {
        Language::Spl => tables
            .keywords
            .iter()
            .copied()
            .map(|k| Suggestion::plain(k, SuggestionKind::Keyword, "Splunk command"))
            .chain(
                tables
                    .functions
                    .iter()
                    .copied()
                    .map(|f| Suggestion::call(f, "Splunk function")),
            )
            .chain(
                tables
                    .common_fields
                    .iter()
                    .copied()
                    .map(|f| Suggestion::plain(f, SuggestionKind::Field, "Common field")),
            )
            .collect(),
        Language::Esql => tables
            .keywords
            .iter()
            .copied()
            .map(|k| Suggestion::plain(k, SuggestionKind::Keyword, "ES|QL command"))
            .chain(
                tables
                    .functions
                    .iter()
                    .copied()
                    .map(|f| Suggestion::call(f, "ES|QL function")),
            )
            .collect(),
        Language::Fish => tables
            .keywords
            .iter()
            .copied()
            .map(|k| Suggestion::plain(k, SuggestionKind::Keyword, "Fish keyword"))
            .chain(
                tables
                    .builtins
                    .iter()
                    .copied()
                    .map(|b| Suggestion::plain(b, SuggestionKind::Builtin, "Fish built-in command")),
            )
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spl_completions_cover_tables() {
        let all = completions(Language::Spl);
        let tables = defs::tables(Language::Spl);
        assert!(all.iter().any(|s| s.label == "stats" && s.kind == SuggestionKind::Keyword));
        assert!(all
            .iter()
            .any(|s| s.label == "avg" && s.insert_text == "avg()"));
        assert!(all.iter().any(|s| s.label == "sourcetype" && s.kind == SuggestionKind::Field));
        let expected =
            tables.keywords.len() + tables.functions.len() + tables.common_fields.len();
        assert_eq!(all.len(), expected);
    }

    #[test]
    fn test_esql_function_insert_text() {
        let all = completions(Language::Esql);
        let avg = all.iter().find(|s| s.label == "AVG").unwrap();
        assert_eq!(avg.insert_text, "AVG()");
        assert_eq!(avg.kind, SuggestionKind::Function);
    }

    #[test]
    fn test_fish_has_no_function_suggestions() {
        let all = completions(Language::Fish);
        assert!(all.iter().all(|s| s.kind != SuggestionKind::Function));
        assert!(all.iter().any(|s| s.label == "set" && s.kind == SuggestionKind::Builtin));
    }
}
