//! Built-in language rule sets
//!
//! One module per supported language, each building its display rules and
//! editor lexer from the shared tables in [`super::defs`].

mod esql;
mod fish;
mod spl;

use crate::language::Language;

use super::display::LineHighlighter;
use super::lexer::EditorLexer;

/// Both tokenizer paths for one language
pub struct LanguageSupport {
    pub language: Language,
    /// Read-only display path
    pub display: LineHighlighter,
    /// Rich editing path
    pub editor: EditorLexer,
}

/// Build support for every language
pub fn all_supports() -> Vec<LanguageSupport> {
    vec![
        LanguageSupport {
            language: Language::Spl,
            display: spl::display(),
            editor: spl::editor(),
        },
        LanguageSupport {
            language: Language::Esql,
            display: esql::display(),
            editor: esql::editor(),
        },
        LanguageSupport {
            language: Language::Fish,
            display: fish::display(),
            editor: fish::editor(),
        },
    ]
}
