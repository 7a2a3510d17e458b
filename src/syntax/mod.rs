//! Syntax highlighting
//!
//! Two tokenizer paths share one set of token tables:
//! - [`display`]: a per-line regex highlighter for read-only rendering
//! - [`lexer`]: a stateful lexer for the rich editing path
//!
//! Per-language rules live in [`builtin`]; [`registry`] wires them up.

pub mod builtin;
pub mod completion;
pub mod defs;
pub mod display;
pub mod lexer;
pub mod registry;
pub mod tokens;

pub use builtin::LanguageSupport;
pub use completion::{completions, Suggestion, SuggestionKind};
pub use display::LineHighlighter;
pub use lexer::{EditorLexer, LineState};
pub use registry::Registry;
pub use tokens::{Token, TokenType};
