//! Splunk SPL rules
//!
//! SPL is case-insensitive, so both paths match keywords and functions in
//! any case. Function names only count as functions when a parenthesis
//! follows; otherwise the keyword and builtin tables decide.

use crate::syntax::defs::{alternation, SPL};
use crate::syntax::display::{LineHighlighter, Rule};
use crate::syntax::lexer::{EditorLexer, LexRule, LexState, WordSets};
use crate::syntax::tokens::TokenType;

/// Symbolic operators recognized by the editor path
const SYMBOL_OPERATORS: &[&str] = &["=", "!=", "<", ">", "<=", ">=", "==", "<>"];

const DSTRING: u8 = 1;
const SSTRING: u8 = 2;

/// Display rules, in precedence order
pub fn display() -> LineHighlighter {
    let keywords = format!(r"(?i:{})\b", alternation(SPL.keywords));
    let functions = format!(r"(?i:{})", alternation(SPL.functions));
    let builtins = format!(r"(?i:{})\b", alternation(SPL.builtins));
    let operators = format!(r"(?i:{})\b", alternation(SPL.operators));

    let rules = [
        // Backtick comments; # lines are handled by the comment-line check
        Rule::new("comment", TokenType::Comment, r"`{3}[\s\S]*?`{3}"),
        Rule::new("string_double", TokenType::String, r#""(?:[^"\\]|\\.)*""#),
        Rule::new("string_single", TokenType::String, r"'(?:[^'\\]|\\.)*'"),
        Rule::new("pipe", TokenType::Pipe, r"\|"),
        Rule::new("keyword", TokenType::Keyword, &keywords),
        // Functions only before a parenthesis
        Rule::with_context("function", TokenType::Function, &functions, r"\s*\("),
        Rule::with_context("call", TokenType::Function, r"[a-zA-Z_]\w*", r"\s*\("),
        Rule::new("builtin", TokenType::Builtin, &builtins),
        Rule::new("word_operator", TokenType::Builtin, &operators),
        Rule::new("number", TokenType::Number, r"\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b"),
        // Field being assigned to
        Rule::with_context("assigned_field", TokenType::Variable, r"[\w.]+", r"\s*="),
        Rule::new("equals", TokenType::Operator, r"="),
    ];

    LineHighlighter::new(rules.into_iter().flatten().collect())
}

/// Editor lexer: root plus quoted-string states
pub fn editor() -> EditorLexer {
    let words = WordSets::new(true, TokenType::Default)
        .add(SPL.keywords, TokenType::Keyword)
        .add(SPL.operators, TokenType::Operator)
        .add(SPL.comparison_operators, TokenType::Operator)
        .add(SPL.functions, TokenType::Function)
        .add(SPL.builtins, TokenType::Builtin)
        .add(SPL.common_fields, TokenType::Variable)
        .add(SPL.time_modifiers, TokenType::Builtin);

    let symbols = WordSets::new(false, TokenType::Punctuation)
        .add(SYMBOL_OPERATORS, TokenType::Operator);

    let root = LexState::new(
        "root",
        TokenType::Default,
        [
            LexRule::token(r"\|", TokenType::Pipe),
            LexRule::token(r"`{3}.*", TokenType::Comment),
            // host::source style field references
            LexRule::token(
                r"[a-zA-Z_][a-zA-Z0-9_]*::[a-zA-Z_][a-zA-Z0-9_]*",
                TokenType::Variable,
            ),
            LexRule::classify(r"[a-zA-Z_]\w*", words),
            LexRule::token_push(r#"""#, TokenType::String, DSTRING),
            LexRule::token_push(r"'", TokenType::String, SSTRING),
            LexRule::token(r"\*", TokenType::Variable),
            LexRule::token(r"\d+(?:\.\d+)?(?:[eE][+-]?\d+)?", TokenType::Number),
            LexRule::classify(r"[=><!~?:&|+\-*/^%]+", symbols),
            LexRule::token(r"[\[\]()]", TokenType::Punctuation),
            LexRule::token(r"#.*", TokenType::Comment),
            LexRule::token(r"[ \t]+", TokenType::Default),
        ]
        .into_iter()
        .flatten()
        .collect(),
    );

    EditorLexer::new(vec![root, double_quoted(), single_quoted()])
}

fn double_quoted() -> LexState {
    LexState::new(
        "string_double",
        TokenType::String,
        [
            LexRule::token(r#"[^\\"]+"#, TokenType::String),
            LexRule::token(r"\\.", TokenType::String),
            LexRule::token_pop(r#"""#, TokenType::String),
        ]
        .into_iter()
        .flatten()
        .collect(),
    )
}

fn single_quoted() -> LexState {
    LexState::new(
        "string_single",
        TokenType::String,
        [
            LexRule::token(r"[^\\']+", TokenType::String),
            LexRule::token(r"\\.", TokenType::String),
            LexRule::token_pop(r"'", TokenType::String),
        ]
        .into_iter()
        .flatten()
        .collect(),
    )
}
