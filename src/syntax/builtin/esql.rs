//! Elasticsearch ES|QL rules
//!
//! Commands and functions are upper-case and matched case-sensitively.
//! The display path also understands size (10kb) and duration (5m)
//! literals; the editor path adds block comments and backtick-quoted
//! field names.

use crate::syntax::defs::{alternation, ESQL};
use crate::syntax::display::{LineHighlighter, Rule};
use crate::syntax::lexer::{EditorLexer, LexRule, LexState, WordSets};
use crate::syntax::tokens::TokenType;

/// Symbolic operators recognized by the editor path
const SYMBOL_OPERATORS: &[&str] = &["==", "!=", "<", ">", "<=", ">=", "=~", "!~"];

const BLOCK_COMMENT: u8 = 1;
const DSTRING: u8 = 2;
const SSTRING: u8 = 3;
const BACKTICK: u8 = 4;

/// Display rules, in precedence order
pub fn display() -> LineHighlighter {
    let keywords = format!(r"(?:{})\b", alternation(ESQL.keywords));
    let constants = format!(r"(?:{})\b", alternation(ESQL.constants));
    let operators = format!(r"(?:{})\b", alternation(ESQL.operators));

    let rules = [
        Rule::new("block_comment", TokenType::Comment, r"/\*[\s\S]*?\*/"),
        Rule::new("line_comment", TokenType::Comment, r"//.*"),
        Rule::new("hash_comment", TokenType::Comment, r"#.*"),
        // Triple-quoted strings before plain ones
        Rule::new("string_triple", TokenType::String, r#""{3}[\s\S]*?"{3}"#),
        Rule::new("string_double", TokenType::String, r#""(?:[^"\\]|\\.)*""#),
        Rule::new("string_single", TokenType::String, r"'(?:[^'\\]|\\.)*'"),
        Rule::new("pipe", TokenType::Pipe, r"\|"),
        Rule::new("keyword", TokenType::Keyword, &keywords),
        Rule::with_context("call", TokenType::Function, r"[A-Z_][A-Z0-9_]*", r"\s*\("),
        Rule::new("constant", TokenType::Constant, &constants),
        Rule::new("word_operator", TokenType::Operator, &operators),
        Rule::new("size", TokenType::Number, r"\d+[kmgtKMGT]b?\b"),
        Rule::new("duration", TokenType::Number, r"\d+[smhd]\b"),
        Rule::new("hex", TokenType::Number, r"0x[0-9a-fA-F]+\b"),
        Rule::new("number", TokenType::Number, r"\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b"),
        Rule::new(
            "symbol_operator",
            TokenType::Operator,
            r"!=|==|>=|<=|<>|=~|!~|&&|\|\||[+*/%=-]",
        ),
    ];

    LineHighlighter::new(rules.into_iter().flatten().collect())
}

/// Editor lexer: root plus block comment, string and backtick states
pub fn editor() -> EditorLexer {
    let words = WordSets::new(false, TokenType::Variable)
        .add(ESQL.keywords, TokenType::Keyword)
        .add(ESQL.types, TokenType::Type)
        .add(ESQL.operators, TokenType::Operator)
        .add(ESQL.functions, TokenType::Function)
        .add(ESQL.constants, TokenType::Constant);

    let symbols = WordSets::new(false, TokenType::Punctuation)
        .add(SYMBOL_OPERATORS, TokenType::Operator);

    let root = LexState::new(
        "root",
        TokenType::Default,
        [
            LexRule::token(r"#.*", TokenType::Comment),
            LexRule::token(r"//.*", TokenType::Comment),
            LexRule::token_push(r"/\*", TokenType::Comment, BLOCK_COMMENT),
            LexRule::token(r"\|", TokenType::Pipe),
            // Identifiers may be dotted field paths
            LexRule::classify(r"[a-zA-Z_][\w.]*", words),
            LexRule::token_push(r#"""#, TokenType::String, DSTRING),
            LexRule::token_push(r"'", TokenType::String, SSTRING),
            LexRule::token_push(r"`", TokenType::Variable, BACKTICK),
            LexRule::token(r"\d+(?:\.\d+)?(?:[eE][+-]?\d+)?", TokenType::Number),
            LexRule::classify(r"[=><!~?:&|+\-*/^%]+", symbols),
            LexRule::token(r"[\[\]()]", TokenType::Punctuation),
            LexRule::token(r"[{}]", TokenType::Punctuation),
            LexRule::token(r",", TokenType::Punctuation),
            LexRule::token(r"[ \t]+", TokenType::Default),
        ]
        .into_iter()
        .flatten()
        .collect(),
    );

    let block_comment = LexState::new(
        "block_comment",
        TokenType::Comment,
        [
            LexRule::token(r"[^/*]+", TokenType::Comment),
            LexRule::token_pop(r"\*/", TokenType::Comment),
            LexRule::token(r"[/*]", TokenType::Comment),
        ]
        .into_iter()
        .flatten()
        .collect(),
    );

    let double_quoted = LexState::new(
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
    );

    let single_quoted = LexState::new(
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
    );

    let backtick = LexState::new(
        "backtick_identifier",
        TokenType::Variable,
        [
            LexRule::token(r"[^`]+", TokenType::Variable),
            LexRule::token_pop(r"`", TokenType::Variable),
        ]
        .into_iter()
        .flatten()
        .collect(),
    );

    EditorLexer::new(vec![
        root,
        block_comment,
        double_quoted,
        single_quoted,
        backtick,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::lexer::LineState;
    use crate::syntax::tokens::{reassemble, Token};

    #[test]
    fn test_display_query() {
        let hl = display();
        let line = "FROM logs | WHERE status == 404 | STATS COUNT(*) BY host";
        let tokens = hl.highlight_line(line);
        assert_eq!(reassemble(&tokens), line);
        assert_eq!(tokens[0], Token::new(TokenType::Keyword, "FROM"));
        assert!(tokens.contains(&Token::new(TokenType::Keyword, "WHERE")));
        assert!(tokens.contains(&Token::new(TokenType::Function, "COUNT")));
        assert!(tokens.contains(&Token::new(TokenType::Operator, "==")));
        assert!(tokens.contains(&Token::new(TokenType::Number, "404")));
    }

    #[test]
    fn test_display_case_sensitive_keywords() {
        let hl = display();
        let tokens = hl.highlight_line("from logs");
        // Lower-case commands are not keywords in ES|QL
        assert_eq!(tokens[0].category, TokenType::Default);
    }

    #[test]
    fn test_display_constants_and_size_literals() {
        let hl = display();
        let tokens = hl.highlight_line("WHERE active == true AND size > 10kb");
        assert!(tokens.contains(&Token::new(TokenType::Constant, "true")));
        assert!(tokens.contains(&Token::new(TokenType::Number, "10kb")));
        assert!(tokens.contains(&Token::new(TokenType::Operator, "AND")));
    }

    #[test]
    fn test_display_duration_literal() {
        let hl = display();
        let tokens = hl.highlight_line("DATE_TRUNC(1h, ts)");
        assert_eq!(tokens[0], Token::new(TokenType::Function, "DATE_TRUNC"));
        assert!(tokens.contains(&Token::new(TokenType::Number, "1h")));
    }

    #[test]
    fn test_display_triple_string_single_token() {
        let hl = display();
        let line = r#"ROW s = """quoted "inside" text""""#;
        let tokens = hl.highlight_line(line);
        assert_eq!(reassemble(&tokens), line);
        assert!(tokens
            .iter()
            .any(|t| t.category == TokenType::String
                && t.text == r#""""quoted "inside" text""""#));
    }

    #[test]
    fn test_display_line_comments() {
        let hl = display();
        let tokens = hl.highlight_line("FROM logs // trailing note");
        assert_eq!(
            tokens.last().unwrap(),
            &Token::new(TokenType::Comment, "// trailing note")
        );
    }

    #[test]
    fn test_editor_block_comment_spans_lines() {
        let lexer = editor();
        let (_, state) = lexer.tokenize_line("FROM logs /* start", LineState::default());
        assert!(!state.is_root());
        let (tokens, state) = lexer.tokenize_line("middle", state);
        assert_eq!(tokens, vec![Token::new(TokenType::Comment, "middle")]);
        let (tokens, state) = lexer.tokenize_line("end */ LIMIT 10", state);
        assert!(state.is_root());
        assert!(tokens.contains(&Token::new(TokenType::Keyword, "LIMIT")));
    }

    #[test]
    fn test_editor_types_and_identifiers() {
        let lexer = editor();
        let (tokens, _) =
            lexer.tokenize_line("EVAL x = TO_LONG(geo.dest)", LineState::default());
        assert_eq!(tokens[0], Token::new(TokenType::Keyword, "EVAL"));
        assert!(tokens.contains(&Token::new(TokenType::Function, "TO_LONG")));
        assert!(tokens.contains(&Token::new(TokenType::Variable, "geo.dest")));

        let (tokens, _) = lexer.tokenize_line("integer keyword", LineState::default());
        assert_eq!(tokens[0], Token::new(TokenType::Type, "integer"));
        assert!(tokens.contains(&Token::new(TokenType::Type, "keyword")));
    }

    #[test]
    fn test_editor_backtick_identifier() {
        let lexer = editor();
        let (tokens, state) =
            lexer.tokenize_line("KEEP `weird field` ", LineState::default());
        assert!(state.is_root());
        assert!(tokens.contains(&Token::new(TokenType::Variable, "`weird field`")));
    }
}
