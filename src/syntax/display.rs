//! Regex-based line highlighter
//!
//! The lightweight tokenizer behind read-only snippet display. Each line is
//! scanned left to right against an ordered rule list; the first rule whose
//! match starts at the current position wins and its text is consumed.
//! Unmatched characters degrade to plain text one at a time. Rule order is
//! the precedence encoding, so per-language builders must list rules the
//! way the language needs them tried.
//!
//! This path is single-pass and line-local: constructs spanning lines are
//! the editor tokenizer's job (see [`super::lexer`]).

use regex::Regex;

use super::tokens::{Token, TokenType};

/// A single ordered highlighting rule
///
/// The pattern is compiled anchored; an optional trailing context pattern
/// must also match but is not consumed (function-call detection).
pub struct Rule {
    /// Name for debugging
    #[allow(dead_code)]
    pub name: &'static str,
    /// Anchored pattern; group 1 is the consumed head
    pattern: Regex,
    /// Category assigned to matches
    pub category: TokenType,
}

impl Rule {
    /// Create a rule that consumes its whole match
    pub fn new(name: &'static str, category: TokenType, pattern: &str) -> Option<Self> {
        Self::with_context(name, category, pattern, "")
    }

    /// Create a rule whose match must be followed by `trailing`, which is
    /// left unconsumed
    pub fn with_context(
        name: &'static str,
        category: TokenType,
        head: &str,
        trailing: &str,
    ) -> Option<Self> {
        let pattern = Regex::new(&format!("^({head}){trailing}")).ok()?;
        Some(Self {
            name,
            pattern,
            category,
        })
    }

    /// Length of the consumed head if this rule matches at the start of
    /// `text`
    fn match_len(&self, text: &str) -> Option<usize> {
        let caps = self.pattern.captures(text)?;
        let head = caps.get(1)?;
        (!head.is_empty()).then(|| head.end())
    }
}

/// Per-language display highlighter: a comment-line check plus an ordered
/// rule list
pub struct LineHighlighter {
    comment_line: Regex,
    rules: Vec<Rule>,
}

impl LineHighlighter {
    /// Build a highlighter from an ordered rule list
    ///
    /// Every language treats a line whose first non-blank character is `#`
    /// as wholly commented.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            comment_line: Regex::new(r"^\s*#").expect("comment-line pattern"),
            rules,
        }
    }

    /// Tokenize one line of text
    ///
    /// Total: concatenating the returned token texts reproduces `line`.
    pub fn highlight_line(&self, line: &str) -> Vec<Token> {
        if self.comment_line.is_match(line) {
            return vec![Token::new(TokenType::Comment, line)];
        }

        let mut tokens: Vec<Token> = Vec::new();
        let mut pos = 0;

        while pos < line.len() {
            let rest = &line[pos..];

            let matched = self.rules.iter().find_map(|rule| {
                rule.match_len(rest).map(|len| (rule.category, len))
            });

            match matched {
                Some((category, len)) => {
                    tokens.push(Token::new(category, &rest[..len]));
                    pos += len;
                }
                None => {
                    let ch_len = rest.chars().next().map_or(1, |c| c.len_utf8());
                    push_plain(&mut tokens, &rest[..ch_len]);
                    pos += ch_len;
                }
            }
        }

        tokens
    }
}

/// Append plain text, extending a trailing Default token if present
fn push_plain(tokens: &mut Vec<Token>, text: &str) {
    match tokens.last_mut() {
        Some(last) if last.category == TokenType::Default => last.text.push_str(text),
        _ => tokens.push(Token::new(TokenType::Default, text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::reassemble;

    fn test_highlighter() -> LineHighlighter {
        let rules = vec![
            Rule::new("string", TokenType::String, r#""(?:[^"\\]|\\.)*""#).unwrap(),
            Rule::new("keyword", TokenType::Keyword, r"(?:foo|bar)\b").unwrap(),
            Rule::with_context("call", TokenType::Function, r"[a-z_]\w*", r"\s*\(").unwrap(),
            Rule::new("number", TokenType::Number, r"\d+").unwrap(),
        ];
        LineHighlighter::new(rules)
    }

    #[test]
    fn test_first_match_wins() {
        let hl = test_highlighter();
        // "foo" is both a keyword and a potential call head; keyword is
        // listed first so it wins even before a parenthesis.
        let tokens = hl.highlight_line("foo(1)");
        assert_eq!(tokens[0], Token::new(TokenType::Keyword, "foo"));
    }

    #[test]
    fn test_trailing_context_not_consumed() {
        let hl = test_highlighter();
        let tokens = hl.highlight_line("len(42)");
        assert_eq!(tokens[0], Token::new(TokenType::Function, "len"));
        assert_eq!(tokens[1], Token::new(TokenType::Default, "("));
        assert_eq!(tokens[2], Token::new(TokenType::Number, "42"));
    }

    #[test]
    fn test_comment_line_short_circuits() {
        let hl = test_highlighter();
        let tokens = hl.highlight_line("   # foo \"bar\" 42");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, TokenType::Comment);
        assert_eq!(tokens[0].text, "   # foo \"bar\" 42");
    }

    #[test]
    fn test_plain_fallback_coalesces() {
        let hl = test_highlighter();
        let tokens = hl.highlight_line("?!* foo");
        assert_eq!(tokens[0], Token::new(TokenType::Default, "?!* "));
        assert_eq!(tokens[1], Token::new(TokenType::Keyword, "foo"));
    }

    #[test]
    fn test_totality_with_multibyte_text() {
        let hl = test_highlighter();
        for line in ["foo \u{00e9}\u{00e9} 12 bar", "\u{4e16}\u{754c} \"x\\\"y\"", ""] {
            assert_eq!(reassemble(&hl.highlight_line(line)), line);
        }
    }

    #[test]
    fn test_string_with_escaped_quotes_single_token() {
        let hl = test_highlighter();
        let line = r#""hello \"world\"""#;
        let tokens = hl.highlight_line(line);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::new(TokenType::String, line));
    }
}
