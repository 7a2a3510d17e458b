//! fish shell rules
//!
//! The display path leans on variable expansion forms; the editor path
//! adds command substitution (which re-enters the root grammar and can
//! nest) and interpolation-aware double-quoted strings.

use crate::syntax::defs::{alternation, FISH};
use crate::syntax::display::{LineHighlighter, Rule};
use crate::syntax::lexer::{EditorLexer, LexRule, LexState, WordSets};
use crate::syntax::tokens::TokenType;

const CMDSUB: u8 = 1;
const DSTRING: u8 = 2;
const SSTRING: u8 = 3;

/// Display rules, in precedence order
pub fn display() -> LineHighlighter {
    let keywords = format!(r"(?:{})\b", alternation(FISH.keywords));
    let builtins = format!(r"(?:{})\b", alternation(FISH.builtins));

    let rules = [
        Rule::new("shebang", TokenType::Comment, r"#!.*"),
        Rule::new("comment", TokenType::Comment, r"#.*"),
        // Double quotes expand variables but stay one string token
        Rule::new(
            "string_double",
            TokenType::String,
            r#""(?:[^"\\$]|\\.|\$(?:\w+|\{[^}]+\}))*""#,
        ),
        Rule::new("string_single", TokenType::String, r"'(?:[^'\\]|\\.)*'"),
        Rule::new("indexed_variable", TokenType::Variable, r"\$\w+\[[^\]]+\]"),
        Rule::new(
            "special_variable",
            TokenType::Variable,
            r"\$\$|\$(?:status|argv|history|HOME|PWD|USER|hostname|version|fish_pid)\b",
        ),
        Rule::new("braced_variable", TokenType::Variable, r"\$\{[^}]+\}"),
        Rule::new("variable", TokenType::Variable, r"\$\w+"),
        Rule::new("pipe", TokenType::Pipe, r"\|"),
        Rule::new("keyword", TokenType::Keyword, &keywords),
        Rule::new("builtin", TokenType::Builtin, &builtins),
        Rule::new("hex", TokenType::Number, r"0x[0-9a-fA-F]+\b"),
        Rule::new("octal", TokenType::Number, r"0o[0-7]+\b"),
        Rule::new("binary", TokenType::Number, r"0b[01]+\b"),
        Rule::new("number", TokenType::Number, r"\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b"),
        Rule::new(
            "operator",
            TokenType::Operator,
            r">>?&?|<&?|&&|\|\||==|!=|<=?|>=?|[+*/%-]",
        ),
    ];

    LineHighlighter::new(rules.into_iter().flatten().collect())
}

/// Editor lexer: root plus command substitution and string states
pub fn editor() -> EditorLexer {
    let keywords = format!(r"(?:{})\b", alternation(FISH.keywords));

    let words = WordSets::new(false, TokenType::Default).add(FISH.builtins, TokenType::Builtin);

    // Known set/test flags highlight; anything else stays plain
    let flags = WordSets::new(false, TokenType::Default)
        .add(FISH.set_scopes, TokenType::Operator)
        .add(FISH.test_operators, TokenType::Operator);

    let root = LexState::new(
        "root",
        TokenType::Default,
        [
            LexRule::token(r"#!.*", TokenType::Comment).map(|r| r.at_line_start()),
            LexRule::token(r"#.*", TokenType::Comment),
            LexRule::groups(
                r"(function)([ \t]+)([a-zA-Z_][\w-]*)",
                vec![TokenType::Keyword, TokenType::Default, TokenType::Function],
            ),
            LexRule::token(&keywords, TokenType::Keyword),
            LexRule::classify(r"[a-zA-Z_][\w-]*", words),
            LexRule::token(r"\$\$", TokenType::Variable),
            LexRule::token(r"\$(?:status|argv)\b", TokenType::Variable),
            LexRule::token(r"\$\{[^}]+\}", TokenType::Variable),
            LexRule::token(r"\$\w+", TokenType::Variable),
            LexRule::token(r"\|", TokenType::Pipe),
            LexRule::token_push(r"\(", TokenType::Punctuation, CMDSUB),
            LexRule::token_push(r#"""#, TokenType::String, DSTRING),
            LexRule::token_push(r"'", TokenType::String, SSTRING),
            LexRule::token(r"\d+(?:\.\d+)?\b", TokenType::Number),
            LexRule::classify(r"--?[a-zA-Z][a-zA-Z-]*", flags),
            LexRule::token(r">>|<<|>&|&>|[><&]", TokenType::Operator),
            LexRule::token(r";", TokenType::Punctuation),
            LexRule::token(r"[\[\]{}]", TokenType::Punctuation),
            LexRule::token(r"\\$", TokenType::Operator),
            LexRule::token(r"[ \t]+", TokenType::Default),
        ]
        .into_iter()
        .flatten()
        .collect(),
    );

    let command_substitution = LexState::new(
        "command_substitution",
        TokenType::Default,
        [LexRule::token_pop(r"\)", TokenType::Punctuation)]
            .into_iter()
            .flatten()
            .collect(),
    )
    .with_root_rules();

    let double_quoted = LexState::new(
        "string_double",
        TokenType::String,
        [
            LexRule::token(r#"[^\\"$]+"#, TokenType::String),
            LexRule::token(r"\$\w+", TokenType::Variable),
            LexRule::token(r"\$\{[^}]+\}", TokenType::Variable),
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

    EditorLexer::new(vec![root, command_substitution, double_quoted, single_quoted])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::lexer::LineState;
    use crate::syntax::tokens::{reassemble, Token};

    #[test]
    fn test_display_script_line() {
        let hl = display();
        let line = "set -l total (count $argv) | grep foo";
        let tokens = hl.highlight_line(line);
        assert_eq!(reassemble(&tokens), line);
        assert_eq!(tokens[0], Token::new(TokenType::Builtin, "set"));
        assert!(tokens.contains(&Token::new(TokenType::Variable, "$argv")));
        assert!(tokens.contains(&Token::new(TokenType::Pipe, "|")));
        assert!(tokens.contains(&Token::new(TokenType::Builtin, "grep")));
        assert!(tokens.contains(&Token::new(TokenType::Builtin, "count")));
    }

    #[test]
    fn test_display_keyword_before_builtin() {
        let hl = display();
        let tokens = hl.highlight_line("if test -f file.txt");
        assert_eq!(tokens[0], Token::new(TokenType::Keyword, "if"));
        assert!(tokens.contains(&Token::new(TokenType::Builtin, "test")));
    }

    #[test]
    fn test_display_interpolated_string_is_one_token() {
        let hl = display();
        let line = r#"echo "home is $HOME today""#;
        let tokens = hl.highlight_line(line);
        assert_eq!(reassemble(&tokens), line);
        assert!(tokens.contains(&Token::new(
            TokenType::String,
            r#""home is $HOME today""#
        )));
    }

    #[test]
    fn test_display_variable_forms() {
        let hl = display();
        let tokens = hl.highlight_line("echo $status ${PATH} $argv[1] $x");
        assert!(tokens.contains(&Token::new(TokenType::Variable, "$status")));
        assert!(tokens.contains(&Token::new(TokenType::Variable, "${PATH}")));
        assert!(tokens.contains(&Token::new(TokenType::Variable, "$argv[1]")));
        assert!(tokens.contains(&Token::new(TokenType::Variable, "$x")));
    }

    #[test]
    fn test_display_comment_line() {
        let hl = display();
        let tokens = hl.highlight_line("  # just a note | echo hi");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, TokenType::Comment);
    }

    #[test]
    fn test_editor_function_definition() {
        let lexer = editor();
        let (tokens, _) = lexer.tokenize_line("function greet-user", LineState::default());
        assert_eq!(tokens[0], Token::new(TokenType::Keyword, "function"));
        assert_eq!(
            tokens.last().unwrap(),
            &Token::new(TokenType::Function, "greet-user")
        );
    }

    #[test]
    fn test_editor_command_substitution_nests() {
        let lexer = editor();
        let (tokens, state) =
            lexer.tokenize_line("set x (count (ls $dir))", LineState::default());
        assert!(state.is_root());
        assert!(tokens.contains(&Token::new(TokenType::Builtin, "count")));
        assert!(tokens.contains(&Token::new(TokenType::Builtin, "ls")));
        assert!(tokens.contains(&Token::new(TokenType::Variable, "$dir")));
    }

    #[test]
    fn test_editor_command_substitution_spans_lines() {
        let lexer = editor();
        let (_, state) = lexer.tokenize_line("set files (ls \\", LineState::default());
        assert!(!state.is_root());
        let (tokens, state) = lexer.tokenize_line("  $dir)", state);
        assert!(state.is_root());
        assert!(tokens.contains(&Token::new(TokenType::Variable, "$dir")));
    }

    #[test]
    fn test_editor_string_interpolation() {
        let lexer = editor();
        let (tokens, state) =
            lexer.tokenize_line(r#"echo "hi $USER!""#, LineState::default());
        assert!(state.is_root());
        assert!(tokens.contains(&Token::new(TokenType::Variable, "$USER")));
        assert!(tokens.contains(&Token::new(TokenType::String, r#""hi "#)));
    }

    #[test]
    fn test_editor_known_flags() {
        let lexer = editor();
        let (tokens, _) = lexer.tokenize_line("set -l x; test -f y -Q", LineState::default());
        assert!(tokens.contains(&Token::new(TokenType::Operator, "-l")));
        assert!(tokens.contains(&Token::new(TokenType::Operator, "-f")));
        // Unknown flags stay plain (merged into surrounding plain text)
        assert!(tokens
            .iter()
            .any(|t| t.category == TokenType::Default && t.text.contains("-Q")));
    }

    #[test]
    fn test_editor_shebang_only_at_line_start() {
        let lexer = editor();
        let (tokens, _) = lexer.tokenize_line("#!/usr/bin/env fish", LineState::default());
        assert_eq!(tokens, vec![Token::new(TokenType::Comment, "#!/usr/bin/env fish")]);
    }
}
