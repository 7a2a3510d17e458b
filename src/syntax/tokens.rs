//! Token categories for syntax highlighting
//!
//! One shared set of display categories serves both tokenizer paths, the
//! themes and the HTML class names.

/// Display category assigned to a run of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Comments (`#`, `//`, `/* */`, triple backticks)
    Comment,
    /// String literals
    String,
    /// Numeric literals, including size/duration forms
    Number,
    /// Language keywords and commands
    Keyword,
    /// Built-in commands and clause modifiers
    Builtin,
    /// Function names
    Function,
    /// Operators, word-form and symbolic
    Operator,
    /// Constants (true, false, null)
    Constant,
    /// Data type names
    Type,
    /// Variables and field names
    Variable,
    /// The pipe delimiter
    Pipe,
    /// Brackets, commas, semicolons
    Punctuation,
    /// Plain text with no special highlighting
    Default,
}

/// Every category, for theme tables and tests
pub const ALL_TOKEN_TYPES: [TokenType; 13] = [
    TokenType::Comment,
    TokenType::String,
    TokenType::Number,
    TokenType::Keyword,
    TokenType::Builtin,
    TokenType::Function,
    TokenType::Operator,
    TokenType::Constant,
    TokenType::Type,
    TokenType::Variable,
    TokenType::Pipe,
    TokenType::Punctuation,
    TokenType::Default,
];

impl TokenType {
    /// Stable lowercase name: the HTML class and theme-file key
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Comment => "comment",
            TokenType::String => "string",
            TokenType::Number => "number",
            TokenType::Keyword => "keyword",
            TokenType::Builtin => "builtin",
            TokenType::Function => "function",
            TokenType::Operator => "operator",
            TokenType::Constant => "constant",
            TokenType::Type => "type",
            TokenType::Variable => "variable",
            TokenType::Pipe => "pipe",
            TokenType::Punctuation => "punctuation",
            TokenType::Default => "default",
        }
    }

    /// Parse a category from its name (for theme file loading)
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_TOKEN_TYPES.into_iter().find(|t| t.name() == name)
    }
}

/// A contiguous run of source text tagged with a display category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Display category
    pub category: TokenType,
    /// The exact source text covered
    pub text: String,
}

impl Token {
    pub fn new(category: TokenType, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

/// Concatenate token texts back into the source line
#[cfg(test)]
pub fn reassemble(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for token_type in ALL_TOKEN_TYPES {
            assert_eq!(TokenType::from_name(token_type.name()), Some(token_type));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenType::from_name("Keyword"), None);
        assert_eq!(TokenType::from_name(""), None);
    }

    #[test]
    fn test_reassemble() {
        let tokens = vec![
            Token::new(TokenType::Keyword, "search"),
            Token::new(TokenType::Default, " "),
            Token::new(TokenType::Variable, "index"),
        ];
        assert_eq!(reassemble(&tokens), "search index");
    }
}
