//! Editor-integration tokenizer
//!
//! A declarative lexer state machine for the rich editing path: a root
//! state plus nested states for block comments, quoted strings, command
//! substitution and backtick-quoted identifiers. States are built per
//! language from the shared token tables and carry across lines through a
//! small copyable [`LineState`], so multi-line constructs tokenize
//! correctly as the embedding editor feeds one line at a time.

use std::collections::HashSet;

use regex::Regex;

use super::tokens::{Token, TokenType};

/// Maximum nesting carried across a line boundary
///
/// Deeper nesting (pathological command substitution) stays in the current
/// state instead of pushing.
const MAX_STATE_DEPTH: usize = 4;

/// Root state index; per-language builders define further states
pub const ROOT_STATE: u8 = 0;

/// Lexer state carried from one line to the next
///
/// A bounded stack of state indices; empty means the root state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    stack: [u8; MAX_STATE_DEPTH],
    len: u8,
}

impl LineState {
    /// Check whether the lexer is in the root state
    pub fn is_root(&self) -> bool {
        self.len == 0
    }

    fn top(&self) -> u8 {
        if self.len == 0 {
            ROOT_STATE
        } else {
            self.stack[self.len as usize - 1]
        }
    }

    fn push(&mut self, id: u8) {
        if (self.len as usize) < MAX_STATE_DEPTH {
            self.stack[self.len as usize] = id;
            self.len += 1;
        }
    }

    fn pop(&mut self) {
        self.len = self.len.saturating_sub(1);
    }
}

/// What happens to the state stack after a rule fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Stay,
    Push(u8),
    Pop,
}

/// Word classification against table-derived sets
///
/// The monarch-style `cases` lookup: an identifier rule matches a word,
/// then the word is classified by set membership in order, falling back to
/// a default category.
pub struct WordSets {
    sets: Vec<(HashSet<String>, TokenType)>,
    case_insensitive: bool,
    default: TokenType,
}

impl WordSets {
    pub fn new(case_insensitive: bool, default: TokenType) -> Self {
        Self {
            sets: Vec::new(),
            case_insensitive,
            default,
        }
    }

    /// Add a set; earlier sets win
    pub fn add(mut self, words: &[&str], category: TokenType) -> Self {
        let set = words
            .iter()
            .map(|w| {
                if self.case_insensitive {
                    w.to_lowercase()
                } else {
                    (*w).to_string()
                }
            })
            .collect();
        self.sets.push((set, category));
        self
    }

    /// Classify a matched word
    pub fn classify(&self, word: &str) -> TokenType {
        let lowered;
        let key = if self.case_insensitive {
            lowered = word.to_lowercase();
            lowered.as_str()
        } else {
            word
        };
        self.sets
            .iter()
            .find(|(set, _)| set.contains(key))
            .map(|(_, category)| *category)
            .unwrap_or(self.default)
    }
}

/// How a rule turns its match into tokens
enum Emit {
    /// The whole match as one token
    Category(TokenType),
    /// The whole match, classified by word sets
    Classify(WordSets),
    /// One token per capture group, gaps as plain text
    Groups(Vec<TokenType>),
}

/// One rule of a lexer state
pub struct LexRule {
    pattern: Regex,
    emit: Emit,
    action: Action,
    line_start: bool,
}

impl LexRule {
    fn compile(pattern: &str) -> Option<Regex> {
        Regex::new(&format!("^(?:{pattern})")).ok()
    }

    /// Match and emit one category, stay in state
    pub fn token(pattern: &str, category: TokenType) -> Option<Self> {
        Some(Self {
            pattern: Self::compile(pattern)?,
            emit: Emit::Category(category),
            action: Action::Stay,
            line_start: false,
        })
    }

    /// Match, emit, and push a nested state
    pub fn token_push(pattern: &str, category: TokenType, state: u8) -> Option<Self> {
        Some(Self {
            action: Action::Push(state),
            ..Self::token(pattern, category)?
        })
    }

    /// Match, emit, and pop back to the enclosing state
    pub fn token_pop(pattern: &str, category: TokenType) -> Option<Self> {
        Some(Self {
            action: Action::Pop,
            ..Self::token(pattern, category)?
        })
    }

    /// Match a word and classify it against table sets
    pub fn classify(pattern: &str, sets: WordSets) -> Option<Self> {
        Some(Self {
            pattern: Self::compile(pattern)?,
            emit: Emit::Classify(sets),
            action: Action::Stay,
            line_start: false,
        })
    }

    /// Match with capture groups, one category per group
    pub fn groups(pattern: &str, categories: Vec<TokenType>) -> Option<Self> {
        Some(Self {
            pattern: Self::compile(pattern)?,
            emit: Emit::Groups(categories),
            action: Action::Stay,
            line_start: false,
        })
    }

    /// Restrict this rule to column zero (shebangs)
    pub fn at_line_start(mut self) -> Self {
        self.line_start = true;
        self
    }
}

/// A named lexer state: ordered rules plus a fallback category
pub struct LexState {
    /// Name for debugging
    #[allow(dead_code)]
    pub name: &'static str,
    rules: Vec<LexRule>,
    /// Category for characters no rule matches
    default: TokenType,
    /// Whether root rules apply after this state's own (command
    /// substitution re-enters the root grammar)
    include_root: bool,
}

impl LexState {
    pub fn new(name: &'static str, default: TokenType, rules: Vec<LexRule>) -> Self {
        Self {
            name,
            rules,
            default,
            include_root: false,
        }
    }

    pub fn with_root_rules(mut self) -> Self {
        self.include_root = true;
        self
    }
}

/// The per-language editor tokenizer
pub struct EditorLexer {
    states: Vec<LexState>,
}

impl EditorLexer {
    /// Build a lexer; `states[0]` must be the root state
    pub fn new(states: Vec<LexState>) -> Self {
        debug_assert!(!states.is_empty());
        Self { states }
    }

    /// Tokenize one line, threading the state from the previous line
    ///
    /// Total: concatenating the returned token texts reproduces `line`.
    pub fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<Token>, LineState) {
        let mut st = state;
        let mut tokens: Vec<Token> = Vec::new();
        let mut pos = 0;

        while pos < line.len() {
            let current = &self.states[st.top() as usize];
            let rest = &line[pos..];

            match self.match_in(current, rest, pos == 0) {
                Some((rule, caps)) => {
                    let whole = caps.get(0).map_or(0, |m| m.end());
                    self.emit(rule, &caps, rest, &mut tokens);
                    match rule.action {
                        Action::Stay => {}
                        Action::Push(id) => st.push(id),
                        Action::Pop => st.pop(),
                    }
                    pos += whole;
                }
                None => {
                    let ch_len = rest.chars().next().map_or(1, |c| c.len_utf8());
                    push_token(&mut tokens, current.default, &rest[..ch_len]);
                    pos += ch_len;
                }
            }
        }

        (tokens, st)
    }

    /// Tokenize a whole snippet, one token vector per line
    pub fn tokenize(&self, text: &str) -> Vec<Vec<Token>> {
        let mut state = LineState::default();
        text.split('\n')
            .map(|line| {
                let (tokens, next) = self.tokenize_line(line, state);
                state = next;
                tokens
            })
            .collect()
    }

    fn match_in<'r, 't>(
        &'r self,
        state: &'r LexState,
        rest: &'t str,
        at_line_start: bool,
    ) -> Option<(&'r LexRule, regex::Captures<'t>)> {
        let own = state.rules.iter();
        let root = state
            .include_root
            .then(|| self.states[ROOT_STATE as usize].rules.iter());
        own.chain(root.into_iter().flatten()).find_map(|rule| {
            if rule.line_start && !at_line_start {
                return None;
            }
            let caps = rule.pattern.captures(rest)?;
            (!caps.get(0)?.as_str().is_empty()).then_some((rule, caps))
        })
    }

    fn emit(&self, rule: &LexRule, caps: &regex::Captures, rest: &str, tokens: &mut Vec<Token>) {
        let whole = caps.get(0).expect("match group 0");
        match &rule.emit {
            Emit::Category(category) => push_token(tokens, *category, whole.as_str()),
            Emit::Classify(sets) => {
                push_token(tokens, sets.classify(whole.as_str()), whole.as_str())
            }
            Emit::Groups(categories) => {
                let mut cursor = 0;
                for (i, category) in categories.iter().enumerate() {
                    if let Some(group) = caps.get(i + 1) {
                        if group.start() > cursor {
                            push_token(tokens, TokenType::Default, &rest[cursor..group.start()]);
                        }
                        push_token(tokens, *category, group.as_str());
                        cursor = group.end();
                    }
                }
                if cursor < whole.end() {
                    push_token(tokens, TokenType::Default, &rest[cursor..whole.end()]);
                }
            }
        }
    }
}

/// Append a token, extending a trailing token of the same category
fn push_token(tokens: &mut Vec<Token>, category: TokenType, text: &str) {
    match tokens.last_mut() {
        Some(last) if last.category == category => last.text.push_str(text),
        _ => tokens.push(Token::new(category, text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::reassemble;

    const COMMENT_STATE: u8 = 1;
    const STRING_STATE: u8 = 2;

    fn test_lexer() -> EditorLexer {
        let root = LexState::new(
            "root",
            TokenType::Default,
            vec![
                LexRule::token_push(r"/\*", TokenType::Comment, COMMENT_STATE).unwrap(),
                LexRule::token_push(r#"""#, TokenType::String, STRING_STATE).unwrap(),
                LexRule::groups(
                    r"(fn)(\s+)([a-z_]\w*)",
                    vec![TokenType::Keyword, TokenType::Default, TokenType::Function],
                )
                .unwrap(),
                LexRule::token(r"#!.*", TokenType::Comment).unwrap().at_line_start(),
                LexRule::token(r"\d+", TokenType::Number).unwrap(),
            ],
        );
        let comment = LexState::new(
            "comment",
            TokenType::Comment,
            vec![
                LexRule::token(r"[^*]+", TokenType::Comment).unwrap(),
                LexRule::token_pop(r"\*/", TokenType::Comment).unwrap(),
                LexRule::token(r"\*", TokenType::Comment).unwrap(),
            ],
        );
        let string = LexState::new(
            "string",
            TokenType::String,
            vec![
                LexRule::token(r#"[^\\"]+"#, TokenType::String).unwrap(),
                LexRule::token(r"\\.", TokenType::String).unwrap(),
                LexRule::token_pop(r#"""#, TokenType::String).unwrap(),
            ],
        );
        EditorLexer::new(vec![root, comment, string])
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let lexer = test_lexer();
        let (tokens, state) = lexer.tokenize_line("1 /* open", LineState::default());
        assert!(!state.is_root());
        assert_eq!(tokens.last().unwrap().category, TokenType::Comment);

        let (tokens, state) = lexer.tokenize_line("still inside", state);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::new(TokenType::Comment, "still inside"));

        let (tokens, state) = lexer.tokenize_line("done */ 42", state);
        assert!(state.is_root());
        assert_eq!(tokens.last().unwrap(), &Token::new(TokenType::Number, "42"));
    }

    #[test]
    fn test_adjacent_same_category_coalesces() {
        let lexer = test_lexer();
        let (tokens, state) = lexer.tokenize_line(r#""a\"b""#, LineState::default());
        assert!(state.is_root());
        assert_eq!(tokens, vec![Token::new(TokenType::String, r#""a\"b""#)]);
    }

    #[test]
    fn test_group_rule_emits_per_group() {
        let lexer = test_lexer();
        let (tokens, _) = lexer.tokenize_line("fn greet", LineState::default());
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Keyword, "fn"),
                Token::new(TokenType::Default, " "),
                Token::new(TokenType::Function, "greet"),
            ]
        );
    }

    #[test]
    fn test_line_start_rule() {
        let lexer = test_lexer();
        let (tokens, _) = lexer.tokenize_line("#!/usr/bin/env thing", LineState::default());
        assert_eq!(tokens[0].category, TokenType::Comment);
        assert_eq!(tokens.len(), 1);

        let (tokens, _) = lexer.tokenize_line("42 #!x", LineState::default());
        assert_eq!(tokens[0], Token::new(TokenType::Number, "42"));
        assert_eq!(tokens[1].category, TokenType::Default);
    }

    #[test]
    fn test_totality() {
        let lexer = test_lexer();
        let mut state = LineState::default();
        for line in ["fn a /* x", "héllo ☂ 12", "*/ \"q\\\"\" 9"] {
            let (tokens, next) = lexer.tokenize_line(line, state);
            assert_eq!(reassemble(&tokens), line);
            state = next;
        }
    }

    #[test]
    fn test_state_stack_depth_cap() {
        let mut state = LineState::default();
        for _ in 0..10 {
            state.push(COMMENT_STATE);
        }
        assert_eq!(state.top(), COMMENT_STATE);
        for _ in 0..10 {
            state.pop();
        }
        assert!(state.is_root());
    }
}
