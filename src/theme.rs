//! Theme palettes and mode detection
//!
//! One theme serves both render paths: it maps every token category to a
//! style and never influences tokenization. Auto mode asks the terminal
//! for its background luma, the terminal counterpart of a
//! prefers-color-scheme query, and falls back to dark.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, SnipviewError};
use crate::syntax::tokens::TokenType;

/// Requested theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the terminal background
    Auto,
}

impl ThemeMode {
    /// Resolve Auto against the terminal background; light backgrounds
    /// have luma above 0.6
    pub fn resolve(self) -> ThemeMode {
        match self {
            ThemeMode::Auto => match terminal_light::luma() {
                Ok(luma) if luma > 0.6 => ThemeMode::Light,
                _ => ThemeMode::Dark,
            },
            mode => mode,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = SnipviewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "auto" | "system" => Ok(ThemeMode::Auto),
            _ => Err(SnipviewError::Usage(format!(
                "unknown theme '{s}' (valid: light, dark, auto)"
            ))),
        }
    }
}

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the hash is optional)
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SnipviewError::InvalidColor(s.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| SnipviewError::InvalidColor(s.to_string()))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    /// CSS form, `#rrggbb`
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Visual style of one token category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Rgb,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    /// Create a style with just a foreground color
    pub fn fg(color: Rgb) -> Self {
        Self {
            color,
            bold: false,
            italic: false,
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// A resolved palette: one style per token category
pub struct Theme {
    /// Light or Dark, never Auto
    pub mode: ThemeMode,
    pub background: Rgb,
    pub line_number: Rgb,
    styles: [(TokenType, Style); 13],
}

impl Theme {
    /// The dark palette
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Rgb::new(0x1e, 0x1e, 0x1e),
            line_number: Rgb::new(0x85, 0x85, 0x85),
            styles: [
                (TokenType::Comment, Style::fg(Rgb::new(0x6a, 0x99, 0x55)).with_italic()),
                (TokenType::String, Style::fg(Rgb::new(0xce, 0x91, 0x78))),
                (TokenType::Number, Style::fg(Rgb::new(0xb5, 0xce, 0xa8))),
                (TokenType::Keyword, Style::fg(Rgb::new(0x56, 0x9c, 0xd6)).with_bold()),
                (TokenType::Builtin, Style::fg(Rgb::new(0x4e, 0xc9, 0xb0))),
                (TokenType::Function, Style::fg(Rgb::new(0xdc, 0xdc, 0xaa))),
                (TokenType::Operator, Style::fg(Rgb::new(0xd4, 0xd4, 0xd4))),
                (TokenType::Constant, Style::fg(Rgb::new(0x4f, 0xc1, 0xff))),
                (TokenType::Type, Style::fg(Rgb::new(0x4e, 0xc9, 0xb0))),
                (TokenType::Variable, Style::fg(Rgb::new(0x9c, 0xdc, 0xfe))),
                (TokenType::Pipe, Style::fg(Rgb::new(0xff, 0x79, 0xc6)).with_bold()),
                (TokenType::Punctuation, Style::fg(Rgb::new(0xd4, 0xd4, 0xd4))),
                (TokenType::Default, Style::fg(Rgb::new(0xd4, 0xd4, 0xd4))),
            ],
        }
    }

    /// The light palette
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Rgb::new(0xff, 0xff, 0xff),
            line_number: Rgb::new(0x23, 0x78, 0x93),
            styles: [
                (TokenType::Comment, Style::fg(Rgb::new(0x00, 0x80, 0x00)).with_italic()),
                (TokenType::String, Style::fg(Rgb::new(0xa3, 0x15, 0x15))),
                (TokenType::Number, Style::fg(Rgb::new(0x09, 0x86, 0x58))),
                (TokenType::Keyword, Style::fg(Rgb::new(0x00, 0x00, 0xff)).with_bold()),
                (TokenType::Builtin, Style::fg(Rgb::new(0x26, 0x7f, 0x99))),
                (TokenType::Function, Style::fg(Rgb::new(0x79, 0x5e, 0x26))),
                (TokenType::Operator, Style::fg(Rgb::new(0x00, 0x00, 0x00))),
                (TokenType::Constant, Style::fg(Rgb::new(0x00, 0x70, 0xc1))),
                (TokenType::Type, Style::fg(Rgb::new(0x26, 0x7f, 0x99))),
                (TokenType::Variable, Style::fg(Rgb::new(0x00, 0x10, 0x80))),
                (TokenType::Pipe, Style::fg(Rgb::new(0xaf, 0x00, 0xdb)).with_bold()),
                (TokenType::Punctuation, Style::fg(Rgb::new(0x00, 0x00, 0x00))),
                (TokenType::Default, Style::fg(Rgb::new(0x00, 0x00, 0x00))),
            ],
        }
    }

    /// Palette for a mode, resolving Auto against the terminal
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode.resolve() {
            ThemeMode::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Style of one token category
    pub fn style(&self, token: TokenType) -> Style {
        self.styles
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, style)| *style)
            .unwrap_or(Style::fg(self.background))
    }

    /// Apply color overrides from a parsed theme file
    ///
    /// The file has `[light]` and `[dark]` sections keyed by category name
    /// plus the special keys `background` and `line-number`. Only the
    /// section matching this theme's mode applies.
    pub fn apply_overrides(&mut self, doc: &toml::Table) -> Result<()> {
        let section = match self.mode {
            ThemeMode::Light => "light",
            _ => "dark",
        };
        let Some(colors) = doc.get(section).and_then(|v| v.as_table()) else {
            return Ok(());
        };

        for (key, value) in colors {
            let color = Rgb::from_hex(value.as_str().unwrap_or_default())?;
            match key.as_str() {
                "background" => self.background = color,
                "line-number" => self.line_number = color,
                name => {
                    let token = TokenType::from_name(name)
                        .ok_or_else(|| SnipviewError::UnknownCategory(name.to_string()))?;
                    for entry in &mut self.styles {
                        if entry.0 == token {
                            entry.1.color = color;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Load and apply a TOML theme override file
    pub fn load_overrides(&mut self, path: &Path) -> Result<()> {
        let contents = fs::read_to_string(path)?;
        let doc: toml::Table = contents.parse()?;
        self.apply_overrides(&doc)
    }
}
