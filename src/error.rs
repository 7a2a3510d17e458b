//! Error types for snipview

use thiserror::Error;

/// Result type alias for snipview operations
pub type Result<T> = std::result::Result<T, SnipviewError>;

/// Snipview error types
#[derive(Error, Debug)]
pub enum SnipviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown language '{0}' (valid: spl, esql, fish)")]
    UnknownLanguage(String),

    #[error("cannot detect language of '{0}', pass --lang")]
    UndetectedLanguage(String),

    #[error("theme file error: {0}")]
    ThemeFile(#[from] toml::de::Error),

    #[error("unknown token category '{0}' in theme file")]
    UnknownCategory(String),

    #[error("invalid color '{0}' (expected #rrggbb)")]
    InvalidColor(String),

    #[error("{0}")]
    Usage(String),
}
