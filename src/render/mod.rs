//! Snippet renderers
//!
//! Two outputs from the two tokenizer paths: ANSI terminal text driven by
//! the editor lexer, and HTML markup driven by the display highlighter.

pub mod ansi;
pub mod html;

/// Display options shared by both renderers
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Show a line-number gutter
    pub line_numbers: bool,
    /// Truncate ANSI output to this display width
    pub max_width: Option<usize>,
    /// Extra CSS appended to the HTML style block
    pub extra_css: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: true,
            max_width: None,
            extra_css: None,
        }
    }
}
