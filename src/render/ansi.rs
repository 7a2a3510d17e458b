//! ANSI terminal rendering
//!
//! Paints a snippet with the editor lexer so multi-line constructs color
//! correctly, with an optional dim line-number gutter and display-width
//! truncation.

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::builtin::LanguageSupport;
use crate::theme::{Rgb, Style, Theme};

use super::RenderOptions;

/// Render a snippet to a writer
pub fn render<W: Write>(
    out: &mut W,
    text: &str,
    support: &LanguageSupport,
    theme: &Theme,
    options: &RenderOptions,
) -> Result<()> {
    // A trailing newline is a line terminator, not an extra empty line
    let text = text.strip_suffix('\n').unwrap_or(text);
    let line_tokens = support.editor.tokenize(text);
    let lnum_width = line_number_width(line_tokens.len());

    for (idx, tokens) in line_tokens.iter().enumerate() {
        let mut used = 0;

        if options.line_numbers {
            let lnum = format!("{:>width$} ", idx + 1, width = lnum_width - 1);
            used += lnum.len();
            queue!(
                out,
                SetForegroundColor(to_crossterm(theme.line_number)),
                Print(lnum),
                ResetColor
            )?;
        }

        for token in tokens {
            let piece = match options.max_width {
                Some(max) => {
                    let remaining = max.saturating_sub(used);
                    if remaining == 0 {
                        break;
                    }
                    truncate_to_width(&token.text, remaining)
                }
                None => token.text.clone(),
            };
            apply_style(out, theme.style(token.category))?;
            queue!(out, Print(&piece))?;
            used += display_width(&piece);
            if piece.len() < token.text.len() {
                break;
            }
        }

        queue!(out, SetAttribute(Attribute::Reset), Print("\n"))?;
    }

    out.flush()?;
    Ok(())
}

fn apply_style<W: Write>(out: &mut W, style: Style) -> Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    queue!(out, SetForegroundColor(to_crossterm(style.color)))?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    Ok(())
}

fn to_crossterm(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Calculate width needed for line numbers (including separator)
fn line_number_width(line_count: usize) -> usize {
    let digits = if line_count == 0 {
        1
    } else {
        (line_count as f64).log10().floor() as usize + 1
    };
    digits.max(3) + 1 // minimum 3 digits + space
}

/// Truncate a string to fit within a display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}

fn display_width(s: &str) -> usize {
    s.chars()
        .map(|ch| unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1))
        .sum()
}
