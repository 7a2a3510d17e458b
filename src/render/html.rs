//! HTML rendering
//!
//! Produces the read-only display markup: a `<pre>` block with injected
//! CSS mapping token categories to theme colors, one `<div>` per line, and
//! display-highlighter tokens as classed spans. Plain text is emitted bare.

use std::fmt::Write;

use crate::syntax::builtin::LanguageSupport;
use crate::syntax::tokens::{TokenType, ALL_TOKEN_TYPES};
use crate::theme::Theme;

use super::RenderOptions;

/// Render a snippet as a styled HTML block
pub fn render(
    text: &str,
    support: &LanguageSupport,
    theme: &Theme,
    options: &RenderOptions,
) -> String {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let mut out = String::new();

    let _ = write!(
        out,
        "<pre class=\"snippet-highlighter\" style=\"background-color:{}\">\n",
        theme.background.css()
    );
    out.push_str(&style_block(theme, options));
    out.push_str("<code>\n");

    for (idx, line) in text.split('\n').enumerate() {
        out.push_str("<div>");
        if options.line_numbers {
            let _ = write!(out, "<span class=\"line-number\">{}</span>", idx + 1);
        }
        for token in support.display.highlight_line(line) {
            if token.category == TokenType::Default {
                out.push_str(&escape(&token.text));
            } else {
                let _ = write!(
                    out,
                    "<span class=\"token {}\">{}</span>",
                    token.category.name(),
                    escape(&token.text)
                );
            }
        }
        out.push_str("</div>\n");
    }

    out.push_str("</code></pre>\n");
    out
}

/// The injected CSS: one rule per styled category plus the gutter
fn style_block(theme: &Theme, options: &RenderOptions) -> String {
    let mut css = String::from("<style>\n");

    for token in ALL_TOKEN_TYPES {
        if token == TokenType::Default {
            continue;
        }
        let style = theme.style(token);
        let _ = write!(
            css,
            ".snippet-highlighter .token.{} {{ color: {};",
            token.name(),
            style.color.css()
        );
        if style.bold {
            css.push_str(" font-weight: bold;");
        }
        if style.italic {
            css.push_str(" font-style: italic;");
        }
        css.push_str(" }\n");
    }

    let _ = write!(
        css,
        ".snippet-highlighter .line-number {{ display: inline-block; width: 3em; \
         margin-right: 1em; text-align: right; color: {}; user-select: none; }}\n",
        theme.line_number.css()
    );

    if let Some(extra) = &options.extra_css {
        css.push_str(extra);
        if !extra.ends_with('\n') {
            css.push('\n');
        }
    }

    css.push_str("</style>\n");
    css
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
