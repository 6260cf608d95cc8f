//! Code blocks - syntax-highlighted source display
//!
//! Tokenizing and coloring are syntect's job; this module maps a language
//! tag and theme name onto it and shapes the output into lines, with an
//! optional line-number gutter.

use std::sync::LazyLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::{LinesWithEndings, as_24_bit_terminal_escaped};

use crate::error::{Error, Result};
use crate::theme::Theme;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// True if `name` is a known highlight theme. Used by theme validation.
pub fn theme_exists(name: &str) -> bool {
    THEME_SET.themes.contains_key(name)
}

/// Highlight `source` and return one rendered line per source line.
///
/// Unknown language tags fall back to plain text rather than failing; the
/// highlight theme name was validated with the rest of the theme.
pub fn highlight(
    source: &str,
    language: &str,
    theme: &Theme,
    line_numbers: bool,
) -> Result<Vec<String>> {
    let syntax = SYNTAX_SET
        .find_syntax_by_token(language)
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
    let highlight_theme = THEME_SET
        .themes
        .get(&theme.layout.code_theme)
        .ok_or_else(|| {
            Error::Config(format!(
                "unknown code highlight theme '{}'",
                theme.layout.code_theme
            ))
        })?;

    let mut highlighter = HighlightLines::new(syntax, highlight_theme);
    let mut lines = Vec::new();
    for (idx, line) in LinesWithEndings::from(source).enumerate() {
        let ranges = highlighter.highlight_line(line, &SYNTAX_SET)?;
        let mut rendered = as_24_bit_terminal_escaped(&ranges, false);
        while rendered.ends_with('\n') {
            rendered.pop();
        }
        // Stop the last span's color from bleeding into the next line.
        rendered.push_str("\x1b[0m");
        if line_numbers {
            let gutter = theme.typography.rule.apply(format!("{:>4} │", idx + 1));
            lines.push(format!("{gutter} {rendered}"));
        } else {
            lines.push(rendered);
        }
    }
    Ok(lines)
}
