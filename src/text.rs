//! Text components - headers, sections, messages, lists, summaries
//!
//! Each function draws one component through the output buffer using the
//! session theme. Lead spacing is the dispatcher's job, not handled here.

use std::io;

use crossterm::style::ContentStyle;

use crate::buffer::OutputBuffer;
use crate::theme::Theme;

/// Draw a page header: optional app name, bold title, optional subtitle,
/// and a closing rule.
pub fn header(
    buffer: &mut OutputBuffer,
    theme: &Theme,
    title: &str,
    subtitle: Option<&str>,
    app_name: Option<&str>,
) -> io::Result<()> {
    if let Some(app) = app_name {
        let app = app.to_uppercase();
        buffer.write_line(&theme.typography.app_name.apply(&app).to_string())?;
    }
    match subtitle {
        Some(sub) => buffer.write_line(&format!(
            "{}  {}",
            theme.typography.header_title.apply(title),
            theme.typography.header_subtitle.apply(sub)
        ))?,
        None => buffer.write_line(&theme.typography.header_title.apply(title).to_string())?,
    }
    rule(buffer, &theme.typography.rule, theme.layout.width)
}

/// Draw a section title with a trailing rule, e.g. `FETCH ──────`.
pub fn section(buffer: &mut OutputBuffer, theme: &Theme, title: &str) -> io::Result<()> {
    let title = title.to_uppercase();
    let used = title.chars().count() + 1;
    let dashes = "─".repeat(theme.layout.width.saturating_sub(used));
    buffer.write_line(&format!(
        "{} {}",
        theme.typography.section.apply(&title),
        theme.typography.rule.apply(&dashes)
    ))
}

/// Draw an icon-prefixed message line.
pub fn message(
    buffer: &mut OutputBuffer,
    icon: &str,
    style: &ContentStyle,
    text: &str,
) -> io::Result<()> {
    buffer.write_line(&format!("{} {}", style.apply(icon), style.apply(text)))
}

/// Draw a bulleted list item.
pub fn list_item(buffer: &mut OutputBuffer, theme: &Theme, text: &str) -> io::Result<()> {
    buffer.write_line(&format!(
        "  {} {}",
        theme.typography.rule.apply(theme.icons.bullet),
        theme.typography.list_item.apply(text)
    ))
}

/// Draw aligned label/value pairs, labels padded to the widest.
pub fn summary(buffer: &mut OutputBuffer, theme: &Theme, items: &[(&str, &str)]) -> io::Result<()> {
    let label_width = items
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in items {
        let padded = format!("{label:<label_width$}");
        buffer.write_line(&format!(
            "  {}  {}",
            theme.typography.summary_label.apply(&padded),
            theme.typography.summary_value.apply(value)
        ))?;
    }
    Ok(())
}

/// Draw a full-width divider rule.
pub fn divider(buffer: &mut OutputBuffer, theme: &Theme) -> io::Result<()> {
    rule(buffer, &theme.typography.rule, theme.layout.width)
}

/// Draw a titled block of suggested commands.
pub fn suggestions(
    buffer: &mut OutputBuffer,
    theme: &Theme,
    title: &str,
    items: &[&str],
) -> io::Result<()> {
    buffer.write_line(&format!(
        "{} {}",
        theme.typography.info.apply(theme.icons.info),
        theme.typography.info.apply(title)
    ))?;
    for item in items {
        buffer.write_line(&format!(
            "  {} {}",
            theme.typography.rule.apply(theme.icons.arrow),
            theme.typography.suggestion.apply(item)
        ))?;
    }
    Ok(())
}

fn rule(buffer: &mut OutputBuffer, style: &ContentStyle, width: usize) -> io::Result<()> {
    buffer.write_line(&style.apply(&"─".repeat(width)).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn render(f: impl FnOnce(&mut OutputBuffer, &Theme) -> io::Result<()>) -> String {
        let capture = Capture::default();
        let mut buffer = OutputBuffer::new(Box::new(capture.clone()));
        let theme = Theme::default();
        f(&mut buffer, &theme).unwrap();
        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn test_header_contains_title_and_rule() {
        let out = render(|b, t| header(b, t, "Deploy", Some("production"), Some("acme")));
        assert!(out.contains("ACME"));
        assert!(out.contains("Deploy"));
        assert!(out.contains("production"));
        assert!(out.contains("─"));
    }

    #[test]
    fn test_section_uppercases_title() {
        let out = render(|b, t| section(b, t, "fetch"));
        assert!(out.contains("FETCH"));
        assert!(out.contains("─"));
    }

    #[test]
    fn test_summary_aligns_labels() {
        let out = render(|b, t| summary(b, t, &[("Name", "apl"), ("Version", "1.0")]));
        // Shorter label is padded to the longer one.
        assert!(out.contains("Name   "));
        assert!(out.contains("Version"));
        assert!(out.contains("1.0"));
    }

    #[test]
    fn test_suggestions_lists_items() {
        let out = render(|b, t| suggestions(b, t, "Try one of:", &["apl install", "apl list"]));
        assert!(out.contains("Try one of:"));
        assert!(out.contains("apl install"));
        assert!(out.contains("apl list"));
    }
}
