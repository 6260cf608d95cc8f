//! Theme - Design system for rendered components
//!
//! This module defines all visual configuration used by a session:
//! - Icons
//! - Typography (one style per renderable kind)
//! - Layout constants (width, borders, highlight theme, templates)
//! - The spacing rule table
//!
//! Centralizing these makes it easy to:
//! - Maintain visual consistency
//! - Swap the whole theme at runtime via `configure`
//! - Keep spacing decisions in data instead of scattered prints

use crossterm::style::{Attribute, Color, ContentStyle};

use crate::component::ComponentKind;
use crate::error::{Error, Result};

/// Default theme for a session
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Status icons
    pub icons: Icons,
    /// Text styles per renderable kind
    pub typography: Typography,
    /// Layout constants
    pub layout: Layout,
    /// Blank-line rules between components
    pub spacing: Spacing,
}

impl Theme {
    /// Check every field that can be invalid, before any rendering happens.
    ///
    /// Called by `configure` and the themed constructors so that bad values
    /// surface at configuration time, not at render time.
    pub fn validate(&self) -> Result<()> {
        if self.layout.width < 20 {
            return Err(Error::Config(format!(
                "layout width {} is too narrow (minimum 20 columns)",
                self.layout.width
            )));
        }
        if !crate::code::theme_exists(&self.layout.code_theme) {
            return Err(Error::Config(format!(
                "unknown code highlight theme '{}'",
                self.layout.code_theme
            )));
        }
        if self.layout.progress_chars.chars().count() < 2 {
            return Err(Error::Config(
                "progress_chars needs at least a fill and an empty glyph".to_string(),
            ));
        }
        if self.layout.tick_chars.chars().count() < 2 {
            return Err(Error::Config(
                "tick_chars needs at least one frame and a final glyph".to_string(),
            ));
        }
        // Template strings parse or the whole theme is rejected.
        indicatif::ProgressStyle::with_template(&self.layout.spinner_template)?;
        indicatif::ProgressStyle::with_template(&self.layout.progress_template)?;
        indicatif::ProgressStyle::with_template(&self.layout.multi_progress_template)?;
        Ok(())
    }
}

/// Status icons for message and list components
#[derive(Debug, Clone)]
pub struct Icons {
    /// Info message (ℹ)
    pub info: &'static str,
    /// Success message (✓)
    pub success: &'static str,
    /// Warning message (⚠)
    pub warning: &'static str,
    /// Error message (✗)
    pub error: &'static str,
    /// Debug message (◦)
    pub debug: &'static str,
    /// List items (•)
    pub bullet: &'static str,
    /// Suggested commands (→)
    pub arrow: &'static str,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            info: "ℹ",
            success: "✓",
            warning: "⚠",
            error: "✗",
            debug: "◦",
            bullet: "•",
            arrow: "→",
        }
    }
}

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::default()
    }
}

fn fg_attr(color: Color, attribute: Attribute) -> ContentStyle {
    let mut style = fg(color);
    style.attributes.set(attribute);
    style
}

/// Text styles, one per renderable kind
#[derive(Debug, Clone)]
pub struct Typography {
    /// Application name above a header
    pub app_name: ContentStyle,
    /// Header titles
    pub header_title: ContentStyle,
    /// Header subtitles
    pub header_subtitle: ContentStyle,
    /// Section titles
    pub section: ContentStyle,
    /// Info messages
    pub info: ContentStyle,
    /// Success messages
    pub success: ContentStyle,
    /// Warning messages
    pub warning: ContentStyle,
    /// Error messages
    pub error: ContentStyle,
    /// Debug messages
    pub debug: ContentStyle,
    /// List items
    pub list_item: ContentStyle,
    /// Summary labels
    pub summary_label: ContentStyle,
    /// Summary values
    pub summary_value: ContentStyle,
    /// Titles above tables and code blocks
    pub block_title: ContentStyle,
    /// Table header cells
    pub table_header: ContentStyle,
    /// Rules and dividers
    pub rule: ContentStyle,
    /// Suggested commands
    pub suggestion: ContentStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            app_name: fg(Color::DarkGrey),
            header_title: fg_attr(Color::White, Attribute::Bold),
            header_subtitle: fg(Color::DarkGrey),
            section: fg(Color::DarkGrey),
            info: ContentStyle::default(),
            success: fg(Color::Green),
            warning: fg(Color::Yellow),
            error: fg(Color::Red),
            debug: fg_attr(Color::DarkGrey, Attribute::Dim),
            list_item: ContentStyle::default(),
            summary_label: fg(Color::DarkGrey),
            summary_value: ContentStyle::default(),
            block_title: fg_attr(Color::White, Attribute::Bold),
            table_header: fg(Color::DarkGrey),
            rule: fg(Color::DarkGrey),
            suggestion: fg(Color::Cyan),
        }
    }
}

/// Border style for data tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBorder {
    /// Full grid with row and column separators
    Full,
    /// Horizontal rules only
    Horizontal,
    /// No borders at all
    None,
}

/// Layout constants
#[derive(Debug, Clone)]
pub struct Layout {
    /// Width for rules, dividers, and section padding
    pub width: usize,
    /// Table border style
    pub table_border: TableBorder,
    /// Dim every other table row
    pub row_banding: bool,
    /// Syntect theme name for code blocks
    pub code_theme: String,
    /// Spinner frame template
    pub spinner_template: String,
    /// Single progress bar template
    pub progress_template: String,
    /// Per-task template for multi-task progress
    pub multi_progress_template: String,
    /// Fill/empty glyphs for progress bars
    pub progress_chars: String,
    /// Spinner animation frames, last char shown when finished
    pub tick_chars: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 70,
            table_border: TableBorder::Horizontal,
            row_banding: false,
            code_theme: "base16-ocean.dark".to_string(),
            spinner_template: "{spinner} {msg}".to_string(),
            progress_template: "{msg} {bar:24} {percent:>3}%".to_string(),
            multi_progress_template: "{prefix:>10} {bar:24} {pos}/{len} {msg}".to_string(),
            progress_chars: "▓▓░".to_string(),
            tick_chars: "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏✔".to_string(),
        }
    }
}

/// One (previous, next) exception to the per-kind spacing defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacingOverride {
    /// Kind of the previously rendered component
    pub prev: ComponentKind,
    /// Kind about to render
    pub next: ComponentKind,
    /// Blank lines to emit instead of the default
    pub blanks: usize,
}

/// Blank-line rules between components.
///
/// Each kind carries a default lead-in count; `overrides` lists the
/// (previous, next) pairs that deviate. Lookups are total: every kind maps
/// to a field in `default_for`, so a missing rule cannot exist.
#[derive(Debug, Clone)]
pub struct Spacing {
    /// Before a header
    pub header: usize,
    /// Before a section title
    pub section: usize,
    /// Before any message kind
    pub message: usize,
    /// Before a list item
    pub list_item: usize,
    /// Before a data table
    pub table: usize,
    /// Before a code or JSON block
    pub code: usize,
    /// Before a summary block
    pub summary: usize,
    /// Before a progress bar or spinner
    pub progress: usize,
    /// Before a prompt or confirmation
    pub prompt: usize,
    /// Before a divider rule
    pub divider: usize,
    /// Before a suggestions block
    pub suggestions: usize,
    /// Pair-specific exceptions, first match wins
    pub overrides: Vec<SpacingOverride>,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            header: 2,
            section: 2,
            message: 0,
            list_item: 0,
            table: 1,
            code: 1,
            summary: 1,
            progress: 1,
            prompt: 1,
            divider: 1,
            suggestions: 1,
            overrides: vec![
                // A section directly under its header sits closer.
                SpacingOverride {
                    prev: ComponentKind::Header,
                    next: ComponentKind::Section,
                    blanks: 1,
                },
                // Consecutive questions chain without gaps.
                SpacingOverride {
                    prev: ComponentKind::Prompt,
                    next: ComponentKind::Prompt,
                    blanks: 0,
                },
                SpacingOverride {
                    prev: ComponentKind::Prompt,
                    next: ComponentKind::Confirm,
                    blanks: 0,
                },
                SpacingOverride {
                    prev: ComponentKind::Confirm,
                    next: ComponentKind::Prompt,
                    blanks: 0,
                },
                SpacingOverride {
                    prev: ComponentKind::Confirm,
                    next: ComponentKind::Confirm,
                    blanks: 0,
                },
            ],
        }
    }
}

impl Spacing {
    /// Default lead-in count for a kind, ignoring overrides.
    pub fn default_for(&self, kind: ComponentKind) -> usize {
        match kind {
            ComponentKind::Header => self.header,
            ComponentKind::Section => self.section,
            ComponentKind::Info
            | ComponentKind::Success
            | ComponentKind::Warning
            | ComponentKind::Error
            | ComponentKind::Debug => self.message,
            ComponentKind::ListItem => self.list_item,
            ComponentKind::Table => self.table,
            ComponentKind::Code | ComponentKind::Json => self.code,
            ComponentKind::Summary => self.summary,
            ComponentKind::Progress | ComponentKind::Spinner => self.progress,
            ComponentKind::Prompt | ComponentKind::Confirm => self.prompt,
            ComponentKind::Divider => self.divider,
            ComponentKind::Suggestions => self.suggestions,
        }
    }

    /// Lead-in count for `next` when `prev` was the previous component.
    pub fn between(&self, prev: ComponentKind, next: ComponentKind) -> usize {
        self.overrides
            .iter()
            .find(|o| o.prev == prev && o.next == next)
            .map(|o| o.blanks)
            .unwrap_or_else(|| self.default_for(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.icons.success, "✓");
        assert_eq!(theme.icons.error, "✗");
        assert_eq!(theme.layout.width, 70);
        assert_eq!(theme.spacing.header, 2);
        assert_eq!(theme.spacing.message, 0);
    }

    #[test]
    fn test_default_theme_validates() {
        assert!(Theme::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_narrow_width() {
        let mut theme = Theme::default();
        theme.layout.width = 5;
        assert!(matches!(theme.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_code_theme() {
        let mut theme = Theme::default();
        theme.layout.code_theme = "no-such-theme".to_string();
        assert!(matches!(theme.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_template() {
        let mut theme = Theme::default();
        theme.layout.progress_template = "{elapsed".to_string();
        assert!(matches!(theme.validate(), Err(Error::Template(_))));
    }

    #[test]
    fn test_spacing_defaults_are_total() {
        let spacing = Spacing::default();
        for kind in [
            ComponentKind::Header,
            ComponentKind::Section,
            ComponentKind::Info,
            ComponentKind::Success,
            ComponentKind::Warning,
            ComponentKind::Error,
            ComponentKind::Debug,
            ComponentKind::ListItem,
            ComponentKind::Table,
            ComponentKind::Code,
            ComponentKind::Json,
            ComponentKind::Summary,
            ComponentKind::Progress,
            ComponentKind::Spinner,
            ComponentKind::Prompt,
            ComponentKind::Confirm,
            ComponentKind::Divider,
            ComponentKind::Suggestions,
        ] {
            // default_for is an exhaustive match, the loop documents totality
            let _ = spacing.default_for(kind);
        }
    }

    #[test]
    fn test_spacing_override_beats_default() {
        let spacing = Spacing::default();
        assert_eq!(
            spacing.between(ComponentKind::Header, ComponentKind::Section),
            1
        );
        assert_eq!(
            spacing.between(ComponentKind::Info, ComponentKind::Section),
            spacing.section
        );
    }

    #[test]
    fn test_message_spacing_below_header_spacing() {
        let spacing = Spacing::default();
        let between_messages = spacing.between(ComponentKind::Info, ComponentKind::Success);
        let before_header = spacing.between(ComponentKind::Info, ComponentKind::Header);
        assert_eq!(between_messages, spacing.message);
        assert!(between_messages < before_header);
    }
}
