//! cadence - self-spacing terminal output components
//!
//! Styled text, tables, code blocks, progress indicators, and prompts for
//! command-line applications, with vertical whitespace managed
//! automatically so output reads like a laid-out document instead of a raw
//! stream of prints.
//!
//! # Overview
//!
//! Every rendered element leaves a descriptor in the session's history.
//! Before drawing the next element, the spacing engine looks at the
//! previous descriptor and the theme's spacing table and emits the right
//! number of blank lines. Grouping scopes suspend that spacing so several
//! elements render as one visual unit.
//!
//! # Architecture
//!
//! - **[`Theme`]**: icons, typography, layout constants, and the spacing
//!   rule table; swappable wholesale at runtime.
//! - **[`Console`]**: the session facade. One theme, one history, one
//!   output sink; every operation follows the same dispatch protocol.
//! - **Closed kinds**: [`ComponentKind`] is matched exhaustively, so a new
//!   component kind is a compile-time-checked, single-point change.
//! - **RAII scopes**: grouping and progress hand out guards that restore
//!   session state on every exit path.
//!
//! Drawing itself is delegated: styled text to crossterm, table grids to
//! comfy-table, highlighting to syntect, progress frames to indicatif,
//! interactive input to dialoguer.
//!
//! # Example
//!
//! ```no_run
//! use cadence::Console;
//!
//! fn main() -> cadence::Result<()> {
//!     let cli = Console::new();
//!     cli.header("Deploy", Some("v2.1"), Some("acme"))?;
//!     cli.section("Checks")?;
//!     cli.info("connecting to cluster")?;
//!     cli.success("all 14 checks passed")?;
//!     Ok(())
//! }
//! ```
//!
//! A process-wide default session backs the free functions for quick
//! scripts:
//!
//! ```no_run
//! cadence::info("using the default session")?;
//! cadence::success("done")?;
//! # Ok::<(), cadence::Error>(())
//! ```

pub mod buffer;
pub mod code;
pub mod component;
pub mod console;
pub mod error;
pub mod progress;
pub mod prompt;
pub mod spacing;
pub mod table;
pub mod text;
pub mod theme;

// Re-exports for convenience
pub use component::{Component, ComponentKind, History};
pub use console::{BlockGuard, Console, console};
pub use error::{Error, Result};
pub use progress::{MultiProgressHandle, ProgressHandle, Spinner, TaskId};
pub use prompt::PromptOptions;
pub use table::Row;
pub use theme::{Icons, Layout, Spacing, SpacingOverride, TableBorder, Theme, Typography};

use std::str::FromStr;

use serde::Serialize;

/// Configure the default session's app name and theme.
pub fn configure(app_name: &str, theme: Theme) -> Result<()> {
    console().configure(app_name, theme)
}

/// Render a page header on the default session.
pub fn header(title: &str, subtitle: Option<&str>, app_name: Option<&str>) -> Result<()> {
    console().header(title, subtitle, app_name)
}

/// Render a section title on the default session.
pub fn section(title: &str) -> Result<()> {
    console().section(title)
}

/// Render an info message on the default session.
pub fn info(text: &str) -> Result<()> {
    console().info(text)
}

/// Render a success message on the default session.
pub fn success(text: &str) -> Result<()> {
    console().success(text)
}

/// Render a warning message on the default session.
pub fn warning(text: &str) -> Result<()> {
    console().warning(text)
}

/// Render an error message on the default session.
pub fn error(text: &str) -> Result<()> {
    console().error(text)
}

/// Render a debug message on the default session.
pub fn debug(text: &str) -> Result<()> {
    console().debug(text)
}

/// Render a list item on the default session.
pub fn list_item(text: &str) -> Result<()> {
    console().list_item(text)
}

/// Render a data table on the default session.
pub fn table(rows: &[Row], title: Option<&str>) -> Result<()> {
    console().table(rows, title)
}

/// Render a highlighted code block on the default session.
pub fn code(source: &str, language: &str, title: Option<&str>, line_numbers: bool) -> Result<()> {
    console().code(source, language, title, line_numbers)
}

/// Render a serializable value as highlighted JSON on the default session.
pub fn json<T: Serialize>(data: &T, title: Option<&str>) -> Result<()> {
    console().json(data, title)
}

/// Render aligned label/value pairs on the default session.
pub fn summary(items: &[(&str, &str)]) -> Result<()> {
    console().summary(items)
}

/// Ask for a typed value on the default session.
pub fn prompt<T>(text: &str, options: PromptOptions<T>) -> Result<T>
where
    T: Clone + ToString + FromStr,
    <T as FromStr>::Err: std::fmt::Debug + ToString,
{
    console().prompt(text, options)
}

/// Ask a yes/no question on the default session.
pub fn confirm(text: &str, default: bool) -> Result<bool> {
    console().confirm(text, default)
}

/// Pick one entry from a list on the default session.
pub fn select(title: &str, options: &[&str], default_index: usize) -> Result<Option<usize>> {
    console().select(title, options, default_index)
}

/// Start a spinner on the default session.
pub fn spinner(message: &str) -> Result<Spinner> {
    console().spinner(message)
}

/// Start a progress bar on the default session.
pub fn progress(description: &str) -> Result<ProgressHandle> {
    console().progress(description)
}

/// Start a multi-task progress frame on the default session.
pub fn multi_progress(description: &str) -> Result<MultiProgressHandle> {
    console().multi_progress(description)
}

/// Open a grouping scope on the default session.
pub fn block() -> BlockGuard {
    console().block()
}

/// Render a divider rule on the default session.
pub fn divider() -> Result<()> {
    console().divider()
}

/// Render suggested commands on the default session.
pub fn suggestions(title: &str, items: &[&str]) -> Result<()> {
    console().suggestions(title, items)
}

/// Clear the terminal and reset the default session's history.
pub fn clear() -> Result<()> {
    console().clear()
}
