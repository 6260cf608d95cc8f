//! Console - the session facade
//!
//! One `Console` owns one theme, one render history, and one output sink.
//! Every public operation follows the same protocol: build the component
//! descriptor, ask the spacing engine for lead-in blank lines, emit them,
//! delegate content drawing, then append the descriptor to history.
//!
//! `Console` is a cloneable handle over shared session state so that RAII
//! guards (grouping, progress) can reach the session from anywhere. A
//! process-wide default instance is available through [`console`]; the
//! explicit-instance API is the primary path.

use std::io::Write;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use serde::Serialize;
use tracing::{debug, trace};

use crate::buffer::OutputBuffer;
use crate::code;
use crate::component::{Component, ComponentKind, History};
use crate::error::Result;
use crate::progress::{MultiProgressHandle, ProgressHandle, Spinner};
use crate::prompt::{self, PromptOptions};
use crate::spacing::compute_lead_spacing;
use crate::table::{self, Row};
use crate::text;
use crate::theme::Theme;

struct Inner {
    theme: Theme,
    app_name: Option<String>,
    history: History,
    group_depth: usize,
    buffer: OutputBuffer,
    /// True when the sink is the real stdout; progress frames draw there.
    interactive: bool,
}

/// A cloneable handle to one output session.
#[derive(Clone)]
pub struct Console {
    inner: Arc<Mutex<Inner>>,
}

impl Console {
    /// Session writing to stdout with the default theme.
    pub fn new() -> Self {
        Self::build(OutputBuffer::stdout(), true, Theme::default())
    }

    /// Session writing to stdout with a custom theme, validated eagerly.
    pub fn with_theme(theme: Theme) -> Result<Self> {
        theme.validate()?;
        Ok(Self::build(OutputBuffer::stdout(), true, theme))
    }

    /// Session writing to an arbitrary sink. Progress frames are hidden
    /// since there is no terminal to animate on.
    pub fn with_writer(sink: Box<dyn Write + Send>) -> Self {
        Self::build(OutputBuffer::new(sink), false, Theme::default())
    }

    fn build(buffer: OutputBuffer, interactive: bool, theme: Theme) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                theme,
                app_name: None,
                history: History::new(),
                group_depth: 0,
                buffer,
                interactive,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the session's app name and theme for all subsequent renders.
    ///
    /// The theme is validated here so bad values fail now, not mid-render.
    /// Already-rendered output is unaffected.
    pub fn configure(&self, app_name: impl Into<String>, theme: Theme) -> Result<()> {
        theme.validate()?;
        let mut inner = self.lock();
        inner.app_name = Some(app_name.into());
        inner.theme = theme;
        debug!("session reconfigured");
        Ok(())
    }

    /// Snapshot of the active theme.
    pub fn theme(&self) -> Theme {
        self.lock().theme.clone()
    }

    /// The configured application name, if any.
    pub fn app_name(&self) -> Option<String> {
        self.lock().app_name.clone()
    }

    /// Number of components rendered since the session started or was
    /// last cleared.
    pub fn component_count(&self) -> usize {
        self.lock().history.len()
    }

    /// The four-step render protocol shared by every component.
    fn dispatch(
        &self,
        kind: ComponentKind,
        render: impl FnOnce(&mut OutputBuffer, &Theme) -> Result<()>,
    ) -> Result<()> {
        let mut inner = self.lock();
        let in_group = inner.group_depth > 0;
        let lead = compute_lead_spacing(&inner.history, kind, in_group, &inner.theme.spacing);
        trace!(kind = kind.as_str(), lead, "render component");
        inner.buffer.blank_lines(lead)?;
        let Inner { buffer, theme, .. } = &mut *inner;
        render(buffer, theme)?;
        inner.buffer.flush()?;
        inner.history.append(Component {
            kind,
            group_member: in_group,
        });
        Ok(())
    }

    /// Spacing and bookkeeping for components whose content is drawn by an
    /// external collaborator (prompts, progress frames).
    fn lead_in(&self, kind: ComponentKind) -> Result<()> {
        self.dispatch(kind, |_, _| Ok(()))
    }

    /// Page header: optional app name line, title, subtitle, closing rule.
    ///
    /// `app_name` falls back to the name given to [`Console::configure`].
    pub fn header(
        &self,
        title: &str,
        subtitle: Option<&str>,
        app_name: Option<&str>,
    ) -> Result<()> {
        let fallback = self.lock().app_name.clone();
        let app = app_name.map(str::to_string).or(fallback);
        self.dispatch(ComponentKind::Header, |buffer, theme| {
            Ok(text::header(buffer, theme, title, subtitle, app.as_deref())?)
        })
    }

    /// Section title with a trailing rule.
    pub fn section(&self, title: &str) -> Result<()> {
        self.dispatch(ComponentKind::Section, |buffer, theme| {
            Ok(text::section(buffer, theme, title)?)
        })
    }

    /// Informational message.
    pub fn info(&self, message: &str) -> Result<()> {
        self.dispatch(ComponentKind::Info, |buffer, theme| {
            Ok(text::message(
                buffer,
                theme.icons.info,
                &theme.typography.info,
                message,
            )?)
        })
    }

    /// Success message.
    pub fn success(&self, message: &str) -> Result<()> {
        self.dispatch(ComponentKind::Success, |buffer, theme| {
            Ok(text::message(
                buffer,
                theme.icons.success,
                &theme.typography.success,
                message,
            )?)
        })
    }

    /// Warning message.
    pub fn warning(&self, message: &str) -> Result<()> {
        self.dispatch(ComponentKind::Warning, |buffer, theme| {
            Ok(text::message(
                buffer,
                theme.icons.warning,
                &theme.typography.warning,
                message,
            )?)
        })
    }

    /// Error message.
    pub fn error(&self, message: &str) -> Result<()> {
        self.dispatch(ComponentKind::Error, |buffer, theme| {
            Ok(text::message(
                buffer,
                theme.icons.error,
                &theme.typography.error,
                message,
            )?)
        })
    }

    /// Debug message, dimmed.
    pub fn debug(&self, message: &str) -> Result<()> {
        self.dispatch(ComponentKind::Debug, |buffer, theme| {
            Ok(text::message(
                buffer,
                theme.icons.debug,
                &theme.typography.debug,
                message,
            )?)
        })
    }

    /// Bulleted list item.
    pub fn list_item(&self, text: &str) -> Result<()> {
        self.dispatch(ComponentKind::ListItem, |buffer, theme| {
            Ok(text::list_item(buffer, theme, text)?)
        })
    }

    /// Data table from insertion-ordered records. Columns are the union of
    /// keys across rows, in first-seen order.
    pub fn table(&self, rows: &[Row], title: Option<&str>) -> Result<()> {
        self.dispatch(ComponentKind::Table, |buffer, theme| {
            if let Some(title) = title {
                buffer.write_line(&theme.typography.block_title.apply(title).to_string())?;
            }
            buffer.write_line(&table::build_table(theme, rows).to_string())?;
            Ok(())
        })
    }

    /// Syntax-highlighted code block.
    pub fn code(
        &self,
        source: &str,
        language: &str,
        title: Option<&str>,
        line_numbers: bool,
    ) -> Result<()> {
        self.render_code(ComponentKind::Code, source, language, title, line_numbers)
    }

    /// Pretty-printed, highlighted JSON rendering of any serializable value.
    pub fn json<T: Serialize>(&self, data: &T, title: Option<&str>) -> Result<()> {
        let pretty = serde_json::to_string_pretty(data)?;
        self.render_code(ComponentKind::Json, &pretty, "json", title, false)
    }

    fn render_code(
        &self,
        kind: ComponentKind,
        source: &str,
        language: &str,
        title: Option<&str>,
        line_numbers: bool,
    ) -> Result<()> {
        self.dispatch(kind, |buffer, theme| {
            if let Some(title) = title {
                buffer.write_line(&theme.typography.block_title.apply(title).to_string())?;
            }
            for line in code::highlight(source, language, theme, line_numbers)? {
                buffer.write_line(&line)?;
            }
            Ok(())
        })
    }

    /// Aligned label/value pairs.
    pub fn summary(&self, items: &[(&str, &str)]) -> Result<()> {
        self.dispatch(ComponentKind::Summary, |buffer, theme| {
            Ok(text::summary(buffer, theme, items)?)
        })
    }

    /// Full-width divider rule.
    pub fn divider(&self) -> Result<()> {
        self.dispatch(ComponentKind::Divider, |buffer, theme| {
            Ok(text::divider(buffer, theme)?)
        })
    }

    /// Titled block of suggested commands.
    pub fn suggestions(&self, title: &str, items: &[&str]) -> Result<()> {
        self.dispatch(ComponentKind::Suggestions, |buffer, theme| {
            Ok(text::suggestions(buffer, theme, title, items)?)
        })
    }

    /// Ask for a typed value. Spacing and history are handled here; input
    /// handling, validation, and retries are dialoguer's.
    pub fn prompt<T>(&self, text: &str, options: PromptOptions<T>) -> Result<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: std::fmt::Debug + ToString,
    {
        self.lead_in(ComponentKind::Prompt)?;
        prompt::input(text, options)
    }

    /// Yes/no confirmation with a preselected answer.
    pub fn confirm(&self, text: &str, default: bool) -> Result<bool> {
        self.lead_in(ComponentKind::Confirm)?;
        prompt::confirm(text, default)
    }

    /// Pick one entry from a list. `None` if the user backs out.
    pub fn select(&self, title: &str, options: &[&str], default_index: usize) -> Result<Option<usize>> {
        self.lead_in(ComponentKind::Prompt)?;
        prompt::select(title, options, default_index)
    }

    /// Animated spinner, cleared when the handle stops or drops.
    pub fn spinner(&self, message: &str) -> Result<Spinner> {
        self.lead_in(ComponentKind::Spinner)?;
        let (layout, interactive) = {
            let inner = self.lock();
            (inner.theme.layout.clone(), inner.interactive)
        };
        Spinner::start(&layout, message, interactive)
    }

    /// Single percentage bar updated in place through the returned handle.
    pub fn progress(&self, description: &str) -> Result<ProgressHandle> {
        self.lead_in(ComponentKind::Progress)?;
        let (layout, interactive) = {
            let inner = self.lock();
            (inner.theme.layout.clone(), inner.interactive)
        };
        ProgressHandle::start(&layout, description, interactive)
    }

    /// Multi-task progress frame; sub-tasks are added through the handle.
    pub fn multi_progress(&self, description: &str) -> Result<MultiProgressHandle> {
        self.dispatch(ComponentKind::Progress, |buffer, theme| {
            buffer.write_line(&theme.typography.block_title.apply(description).to_string())?;
            Ok(())
        })?;
        let (layout, interactive) = {
            let inner = self.lock();
            (inner.theme.layout.clone(), inner.interactive)
        };
        MultiProgressHandle::start(&layout, interactive)
    }

    /// Open a grouping scope: components rendered while the guard lives
    /// get zero lead spacing and the whole group is spaced as one element.
    /// Scopes nest; spacing resumes when the outermost guard drops.
    pub fn block(&self) -> BlockGuard {
        self.lock().group_depth += 1;
        BlockGuard {
            console: self.clone(),
        }
    }

    /// Clear the terminal and forget the render history. The next render
    /// behaves like the first of a fresh session.
    pub fn clear(&self) -> Result<()> {
        let mut inner = self.lock();
        debug!("clear session");
        inner.history.clear();
        inner.buffer.clear_screen()?;
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

/// Keeps a grouping scope open; dropping it closes the scope on every
/// exit path, including unwinding.
#[must_use = "the grouping scope closes as soon as this guard drops"]
pub struct BlockGuard {
    console: Console,
}

impl Drop for BlockGuard {
    fn drop(&mut self) {
        let mut inner = self.console.lock();
        inner.group_depth = inner.group_depth.saturating_sub(1);
    }
}

/// Singleton instance of the default session.
static CONSOLE: OnceLock<Console> = OnceLock::new();

/// The process-wide default session, created lazily on first use.
///
/// State persists for the process lifetime and is reset only by explicit
/// `configure`/`clear` calls. Prefer owning a [`Console`] where practical.
pub fn console() -> Console {
    CONSOLE.get_or_init(Console::new).clone()
}
