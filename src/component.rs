//! Component descriptors and the per-session render history.
//!
//! Every rendered element leaves one immutable [`Component`] record in the
//! session's [`History`]. The spacing engine reads the history to decide how
//! many blank lines to emit before the next element.

/// Kind tag for every renderable element.
///
/// Closed set, exhaustively matched in the spacing table and the render
/// dispatch, so adding a kind is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Header,
    Section,
    Info,
    Success,
    Warning,
    Error,
    Debug,
    ListItem,
    Table,
    Code,
    Json,
    Summary,
    Progress,
    Spinner,
    Prompt,
    Confirm,
    Divider,
    Suggestions,
}

impl ComponentKind {
    /// Get the string representation of the kind
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Header => "header",
            ComponentKind::Section => "section",
            ComponentKind::Info => "info",
            ComponentKind::Success => "success",
            ComponentKind::Warning => "warning",
            ComponentKind::Error => "error",
            ComponentKind::Debug => "debug",
            ComponentKind::ListItem => "list-item",
            ComponentKind::Table => "table",
            ComponentKind::Code => "code",
            ComponentKind::Json => "json",
            ComponentKind::Summary => "summary",
            ComponentKind::Progress => "progress",
            ComponentKind::Spinner => "spinner",
            ComponentKind::Prompt => "prompt",
            ComponentKind::Confirm => "confirm",
            ComponentKind::Divider => "divider",
            ComponentKind::Suggestions => "suggestions",
        }
    }

    /// True for the five free-text message kinds.
    pub fn is_message(self) -> bool {
        matches!(
            self,
            ComponentKind::Info
                | ComponentKind::Success
                | ComponentKind::Warning
                | ComponentKind::Error
                | ComponentKind::Debug
        )
    }
}

/// Record of one rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// What was rendered.
    pub kind: ComponentKind,
    /// True if rendered while a grouping scope was open.
    pub group_member: bool,
}

/// Append-only log of rendered components for one session.
///
/// Insertion order is render order. The log only shrinks through
/// [`History::clear`], which accompanies clearing the terminal itself.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Component>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rendered component. Always succeeds.
    pub fn append(&mut self, component: Component) {
        self.entries.push(component);
    }

    /// The most recently rendered component, if any.
    pub fn last(&self) -> Option<&Component> {
        self.entries.last()
    }

    /// Number of components rendered this session.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been rendered (or the session was just cleared).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The component the spacing engine should treat as "previous".
    ///
    /// Normally the last entry. If the last entry was rendered inside a
    /// group, the anchor is the *first* member of that trailing group run:
    /// a closed group is spaced as one atomic element.
    pub fn spacing_anchor(&self) -> Option<&Component> {
        let last = self.entries.last()?;
        if !last.group_member {
            return Some(last);
        }
        self.entries
            .iter()
            .rev()
            .take_while(|c| c.group_member)
            .last()
    }

    /// Forget everything rendered so far.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
