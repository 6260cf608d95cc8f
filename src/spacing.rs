//! Spacing engine - blank lines between components
//!
//! Pure lookup over the render history and the theme's spacing table. The
//! caller emits the returned number of blank lines before drawing.

use crate::component::{ComponentKind, History};
use crate::theme::Spacing;

/// Blank lines to emit before rendering a component of kind `next`.
///
/// Rules, in order:
/// 1. Nothing rendered yet: 0. Output never starts with padding.
/// 2. A grouping scope is open: 0. Grouped elements render contiguously.
/// 3. Otherwise the spacing table decides, keyed on the previous
///    component's kind (see [`History::spacing_anchor`]) and `next`.
pub fn compute_lead_spacing(
    history: &History,
    next: ComponentKind,
    in_group: bool,
    spacing: &Spacing,
) -> usize {
    let Some(anchor) = history.spacing_anchor() else {
        return 0;
    };
    if in_group {
        return 0;
    }
    spacing.between(anchor.kind, next)
}
