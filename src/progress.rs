//! Progress indicators - spinners and single/multi-task bars
//!
//! Frame drawing and refresh are indicatif's job; these handles own the
//! bars, clamp positions, and finalize on drop so an early return or panic
//! still leaves the terminal in order. Updates redraw in place and do not
//! touch the session history.

use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::error::Result;
use crate::theme::Layout;

fn draw_target(interactive: bool) -> ProgressDrawTarget {
    if interactive {
        ProgressDrawTarget::stdout()
    } else {
        ProgressDrawTarget::hidden()
    }
}

/// An animated spinner with a message, cleared when stopped.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub(crate) fn start(layout: &Layout, message: &str, interactive: bool) -> Result<Self> {
        let style =
            ProgressStyle::with_template(&layout.spinner_template)?.tick_chars(&layout.tick_chars);
        let bar = ProgressBar::with_draw_target(None, draw_target(interactive))
            .with_style(style)
            .with_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Ok(Self { bar })
    }

    /// Replace the spinner message in place.
    pub fn update_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Stop the animation and clear the spinner line.
    pub fn stop(self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

/// A single percentage bar, updated in place.
pub struct ProgressHandle {
    bar: ProgressBar,
}

impl ProgressHandle {
    pub(crate) fn start(layout: &Layout, description: &str, interactive: bool) -> Result<Self> {
        let style = ProgressStyle::with_template(&layout.progress_template)?
            .progress_chars(&layout.progress_chars);
        let bar = ProgressBar::with_draw_target(Some(100), draw_target(interactive))
            .with_style(style)
            .with_message(description.to_string());
        Ok(Self { bar })
    }

    /// Move the bar to `percent` (clamped to 100), optionally relabeling it.
    pub fn update_progress(&self, percent: u64, label: Option<&str>) {
        self.bar.set_position(percent.min(100));
        if let Some(label) = label {
            self.bar.set_message(label.to_string());
        }
    }

    /// Current position, 0..=100.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finalize the bar at its current position.
    pub fn stop(self) {
        self.bar.finish();
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish();
        }
    }
}

/// Identifier returned by [`MultiProgressHandle::add_task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId(usize);

struct Task {
    bar: ProgressBar,
    total: u64,
}

/// Several independently-advancing named tasks sharing one frame.
pub struct MultiProgressHandle {
    multi: MultiProgress,
    style: ProgressStyle,
    tasks: Vec<Task>,
}

impl MultiProgressHandle {
    pub(crate) fn start(layout: &Layout, interactive: bool) -> Result<Self> {
        let multi = MultiProgress::with_draw_target(draw_target(interactive));
        let style = ProgressStyle::with_template(&layout.multi_progress_template)?
            .progress_chars(&layout.progress_chars);
        Ok(Self {
            multi,
            style,
            tasks: Vec::new(),
        })
    }

    /// Register a sub-task with its own bar and declared total.
    pub fn add_task(&mut self, name: &str, total: u64, short_id: &str) -> TaskId {
        let bar = self.multi.add(ProgressBar::new(total));
        bar.set_style(self.style.clone());
        bar.set_prefix(short_id.to_string());
        bar.set_message(name.to_string());
        self.tasks.push(Task { bar, total });
        TaskId(self.tasks.len() - 1)
    }

    /// Advance a task. Advancing past the declared total clamps at it.
    pub fn update(&self, task: TaskId, advance: u64) {
        if let Some(task) = self.tasks.get(task.0) {
            let next = task.bar.position().saturating_add(advance).min(task.total);
            task.bar.set_position(next);
        }
    }

    /// Current position of a task, if the id is known.
    pub fn position(&self, task: TaskId) -> Option<u64> {
        self.tasks.get(task.0).map(|t| t.bar.position())
    }

    /// Finalize every task bar at its current position.
    pub fn stop(self) {
        for task in &self.tasks {
            task.bar.finish();
        }
    }
}

impl Drop for MultiProgressHandle {
    fn drop(&mut self) {
        for task in &self.tasks {
            if !task.bar.is_finished() {
                task.bar.finish();
            }
        }
    }
}
