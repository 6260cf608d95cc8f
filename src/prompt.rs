//! Interactive input - prompts, confirmations, list selection
//!
//! Line editing, retry-on-invalid, and typed coercion are dialoguer's job.
//! The session facade handles spacing and history; these functions only
//! shape the call.

use std::str::FromStr;

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use crate::error::Result;

/// Options for a typed prompt.
///
/// An explicit struct rather than an open option bag: these are the only
/// knobs this layer forwards. Typed coercion rides on `T: FromStr` inside
/// dialoguer itself.
#[derive(Debug, Clone)]
pub struct PromptOptions<T> {
    /// Value used when the user submits an empty line.
    pub default: Option<T>,
    /// Accept an empty line as valid input.
    pub allow_empty: bool,
}

impl<T> Default for PromptOptions<T> {
    fn default() -> Self {
        Self {
            default: None,
            allow_empty: false,
        }
    }
}

impl<T> PromptOptions<T> {
    /// Options with no default and empty input rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `value` when the user submits an empty line.
    pub fn default_value(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Accept an empty line as valid input.
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }
}

/// Ask for a typed value. Blocks until dialoguer returns or fails.
pub(crate) fn input<T>(text: &str, options: PromptOptions<T>) -> Result<T>
where
    T: Clone + ToString + FromStr,
    <T as FromStr>::Err: std::fmt::Debug + ToString,
{
    let theme = ColorfulTheme::default();
    let mut prompt = Input::<T>::with_theme(&theme).with_prompt(text);
    if let Some(default) = options.default {
        prompt = prompt.default(default);
    }
    if options.allow_empty {
        prompt = prompt.allow_empty(true);
    }
    Ok(prompt.interact_text()?)
}

/// Ask a yes/no question with a preselected answer.
pub(crate) fn confirm(text: &str, default: bool) -> Result<bool> {
    let theme = ColorfulTheme::default();
    Ok(Confirm::with_theme(&theme)
        .with_prompt(text)
        .default(default)
        .interact()?)
}

/// Pick one entry from a list with arrow-key navigation.
///
/// Returns `None` if the user backs out without choosing.
pub(crate) fn select(title: &str, options: &[&str], default_index: usize) -> Result<Option<usize>> {
    let theme = ColorfulTheme::default();
    Ok(Select::with_theme(&theme)
        .with_prompt(title)
        .items(options)
        .default(default_index)
        .interact_opt()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_options_defaults() {
        let options: PromptOptions<String> = PromptOptions::new();
        assert!(options.default.is_none());
        assert!(!options.allow_empty);
    }

    #[test]
    fn test_prompt_options_builder() {
        let options = PromptOptions::new()
            .default_value(8080u16)
            .allow_empty(true);
        assert_eq!(options.default, Some(8080));
        assert!(options.allow_empty);
    }
}
