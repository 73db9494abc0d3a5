//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. All helpers return
//! plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for error labels
    pub fn error<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.red().bold()))
    }
}

fn paint<T: Display>(text: &T, styled: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        styled(text)
    }
}
