//! Global output configuration.
//!
//! ## Design Principles
//!
//! - The translation goes to stdout, and nothing else does
//! - Progress, diagnostics and errors go to stderr
//! - Quiet mode suppresses the progress spinner
//! - Colors can be disabled via flag or NO_COLOR environment variable

use std::io::IsTerminal;
use std::sync::OnceLock;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // Check NO_COLOR environment variable (https://no-color.org/)
            no_color: std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }
}

impl OutputConfig {
    /// Combines CLI flags with the environment defaults.
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        let defaults = Self::default();
        Self {
            quiet,
            no_color: no_color || defaults.no_color,
        }
    }
}

/// Initialize the global output configuration.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Whether progress indicators should be drawn on stderr.
pub fn show_progress() -> bool {
    !is_quiet() && std::io::stderr().is_terminal()
}
