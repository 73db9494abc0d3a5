//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Command implementations.
pub mod commands;

/// Language options and text from positional arguments.
pub mod positional;

/// Fatal error reporting.
pub mod report;

pub use args::Args;
pub use positional::{PositionalArgs, split_positionals};
pub use report::describe_error;
