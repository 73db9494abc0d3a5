use anyhow::Error;

use crate::error::{ApiError, SagmalError};
use crate::ui::Style;

/// Formats a fatal error for stderr and picks the exit code.
///
/// Errors from the translation service are labelled separately from
/// sagmal's own errors.
pub fn describe_error(err: &Error) -> (String, exitcode::ExitCode) {
    if let Some(e) = err.downcast_ref::<SagmalError>() {
        (format!("{} > {e}", Style::error("SagmalError")), e.exit_code())
    } else if let Some(e) = err.downcast_ref::<ApiError>() {
        (
            format!("{} > {} > {e}", Style::error("DeepL API Error"), e.kind()),
            exitcode::UNAVAILABLE,
        )
    } else {
        (
            format!("{} > {err:#}", Style::error("Sagmal Unknown Error")),
            exitcode::SOFTWARE,
        )
    }
}
