//! Error types for sagmal.
//!
//! [`SagmalError`] covers problems with arguments, config files and
//! credentials. [`ApiError`] covers failures reported by the translation
//! service and is never folded into [`SagmalError`].

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigScope;

/// Maximum text length accepted on the command line, in UTF-16 code units.
pub const MAX_TEXT_LENGTH: usize = 1024;

/// Which half of a language option a conflict is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageAxis {
    Source,
    Target,
}

impl fmt::Display for LanguageAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Application errors caused by user input or local configuration.
#[derive(Debug, Error)]
pub enum SagmalError {
    /// The text payload is longer than [`MAX_TEXT_LENGTH`].
    #[error("Text too long: {length} characters (maximum: {max}).")]
    TextTooLong { length: usize, max: usize },

    /// The leading and trailing language options disagree.
    #[error("Conflicting {axis} languages: '{first}' and '{last}'")]
    ConflictingLanguage {
        axis: LanguageAxis,
        first: String,
        last: String,
    },

    /// A config `options` mapping uses a key reserved for internal use.
    #[error(
        "Invalid {scope} config: '__path' is an internal-only field and cannot be used in configuration"
    )]
    ReservedConfigField { scope: ConfigScope },

    /// A config file exists but cannot be used.
    #[error("Invalid config file: {}\n  {reason}", path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    /// No API key could be found.
    #[error(
        "DeepL API key not found. Please set {var} as an environment variable or in a .env file."
    )]
    MissingCredential { var: &'static str },
}

impl SagmalError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::TextTooLong { .. } | Self::ConflictingLanguage { .. } => exitcode::DATAERR,
            Self::ReservedConfigField { .. }
            | Self::InvalidConfig { .. }
            | Self::MissingCredential { .. } => exitcode::CONFIG,
        }
    }
}

/// Errors reported by the translation service or the transport to it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to connect to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request failed with status {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Short label for the kind of failure, e.g. `Status 456`.
    pub fn kind(&self) -> String {
        match self {
            Self::Connection { .. } => "Connection".to_string(),
            Self::Status { status, .. } => format!("Status {}", status.as_u16()),
            Self::InvalidResponse(_) => "InvalidResponse".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SagmalError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_names_axis_and_values() {
        let err = SagmalError::ConflictingLanguage {
            axis: LanguageAxis::Target,
            first: "en".to_string(),
            last: "de".to_string(),
        };
        assert_eq!(err.to_string(), "Conflicting target languages: 'en' and 'de'");
    }

    #[test]
    fn test_reserved_field_message_names_scope() {
        let err = SagmalError::ReservedConfigField {
            scope: ConfigScope::Local,
        };
        let message = err.to_string();
        assert!(message.contains("local config"));
        assert!(message.contains("__path"));
    }

    #[test]
    fn test_text_too_long_message() {
        let err = SagmalError::TextTooLong {
            length: 1025,
            max: MAX_TEXT_LENGTH,
        };
        assert_eq!(
            err.to_string(),
            "Text too long: 1025 characters (maximum: 1024)."
        );
    }

    #[test]
    fn test_api_error_kind() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::from_u16(456).unwrap(),
            message: "Quota exceeded".to_string(),
        };
        assert_eq!(err.kind(), "Status 456");
        assert_eq!(
            ApiError::InvalidResponse("empty".to_string()).kind(),
            "InvalidResponse"
        );
    }

    #[test]
    fn test_exit_codes() {
        let too_long = SagmalError::TextTooLong { length: 2000, max: 1024 };
        assert_eq!(too_long.exit_code(), exitcode::DATAERR);

        let missing = SagmalError::MissingCredential { var: "X" };
        assert_eq!(missing.exit_code(), exitcode::CONFIG);
    }
}
