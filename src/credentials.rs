//! API key lookup from the environment and `.env` files.

use std::path::Path;

use crate::error::{Result, SagmalError};
use crate::paths;

/// Environment variable holding the DeepL API key.
pub const API_KEY_VAR: &str = "SAGMAL_DEEPL_API_KEY";

/// Loads `./.env`, then `~/.env`, into the process environment.
///
/// Variables that are already set are never overwritten, so the process
/// environment wins over the local file, which wins over the home file.
/// Missing files are skipped; unparsable ones are skipped with a warning.
pub fn load_environment() {
    load_env_file(&paths::local_env_path());
    if let Some(home_env) = paths::home_env_path() {
        load_env_file(&home_env);
    }
}

fn load_env_file(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => log::debug!("No env file at {}", path.display()),
        Err(e) => log::warn!("Ignoring env file {}: {e}", path.display()),
    }
}

/// Returns the DeepL API key.
///
/// # Errors
///
/// Returns [`SagmalError::MissingCredential`] if the variable is unset or
/// empty.
pub fn api_key() -> Result<String> {
    match std::env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(SagmalError::MissingCredential { var: API_KEY_VAR }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn with_api_key<F: FnOnce()>(value: Option<&str>, f: F) {
        let original = std::env::var(API_KEY_VAR).ok();
        match value {
            // SAFETY: tests touching the environment are serialized
            Some(v) => unsafe { std::env::set_var(API_KEY_VAR, v) },
            None => unsafe { std::env::remove_var(API_KEY_VAR) },
        }

        f();

        // Restore
        if let Some(val) = original {
            unsafe { std::env::set_var(API_KEY_VAR, val) };
        } else {
            unsafe { std::env::remove_var(API_KEY_VAR) };
        }
    }

    #[test]
    #[serial]
    fn test_api_key_present() {
        with_api_key(Some("abc:fx"), || {
            assert_eq!(api_key().unwrap(), "abc:fx");
        });
    }

    #[test]
    #[serial]
    fn test_api_key_missing() {
        with_api_key(None, || {
            let err = api_key().unwrap_err();
            assert!(matches!(err, SagmalError::MissingCredential { .. }));
            assert!(err.to_string().contains(API_KEY_VAR));
        });
    }

    #[test]
    #[serial]
    fn test_api_key_empty_counts_as_missing() {
        with_api_key(Some("  "), || {
            assert!(api_key().is_err());
        });
    }

    #[test]
    #[serial]
    fn test_env_file_does_not_override_existing_value() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = temp_dir.path().join(".env");
        fs::write(&env_path, format!("{API_KEY_VAR}=from-file\n")).unwrap();

        with_api_key(Some("from-process"), || {
            load_env_file(&env_path);
            assert_eq!(api_key().unwrap(), "from-process");
        });
    }

    #[test]
    #[serial]
    fn test_env_file_supplies_missing_value() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = temp_dir.path().join(".env");
        fs::write(&env_path, format!("{API_KEY_VAR}=from-file\n")).unwrap();

        with_api_key(None, || {
            load_env_file(&env_path);
            assert_eq!(api_key().unwrap(), "from-file");
        });
    }

    #[test]
    fn test_missing_env_file_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        load_env_file(&temp_dir.path().join(".env"));
    }
}
