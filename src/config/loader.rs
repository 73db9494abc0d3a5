use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Result, SagmalError};
use crate::paths;

/// Where a config file was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// `~/.sagmalrc.json`
    Home,
    /// `./.sagmalrc.json`
    Local,
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::Local => f.write_str("local"),
        }
    }
}

/// Untyped contents of one `.sagmalrc.json` file.
///
/// Only the top-level shape is validated when loading. Fields are read through
/// the accessors below; a field holding the wrong JSON type reads as absent.
///
/// ```json
/// {
///   "deepL": {
///     "sourceLang": "ja",
///     "targetLang": "en",
///     "targetLang2": "ja",
///     "options": { "formality": "prefer_less" }
///   },
///   "copyToClipboard": true
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig(Map<String, Value>);

impl RawConfig {
    /// Wraps a decoded JSON value, which must be an object.
    pub fn from_value(value: Value, path: &Path) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(SagmalError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("must be an object, not {}", json_type_name(&other)),
            }),
        }
    }

    pub fn from_json_str(contents: &str, path: &Path) -> Result<Self> {
        let value: Value =
            serde_json::from_str(contents).map_err(|e| SagmalError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("invalid JSON: {e}"),
            })?;

        Self::from_value(value, path)
    }

    /// Loads a config file. A missing file yields an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| SagmalError::InvalidConfig {
            path: path.to_path_buf(),
            reason: format!("cannot read file: {e}"),
        })?;

        let config = Self::from_json_str(&contents, path)?;
        log::debug!("Loaded config file {}", path.display());
        Ok(config)
    }

    /// `deepL.sourceLang`: `None` if absent, `Some(None)` for an explicit
    /// `null` (auto-detect).
    pub fn source_lang(&self) -> Option<Option<&str>> {
        match self.deepl_field("sourceLang")? {
            Value::Null => Some(None),
            Value::String(lang) => Some(Some(lang.as_str())),
            _ => {
                warn_ignored("deepL.sourceLang", "a string or null");
                None
            }
        }
    }

    /// `deepL.targetLang`. `null` reads as absent.
    pub fn target_lang(&self) -> Option<&str> {
        self.deepl_string("targetLang")
    }

    /// `deepL.targetLang2`, the secondary target. `null` reads as absent.
    pub fn target_lang2(&self) -> Option<&str> {
        self.deepl_string("targetLang2")
    }

    /// `deepL.options`, passed through to the translation service.
    pub fn options(&self) -> Option<&Map<String, Value>> {
        match self.deepl_field("options")? {
            Value::Object(options) => Some(options),
            Value::Null => None,
            _ => {
                warn_ignored("deepL.options", "an object");
                None
            }
        }
    }

    pub fn copy_to_clipboard(&self) -> Option<bool> {
        match self.0.get("copyToClipboard")? {
            Value::Bool(copy) => Some(*copy),
            Value::Null => None,
            _ => {
                warn_ignored("copyToClipboard", "a boolean");
                None
            }
        }
    }

    fn deepl_field(&self, key: &str) -> Option<&Value> {
        match self.0.get("deepL")? {
            Value::Object(section) => section.get(key),
            Value::Null => None,
            _ => {
                warn_ignored("deepL", "an object");
                None
            }
        }
    }

    fn deepl_string(&self, key: &str) -> Option<&str> {
        match self.deepl_field(key)? {
            Value::String(value) => Some(value.as_str()),
            Value::Null => None,
            _ => {
                warn_ignored(&format!("deepL.{key}"), "a string");
                None
            }
        }
    }
}

impl From<Map<String, Value>> for RawConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn warn_ignored(field: &str, expected: &str) {
    log::warn!("Ignoring config field '{field}': expected {expected}");
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Both config files, read once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigInputs {
    pub home: RawConfig,
    pub local: RawConfig,
}

impl ConfigInputs {
    /// Loads `~/.sagmalrc.json` and `./.sagmalrc.json`.
    pub fn load() -> Result<Self> {
        let local_path = paths::local_config_path();
        Self::load_from(paths::home_config_path().as_deref(), &local_path)
    }

    pub fn load_from(home_path: Option<&Path>, local_path: &Path) -> Result<Self> {
        let home = match home_path {
            Some(path) => RawConfig::load(path)?,
            None => {
                log::debug!("Home directory unknown, skipping home config");
                RawConfig::default()
            }
        };

        let local = RawConfig::load(local_path)?;

        Ok(Self { home, local })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn raw(value: Value) -> RawConfig {
        RawConfig::from_value(value, Path::new("test.json")).unwrap()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config = RawConfig::load(&temp_dir.path().join(".sagmalrc.json")).unwrap();
        assert!(config.0.is_empty());
    }

    #[test]
    fn test_load_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".sagmalrc.json");
        fs::write(
            &path,
            r#"{ "deepL": { "targetLang": "ja", "options": { "formality": "more" } }, "copyToClipboard": true }"#,
        )
        .unwrap();

        let config = RawConfig::load(&path).unwrap();
        assert_eq!(config.target_lang(), Some("ja"));
        assert_eq!(config.copy_to_clipboard(), Some(true));
        assert_eq!(
            config.options().and_then(|o| o.get("formality")),
            Some(&json!("more"))
        );
    }

    #[test]
    fn test_load_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".sagmalrc.json");
        fs::write(&path, "{ not json").unwrap();

        let err = RawConfig::load(&path).unwrap_err();
        assert!(matches!(err, SagmalError::InvalidConfig { .. }));
        let message = err.to_string();
        assert!(message.contains("invalid JSON"));
        assert!(message.contains(".sagmalrc.json"));
    }

    #[test]
    fn test_non_object_is_rejected() {
        for (value, name) in [
            (json!([1, 2]), "array"),
            (json!("text"), "string"),
            (json!(42), "number"),
            (json!(true), "boolean"),
            (Value::Null, "null"),
        ] {
            let err = RawConfig::from_value(value, Path::new("x.json")).unwrap_err();
            assert!(
                err.to_string()
                    .contains(&format!("must be an object, not {name}"))
            );
        }
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let config = raw(json!({ "theme": "dark", "deepL": { "glossary": "x" } }));
        assert_eq!(config.0.get("theme"), Some(&json!("dark")));
        assert_eq!(config.target_lang(), None);
    }

    #[test]
    fn test_source_lang_distinguishes_null_from_absent() {
        assert_eq!(raw(json!({})).source_lang(), None);
        assert_eq!(raw(json!({ "deepL": {} })).source_lang(), None);
        assert_eq!(
            raw(json!({ "deepL": { "sourceLang": null } })).source_lang(),
            Some(None)
        );
        assert_eq!(
            raw(json!({ "deepL": { "sourceLang": "ja" } })).source_lang(),
            Some(Some("ja"))
        );
    }

    #[test]
    fn test_wrong_types_read_as_absent() {
        let config = raw(json!({
            "deepL": { "sourceLang": 1, "targetLang": false, "options": [] },
            "copyToClipboard": "yes"
        }));
        assert_eq!(config.source_lang(), None);
        assert_eq!(config.target_lang(), None);
        assert_eq!(config.options(), None);
        assert_eq!(config.copy_to_clipboard(), None);

        let config = raw(json!({ "deepL": "en" }));
        assert_eq!(config.target_lang(), None);
    }

    #[test]
    fn test_load_from_both_scopes() {
        let home_dir = TempDir::new().unwrap();
        let local_dir = TempDir::new().unwrap();
        let home_path = home_dir.path().join(".sagmalrc.json");
        let local_path = local_dir.path().join(".sagmalrc.json");
        fs::write(&home_path, r#"{ "deepL": { "targetLang": "ja" } }"#).unwrap();
        fs::write(&local_path, r#"{ "deepL": { "targetLang": "fr" } }"#).unwrap();

        let inputs = ConfigInputs::load_from(Some(&home_path), &local_path).unwrap();
        assert_eq!(inputs.home.target_lang(), Some("ja"));
        assert_eq!(inputs.local.target_lang(), Some("fr"));
    }
}
