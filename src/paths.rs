//! Locations of config and `.env` files.
//!
//! Home-scoped files live directly in the user's home directory, local-scoped
//! files in the current working directory.

use std::path::PathBuf;

/// File name of both the home and the local config file.
pub const CONFIG_FILE_NAME: &str = ".sagmalrc.json";

/// File name of the dotenv files that may carry the API key.
pub const ENV_FILE_NAME: &str = ".env";

/// Returns `~/.sagmalrc.json`, or `None` if the home directory is unknown.
pub fn home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Returns `./.sagmalrc.json`.
pub fn local_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Returns `~/.env`, or `None` if the home directory is unknown.
pub fn home_env_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(ENV_FILE_NAME))
}

/// Returns `./.env`.
pub fn local_env_path() -> PathBuf {
    PathBuf::from(ENV_FILE_NAME)
}
