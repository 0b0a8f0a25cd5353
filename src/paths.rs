//! Path utilities for the per-user configuration file.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// File name of the configuration file, placed directly in the home directory.
pub const CONFIG_FILE_NAME: &str = ".deeplx-cli.yml";

/// Error returned when the current user's home directory is unknown.
#[derive(Debug, thiserror::Error)]
#[error("Failed to determine the current user's home directory")]
pub struct HomeDirNotFound;

/// Returns the path of the configuration file: `~/.deeplx-cli.yml`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_file_in(&home_dir()?))
}

/// Returns the configuration file path inside an arbitrary home directory.
pub fn config_file_in(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE_NAME)
}

/// Returns the user's home directory.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn home_dir() -> Result<PathBuf> {
    Ok(dirs::home_dir().ok_or(HomeDirNotFound)?)
}
