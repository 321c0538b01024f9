//! File System Utilities
//!
//! Configuration directory lookup. The workspace never writes user data, so
//! these helpers only resolve paths and read the optional config file.

use crate::constants::CONFIG_FILE_NAME;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/eduai/` or `$XDG_CONFIG_HOME/eduai/`
/// - **macOS**: `~/Library/Application Support/com.eduai.eduai/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\eduai\eduai\config\`
pub fn get_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "eduai", "eduai") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    Ok(project_dirs.config_dir().to_path_buf())
}

/// Path of the config file (may not exist)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Read the config file, returning `None` when it does not exist
pub fn read_config_file() -> Result<Option<String>> {
    let path = get_config_path()?;
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(path)?))
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
