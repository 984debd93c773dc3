//! XDG directory helpers for config/data locations.

use std::path::PathBuf;

/// Base directory for configuration files.
///
/// Uses `TM_CONFIG_DIR` if set, otherwise `$XDG_CONFIG_HOME/taskmaster` or
/// `~/.config/taskmaster`.
pub(crate) fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TM_CONFIG_DIR")
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }

    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("/tmp"))
                .join(".config")
        })
        .join("taskmaster")
}

/// Base directory for persistent data (the development task store).
///
/// Uses `TM_DATA_DIR` if set, otherwise `$XDG_DATA_HOME/taskmaster` or
/// `~/.local/share/taskmaster`.
pub(crate) fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TM_DATA_DIR")
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }

    std::env::var("XDG_DATA_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("/tmp"))
                .join(".local")
                .join("share")
        })
        .join("taskmaster")
}

/// Default location of the JSON task store.
#[allow(dead_code)]
pub(crate) fn default_store_path() -> PathBuf {
    data_dir().join("tasks.json")
}
