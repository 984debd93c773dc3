//! Config loading and persistence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{Context, View};
use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// View used by `list` when none is given.
    pub default_view: View,
    /// Context applied to new tasks when none is given.
    pub default_context: Option<Context>,
    /// How long collaborator-side auxiliary lookups (context vocabulary,
    /// timeline horizons) stay fresh. The cache itself is an explicit
    /// value with an explicit deadline, never hidden process state.
    pub lookup_ttl_ms: u64,
    /// Task store location; falls back to the XDG data dir.
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_view: View::Open,
            default_context: None,
            lookup_ttl_ms: 300_000,
            store_path: None,
        }
    }
}

pub fn config_path() -> PathBuf {
    crate::paths::config_dir().join("config.toml")
}

pub fn load() -> Result<Config> {
    let path = config_path();
    let contents = fs::read_to_string(&path)
        .map_err(|e| config_error(format!("failed to read {}: {e}", path.display())))?;
    toml::from_str(&contents)
        .map_err(|e| config_error(format!("failed to parse {}: {e}", path.display())))
}

pub fn load_or_init() -> Config {
    let path = config_path();
    if path.exists() {
        match load() {
            Ok(cfg) => return cfg,
            Err(e) => {
                tracing::warn!("config load failed, using defaults: {e}");
                return Config::default();
            }
        }
    }

    let cfg = Config::default();
    if let Err(e) = write_config(&path, &cfg) {
        tracing::warn!("failed to write default config: {e}");
    }
    cfg
}

pub fn write_config(path: &Path, cfg: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| config_error(format!("failed to create {}: {e}", dir.display())))?;
    }
    let contents = toml::to_string_pretty(cfg)
        .map_err(|e| config_error(format!("failed to render config: {e}")))?;
    atomic_write(path, contents.as_bytes())
}

/// Apply environment overrides on top of a loaded config.
///
/// `TM_STORE` points at an alternate task store; `TM_CONTEXT` sets the
/// default context (unknown codes are warned about and ignored).
pub fn apply_env_overrides(cfg: &mut Config) {
    if let Ok(path) = std::env::var("TM_STORE")
        && !path.trim().is_empty()
    {
        cfg.store_path = Some(PathBuf::from(path));
    }
    if let Ok(raw) = std::env::var("TM_CONTEXT")
        && !raw.trim().is_empty()
    {
        match raw.parse::<Context>() {
            Ok(ctx) => cfg.default_context = Some(ctx),
            Err(e) => tracing::warn!("ignoring TM_CONTEXT: {e}"),
        }
    }
}

fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| config_error("config path missing parent directory".to_string()))?;
    let temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        config_error(format!(
            "failed to create temp file in {}: {e}",
            dir.display()
        ))
    })?;
    fs::write(temp.path(), data)
        .map_err(|e| config_error(format!("failed to write config temp file: {e}")))?;
    temp.persist(path).map_err(|e| {
        config_error(format!(
            "failed to persist config to {}: {e}",
            path.display()
        ))
    })?;
    Ok(())
}

fn config_error(reason: String) -> Error {
    Error::Config { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert_eq!(cfg.default_view, View::Open);
        assert_eq!(cfg.default_context, None);
        assert!(cfg.lookup_ttl_ms > 0);
    }

    #[test]
    fn toml_round_trip() {
        let mut cfg = Config::default();
        cfg.default_view = View::Execute;
        cfg.default_context = Some(Context::Wknw);
        cfg.store_path = Some(PathBuf::from("/tmp/tasks.json"));

        let rendered = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.default_view, View::Execute);
        assert_eq!(parsed.default_context, Some(Context::Wknw));
        assert_eq!(parsed.store_path, cfg.store_path);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str("default_view = \"paper\"\n").unwrap();
        assert_eq!(parsed.default_view, View::Paper);
        assert_eq!(parsed.lookup_ttl_ms, Config::default().lookup_ttl_ms);
    }

    #[test]
    fn write_config_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::default();
        write_config(&path, &cfg).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: Config = toml::from_str(&contents).unwrap();
        assert_eq!(parsed.default_view, cfg.default_view);
    }
}
