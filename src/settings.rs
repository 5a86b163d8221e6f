//! User preferences with an explicit load-at-startup / save-on-change
//! lifecycle.
//!
//! Preferences are a scoped object handed to whoever needs them, not
//! ambient globals. Loading tolerates a missing or malformed file by
//! falling back to defaults (with a warning); saving propagates errors to
//! the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::sound::SoundPrefs;

/// Color theme for the rendering surface.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// All persisted preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub sound: SoundPrefs,
    pub theme: Theme,
}

/// Errors surfaced when writing settings back to disk.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
    #[error("failed to write settings to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
}

impl Settings {
    /// Default on-disk location, e.g. `~/.config/agent-hq/settings.toml`.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let dirs = ProjectDirs::from("io", "agentlist", "agent-hq")
            .ok_or(SettingsError::NoConfigDir)?;
        Ok(dirs.config_dir().join("settings.toml"))
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unreadable. Preference corruption is never fatal.
    pub fn load_or_default(path: &Path) -> Settings {
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(path = %path.display(), %err, "malformed settings; using defaults");
                    Settings::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Settings::default(),
            Err(err) => {
                warn!(path = %path.display(), %err, "unreadable settings; using defaults");
                Settings::default()
            }
        }
    }

    /// Persist to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let raw = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, raw).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
