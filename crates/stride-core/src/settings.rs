//! User settings shared across the application.
//!
//! Settings are loaded once into a [`SettingsStore`] and handed to whoever
//! needs them. Changes go through [`SettingsStore::update`], which writes the
//! file and notifies every subscriber.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::{
    error::{Result, StrideError},
    sync::DEFAULT_QUIESCENCE,
};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = StrideError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(StrideError::invalid_input("theme")
                .with_reason(format!("'{s}' is not one of: dark, light"))),
        }
    }
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_QUIESCENCE.as_millis() as u64
}

/// Persisted user settings. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Quiescence window for schedule saves, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            server_url: default_server_url(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Settings {
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Owner of the settings file and the current value.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    current: watch::Sender<Settings>,
}

impl SettingsStore {
    /// Load settings from `path`, falling back to defaults if the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::FileSystem` if the file exists but cannot be
    /// read, or `StrideError::Serialization` if it is not valid JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let settings = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", path.display());
                Settings::default()
            }
            Err(e) => {
                return Err(StrideError::FileSystem { path, source: e });
            }
        };

        let (current, _) = watch::channel(settings);
        Ok(Self { path, current })
    }

    /// Load from the default location.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::XdgDirectory` if the configuration directory
    /// cannot be determined, plus any error from [`SettingsStore::load`].
    pub fn load_default() -> Result<Self> {
        Self::load(Self::default_path()?)
    }

    /// `$XDG_CONFIG_HOME/stride/settings.json` or
    /// `~/.config/stride/settings.json`.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::XdgDirectory` if the directory cannot be created.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stride")
            .place_config_file("settings.json")
            .map_err(|e| StrideError::XdgDirectory(e.to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current(&self) -> Settings {
        self.current.borrow().clone()
    }

    /// Receive the new settings every time they change.
    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.current.subscribe()
    }

    /// Apply `change`, write the file, then notify subscribers.
    ///
    /// Subscribers are not notified when the write fails.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::FileSystem` if the file cannot be written.
    pub fn update<F>(&self, change: F) -> Result<Settings>
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.current();
        change(&mut settings);

        self.write(&settings)?;
        info!("Saved settings to {}", self.path.display());
        self.current.send_replace(settings.clone());
        Ok(settings)
    }

    fn write(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StrideError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let text = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, text).map_err(|e| StrideError::FileSystem {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert_eq!(settings.debounce_window(), Duration::from_millis(800));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"theme": "light"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.debounce_ms, 800);
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::load(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.current(), Settings::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_update_persists_and_notifies() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let store = SettingsStore::load(&path).unwrap();
        let mut rx = store.subscribe();

        store.update(|s| s.theme = Theme::Light).unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().theme, Theme::Light);

        let reloaded = SettingsStore::load(&path).unwrap();
        assert_eq!(reloaded.current().theme, Theme::Light);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            SettingsStore::load(&path),
            Err(StrideError::Serialization { .. })
        ));
    }
}
