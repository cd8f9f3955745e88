//! Settings Persistence
//!
//! Locates the configuration file in the platform config directory and
//! loads or saves it, falling back to defaults when nothing was saved yet.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{ConfigError, SettingsError, SettingsResult};

const APP_DIR: &str = "drawkit";
const CONFIG_FILE: &str = "config.toml";

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    path: PathBuf,
    config: Config,
}

impl SettingsPersistence {
    /// Persistence bound to the platform default location
    pub fn new() -> SettingsResult<Self> {
        Ok(Self::with_path(Self::default_path()?))
    }

    /// Persistence bound to an explicit file, holding default values
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Config::default(),
        }
    }

    /// `<config_dir>/drawkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::NoConfigDirectory(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load the file if it exists; a missing file leaves the defaults in place
    pub fn load(&mut self) -> SettingsResult<&Config> {
        if self.path.exists() {
            self.config = Config::load_from_file(&self.path)?;
            tracing::info!("Loaded settings from {}", self.path.display());
        } else {
            tracing::debug!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            self.config = Config::default();
        }
        Ok(&self.config)
    }

    /// Save to the bound file, creating its directory when needed
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| {
                    SettingsError::ConfigDirectory {
                        path: parent.to_path_buf(),
                        source,
                    }
                })?;
            }
        }
        self.config.save_to_file(&self.path)?;
        tracing::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}
