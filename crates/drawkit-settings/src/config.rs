//! Configuration for the DrawKit editor
//!
//! Supports JSON and TOML file formats. Configuration is organized into
//! sections:
//! - Interaction thresholds (hit radius, containment margin, create extent)
//! - Shape creation defaults
//! - View zoom limits
//! - Logging

use drawkit_core::{CreateMode, ShapeKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Pointer interaction thresholds, in logical units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Distance within which a click grabs a vertex or an edge
    pub hit_radius: f64,
    /// Margin added to a shape body when testing whether a click hit it
    pub contains_margin: f64,
    /// Minimum magnitude or area a create drag must reach to commit
    pub min_create_extent: f64,
    /// Pointer positions closer than this are treated as unmoved
    pub same_point_epsilon: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            hit_radius: 10.0,
            contains_margin: 10.0,
            min_create_extent: 1.0,
            same_point_epsilon: 0.01,
        }
    }
}

/// Shape creation defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreationSettings {
    /// Shape produced by dragging on empty canvas
    pub default_shape: ShapeKind,
    /// Append to the list, or replace its contents
    pub mode: CreateMode,
    /// Select the shape once it has been created
    pub select_created: bool,
}

impl Default for CreationSettings {
    fn default() -> Self {
        Self {
            default_shape: ShapeKind::Polygon,
            mode: CreateMode::Append,
            select_created: true,
        }
    }
}

/// View zoom settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplier applied by a single zoom in/out step
    pub zoom_step: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            min_zoom: 0.1,
            max_zoom: 50.0,
            zoom_step: 1.2,
        }
    }
}

/// Logging output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level directive, overridden by RUST_LOG
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub interaction: InteractionSettings,
    pub creation: CreationSettings,
    pub view: ViewSettings,
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let interaction = &self.interaction;
        if !(interaction.hit_radius > 0.0) {
            return Err(ConfigError::out_of_range(
                "interaction.hit_radius",
                interaction.hit_radius,
            ));
        }

        if !(interaction.contains_margin >= 0.0) {
            return Err(ConfigError::out_of_range(
                "interaction.contains_margin",
                interaction.contains_margin,
            ));
        }

        if !(interaction.min_create_extent >= 0.0) {
            return Err(ConfigError::out_of_range(
                "interaction.min_create_extent",
                interaction.min_create_extent,
            ));
        }

        if !(interaction.same_point_epsilon >= 0.0) {
            return Err(ConfigError::out_of_range(
                "interaction.same_point_epsilon",
                interaction.same_point_epsilon,
            ));
        }

        let view = &self.view;
        if !(view.min_zoom > 0.0 && view.min_zoom < view.max_zoom) {
            return Err(ConfigError::out_of_range("view.min_zoom", view.min_zoom));
        }

        if !(view.zoom >= view.min_zoom && view.zoom <= view.max_zoom) {
            return Err(ConfigError::out_of_range("view.zoom", view.zoom));
        }

        if !(view.zoom_step > 1.0) {
            return Err(ConfigError::out_of_range("view.zoom_step", view.zoom_step));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::out_of_range("logging.level", "<empty>"));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
