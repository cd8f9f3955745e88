//! DrawKit Settings Crate
//!
//! Handles editor configuration and settings persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{
    Config, CreationSettings, InteractionSettings, LoggingSettings, ViewSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
