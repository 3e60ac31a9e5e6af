//! Shared configuration loader for the scrib toolchain.
//!
//! `defaults/scrib.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`ScribConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use scrib_babel::FormatRegistry;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/scrib.default.toml");

/// Top-level configuration consumed by scrib applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ScribConfig {
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

/// Defaults for the convert command.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Output format used when none is requested explicitly.
    pub to: String,
}

/// Defaults for the inspect command.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    /// Transform applied when none is requested explicitly.
    pub transform: String,
}

impl ScribConfig {
    /// Check that the configured output format exists in the registry and
    /// can serialize. Catches a bad `convert.to` at startup rather than on
    /// first use.
    pub fn validate(&self, registry: &FormatRegistry) -> Result<(), ConfigError> {
        let format = registry.get(&self.convert.to).map_err(|e| {
            ConfigError::Message(format!("convert.to: {e}"))
        })?;
        if !format.supports_serialization() {
            return Err(ConfigError::Message(format!(
                "convert.to: format '{}' does not support serialization",
                self.convert.to
            )));
        }
        Ok(())
    }
}

/// Builder that layers configuration sources: embedded defaults first, then
/// any user files, last one wins.
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Loader { builder }
    }

    /// Layer a user configuration file on top of the defaults. Missing files
    /// are skipped silently so callers can probe conventional locations.
    pub fn with_file(mut self, path: &Path) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.to_path_buf()).required(false));
        self
    }

    pub fn load(self) -> Result<ScribConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
