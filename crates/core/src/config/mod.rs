//! Configuration for the dvar registry
//!
//! This module provides TOML-backed configuration:
//! - [`CoreConfig`] - logging and startup switches
//! - [`DescriptionTable`] - extra dvar descriptions loaded into the registry
//!
//! # Example
//!
//! ```ignore
//! use dvars_core::config::CoreConfig;
//!
//! let config = CoreConfig::load().unwrap_or_default();
//! dvars_core::init(&config);
//! ```
//!
//! # Description Table
//!
//! ```toml
//! [[dvar]]
//! name = "sv_cheats"
//! description = "Allow cheat commands"
//!
//! [[dvar]]
//! name = "0x1A2B3C4D"
//! description = "Unnamed dvar known only by hash"
//! ```

mod loader;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dvars::DvarRegistry;

pub use loader::{
    configs_dir, core_config_path, descriptions_path, dvars_base_dir, CORE_CONFIG_FILE,
    DESCRIPTIONS_FILE,
};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Could not determine config directory from executable location
    #[error("Config directory not available - could not resolve base path")]
    NoConfigDirectory,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Core configuration.
///
/// Loaded from `<base>/configs/core.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Enable debug logging
    pub debug: bool,

    /// Explicit tracing filter, overrides `debug` (e.g. `"dvars_core=trace"`)
    pub log_filter: Option<String>,

    /// Load `dvar_descriptions.toml` into the registry on init
    pub load_descriptions: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
            log_filter: None,
            load_descriptions: true,
        }
    }
}

impl CoreConfig {
    /// Load core config from file, creating default if missing.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&core_config_path()?)
    }

    /// Load from a specific path, creating default if missing.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::debug!("Loaded core config from {:?}", path);
            Ok(config)
        } else {
            let default = Self::default();
            default.save_to(path)?;
            tracing::info!("Created default core config at {:?}", path);
            Ok(default)
        }
    }

    /// Save core config to file.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&core_config_path()?)
    }

    /// Save to a specific path.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved core config to {:?}", path);
        Ok(())
    }

    /// Reload core config from file.
    pub fn reload(&mut self) -> ConfigResult<()> {
        let path = core_config_path()?;
        let content = std::fs::read_to_string(&path)?;
        *self = toml::from_str(&content)?;
        tracing::debug!("Reloaded core config from {:?}", path);
        Ok(())
    }

    /// Tracing filter directive for this config
    pub fn filter_directive(&self) -> &str {
        match &self.log_filter {
            Some(filter) => filter.as_str(),
            None if self.debug => "debug",
            None => "info",
        }
    }
}

/// One entry of the description table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionEntry {
    /// Dvar name, or a `0x` hash literal
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Dvar descriptions loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptionTable {
    #[serde(default, rename = "dvar")]
    pub dvars: Vec<DescriptionEntry>,
}

impl DescriptionTable {
    /// Parse a table from TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a table from a file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded {} dvar descriptions from {:?}", table.dvars.len(), path);
        Ok(table)
    }

    /// Insert every entry into a registry
    ///
    /// Entries whose hash is already registered are skipped. Returns the
    /// number of records actually inserted.
    pub fn apply(&self, registry: &DvarRegistry) -> usize {
        let mut inserted = 0;
        for entry in &self.dvars {
            if registry.insert_named(&entry.name, &entry.description) {
                inserted += 1;
            }
        }
        inserted
    }
}
