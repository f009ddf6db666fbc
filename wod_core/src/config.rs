//! Configuration file support for wodgen.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/wodgen/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Catalog source; the built-in catalog is used when `path` is unset
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Request values used when the command line leaves them out
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default = "default_duration_min")]
    pub duration_min: u32,

    #[serde(default)]
    pub equipment: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            duration_min: default_duration_min(),
            equipment: Vec::new(),
        }
    }
}

// Default value functions
fn home_or_cwd() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| home_or_cwd().join(".local/share"));
    base.join("wodgen")
}

fn default_level() -> String {
    "intermediate".into()
}

fn default_duration_min() -> u32 {
    30
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| home_or_cwd().join(".config"));
        base.join("wodgen").join("config.toml")
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Write the configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml_string()?)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Path of the workout store inside the data directory
    pub fn store_path(&self) -> PathBuf {
        self.data.data_dir.join("workouts.jsonl")
    }
}
