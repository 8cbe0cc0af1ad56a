//! Configuration file support for Artidose.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/artidose/config.toml`.

use crate::weight::DEFAULT_WEIGHT_KG;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dosing: DosingConfig,

    #[serde(default)]
    pub formulations: FormulationsConfig,
}

/// Dosing display configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DosingConfig {
    /// Weight pre-filled in the form interface; validated like any other input
    #[serde(default = "default_weight_kg")]
    pub default_weight_kg: f64,
}

impl Default for DosingConfig {
    fn default() -> Self {
        Self {
            default_weight_kg: default_weight_kg(),
        }
    }
}

/// Custom formulation definition, appended to the built-in catalog
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CustomFormulation {
    pub name: String,
    pub contraindications: Vec<String>,
    pub max_dosage_per_kg: f64,
}

/// Formulation catalog extensions
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct FormulationsConfig {
    #[serde(default)]
    pub custom: Vec<CustomFormulation>,
}

fn default_weight_kg() -> f64 {
    DEFAULT_WEIGHT_KG
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
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("artidose").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
