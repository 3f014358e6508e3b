//! Configuration file support for Vitalog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/vitalog/config.toml`.

use crate::{Error, Result};
use crate::units::WeightUnit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub units: UnitsConfig,

    #[serde(default)]
    pub habits: HabitsConfig,

    #[serde(default)]
    pub fasting: FastingConfig,
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

/// Preferred display units
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnitsConfig {
    #[serde(default = "default_weight_unit")]
    pub weight: WeightUnit,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            weight: default_weight_unit(),
        }
    }
}

/// Habit formation parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HabitsConfig {
    #[serde(default = "default_days_to_formation")]
    pub days_to_formation: u32,
}

impl Default for HabitsConfig {
    fn default() -> Self {
        Self {
            days_to_formation: default_days_to_formation(),
        }
    }
}

/// Fasting defaults
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FastingConfig {
    #[serde(default = "default_fasting_target_hours")]
    pub default_target_hours: f64,
}

impl Default for FastingConfig {
    fn default() -> Self {
        Self {
            default_target_hours: default_fasting_target_hours(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("vitalog")
}

fn default_weight_unit() -> WeightUnit {
    WeightUnit::Kg
}

fn default_days_to_formation() -> u32 {
    66
}

fn default_fasting_target_hours() -> f64 {
    16.0
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
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("vitalog").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
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
