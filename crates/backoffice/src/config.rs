//! # Configuration
//!
//! Settings for a back-office instance, loaded from YAML. Every key is optional; missing
//! keys take the values from [`BackOfficeConfig::default`].
//!
//! ```yaml
//! channel_capacity: 64
//! log_filter: "info,backoffice=debug"
//! inventory:
//!   default_low_stock_threshold: 5
//! menu:
//!   target_food_cost_pct: 30
//! haccp:
//!   refrigerator_max_c: 5
//!   freezer_max_c: -18
//!   hot_holding_min_c: 63
//!   cooking_min_c: 75
//!   delivery_max_c: 8
//! ```
//!
//! [`BackOfficeConfig::from_env`] reads the file named by `BACKOFFICE_CONFIG`.

use crate::haccp_actor::HaccpLimits;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Environment variable naming the YAML config file.
pub const CONFIG_ENV_VAR: &str = "BACKOFFICE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackOfficeConfig {
    /// Request queue length of every actor.
    pub channel_capacity: usize,
    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    pub log_filter: String,
    pub inventory: InventorySettings,
    pub menu: MenuSettings,
    pub haccp: HaccpLimits,
}

impl Default for BackOfficeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            log_filter: "info".to_string(),
            inventory: InventorySettings::default(),
            menu: MenuSettings::default(),
            haccp: HaccpLimits::default(),
        }
    }
}

/// Context of the inventory actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventorySettings {
    /// Used for stock items created without their own threshold.
    pub default_low_stock_threshold: Decimal,
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            default_low_stock_threshold: Decimal::from(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    /// Food cost as a percentage of the selling price that suggested prices aim for.
    pub target_food_cost_pct: Decimal,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            target_food_cost_pct: Decimal::from(30),
        }
    }
}

impl BackOfficeConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&raw)?;
        info!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Loads the file named by `BACKOFFICE_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be at least 1".into(),
            ));
        }
        if self.inventory.default_low_stock_threshold < Decimal::ZERO {
            return Err(ConfigError::Invalid(
                "inventory.default_low_stock_threshold must not be negative".into(),
            ));
        }
        let target = self.menu.target_food_cost_pct;
        if target <= Decimal::ZERO || target > Decimal::ONE_HUNDRED {
            return Err(ConfigError::Invalid(format!(
                "menu.target_food_cost_pct must be in (0, 100], got {}",
                target
            )));
        }
        self.haccp.validate().map_err(ConfigError::Invalid)
    }
}
