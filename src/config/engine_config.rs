// ABOUTME: Engine configuration with environment variable overrides and validation
// ABOUTME: Default display units and output precision, loaded once into a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine configuration.
//!
//! Configuration comes from defaults overridden by environment variables:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `DIET_DEFAULT_ENERGY_UNIT` | energy unit when none is supplied (`kcal`, `kj`) | `kcal` |
//! | `DIET_DEFAULT_WEIGHT_UNIT` | weight unit when none is supplied (`kg`, `lb`) | `kg` |
//! | `DIET_DEFAULT_HEIGHT_UNIT` | height unit when none is supplied (`cm`, `m`, `ft`) | `cm` |
//! | `DIET_TABLE_PRECISION` | decimal places in table output (0-6) | `1` |

use std::env;
use std::sync::OnceLock;

use diet_core::models::UserUnits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable selecting the default energy unit
pub const ENV_DEFAULT_ENERGY_UNIT: &str = "DIET_DEFAULT_ENERGY_UNIT";
/// Environment variable selecting the default weight unit
pub const ENV_DEFAULT_WEIGHT_UNIT: &str = "DIET_DEFAULT_WEIGHT_UNIT";
/// Environment variable selecting the default height unit
pub const ENV_DEFAULT_HEIGHT_UNIT: &str = "DIET_DEFAULT_HEIGHT_UNIT";
/// Environment variable selecting table output precision
pub const ENV_TABLE_PRECISION: &str = "DIET_TABLE_PRECISION";

/// Highest accepted table precision
pub const MAX_TABLE_PRECISION: usize = 6;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Units used when a goal document does not specify the user's units
    pub default_units: UserUnits,
    /// Decimal places shown in table output
    pub table_precision: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_units: UserUnits::default(),
            table_precision: 1,
        }
    }
}

static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Get the global configuration instance
    ///
    /// Loaded on first access; invalid environment values fall back to defaults.
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unknown unit or an
    /// invalid number, or if validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the table precision is too large
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_precision > MAX_TABLE_PRECISION {
            return Err(ConfigError::ValueOutOfRange(
                "table precision must be between 0 and 6",
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = env::var(ENV_DEFAULT_ENERGY_UNIT) {
            self.default_units.energy = val
                .parse()
                .map_err(|e| ConfigError::Parse(format!("{ENV_DEFAULT_ENERGY_UNIT}: {e}")))?;
        }

        if let Ok(val) = env::var(ENV_DEFAULT_WEIGHT_UNIT) {
            self.default_units.weight = val
                .parse()
                .map_err(|e| ConfigError::Parse(format!("{ENV_DEFAULT_WEIGHT_UNIT}: {e}")))?;
        }

        if let Ok(val) = env::var(ENV_DEFAULT_HEIGHT_UNIT) {
            self.default_units.height = val
                .parse()
                .map_err(|e| ConfigError::Parse(format!("{ENV_DEFAULT_HEIGHT_UNIT}: {e}")))?;
        }

        if let Ok(val) = env::var(ENV_TABLE_PRECISION) {
            self.table_precision = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {ENV_TABLE_PRECISION}")))?;
        }

        Ok(self)
    }
}
