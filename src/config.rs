// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.
//!
//! Every field has a default, so an empty or missing file yields
//! [`SearchConfig::default`]. A file might look like:
//!
//! ```toml
//! precision = 1e-6
//! seconds_per_unit = 12.5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::geometry::constants::{DEFAULT_PRECISION, DEFAULT_UPPER_BOUND, SECONDS_PER_UNIT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Interval width at which the bisection stops.
    #[serde(default = "default_precision")]
    pub precision: f64,

    /// Volume assumed to fill any target.
    #[serde(default = "default_upper_bound")]
    pub upper_bound: f64,

    /// Time taken to pour one unit, used to report the result.
    #[serde(default = "default_seconds_per_unit")]
    pub seconds_per_unit: f64,
}

fn default_precision() -> f64 {
    DEFAULT_PRECISION
}
fn default_upper_bound() -> f64 {
    DEFAULT_UPPER_BOUND
}
fn default_seconds_per_unit() -> f64 {
    SECONDS_PER_UNIT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            upper_bound: default_upper_bound(),
            seconds_per_unit: default_seconds_per_unit(),
        }
    }
}

impl SearchConfig {
    /// Load configuration from a TOML file, or the defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the precision, keeping the other settings.
    pub fn with_precision(mut self, precision: f64) -> Result<Self, ConfigError> {
        self.precision = precision;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.precision.is_finite() && self.precision > 0.0) {
            return Err(ConfigError::Validation(format!(
                "precision must be a positive number, got {}",
                self.precision
            )));
        }

        if !(self.upper_bound.is_finite() && self.upper_bound > self.precision) {
            return Err(ConfigError::Validation(format!(
                "upper_bound must be finite and larger than precision, got {}",
                self.upper_bound
            )));
        }

        if !(self.seconds_per_unit.is_finite() && self.seconds_per_unit >= 0.0) {
            return Err(ConfigError::Validation(format!(
                "seconds_per_unit must be non-negative, got {}",
                self.seconds_per_unit
            )));
        }

        Ok(())
    }
}
