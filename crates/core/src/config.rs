//! Configuration for the state validator.
//!
//! This module defines the thresholds and tolerances that parameterise the checks.
//! It provides:
//! 1. **Defaults:** Plausibility bounds and comparison tolerances used when a field is omitted.
//! 2. **Structure:** A flat [`ValidationConfig`] deserialisable from JSON.
//! 3. **Validation:** Rejection of NaN, negative, or zero thresholds before any check runs.
//!
//! Configuration is supplied as JSON by the benchmark driver, or use `ValidationConfig::default()`.

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Default configuration values.
///
/// These mirror the constants in [`crate::common::constants`] so that serde
/// field defaults and `Default` stay in one place.
mod defaults {
    use crate::common::constants;

    /// Largest plausible velocity component.
    pub const MAX_VELOCITY: f64 = constants::MAX_VELOCITY_COMPONENT;

    /// Largest plausible force component.
    pub const MAX_FORCE: f64 = constants::MAX_FORCE_COMPONENT;

    /// Default force RMSE tolerance.
    pub const FORCE_TOLERANCE: f64 = constants::DEFAULT_FORCE_TOLERANCE;

    /// Default energy tolerance.
    pub const ENERGY_TOLERANCE: f64 = constants::DEFAULT_ENERGY_TOLERANCE;
}

/// Thresholds and default tolerances used by the [`Validator`](crate::validate::Validator).
///
/// # Examples
///
/// ```
/// use mdcheck_core::config::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_velocity, 17.47);
/// assert_eq!(config.max_force, 50_000.0);
/// ```
///
/// Omitted fields fall back to their defaults:
///
/// ```
/// use mdcheck_core::config::ValidationConfig;
///
/// let config = ValidationConfig::from_json(r#"{ "energy_tolerance": 2.5 }"#).unwrap();
/// assert_eq!(config.energy_tolerance, 2.5);
/// assert_eq!(config.force_tolerance, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Largest absolute velocity component accepted by the plausibility check.
    #[serde(default = "ValidationConfig::default_max_velocity")]
    pub max_velocity: f64,

    /// Largest absolute force component accepted by the plausibility check.
    #[serde(default = "ValidationConfig::default_max_force")]
    pub max_force: f64,

    /// Force RMSE tolerance used by `Validator::compare`.
    #[serde(default = "ValidationConfig::default_force_tolerance")]
    pub force_tolerance: f64,

    /// Energy tolerance used by `Validator::compare`.
    #[serde(default = "ValidationConfig::default_energy_tolerance")]
    pub energy_tolerance: f64,
}

impl ValidationConfig {
    const fn default_max_velocity() -> f64 {
        defaults::MAX_VELOCITY
    }

    const fn default_max_force() -> f64 {
        defaults::MAX_FORCE
    }

    const fn default_force_tolerance() -> f64 {
        defaults::FORCE_TOLERANCE
    }

    const fn default_energy_tolerance() -> f64 {
        defaults::ENERGY_TOLERANCE
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, and
    /// [`ConfigError::Invalid`] if a value fails [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field is usable.
    ///
    /// Plausibility bounds must be positive (infinity disables the bound);
    /// tolerances must be non-negative. NaN is rejected everywhere.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_velocity", self.max_velocity),
            ("max_force", self.max_force),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    value,
                    reason: "must be greater than zero",
                });
            }
        }

        let non_negative = [
            ("force_tolerance", self.force_tolerance),
            ("energy_tolerance", self.energy_tolerance),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    value,
                    reason: "must be zero or greater",
                });
            }
        }

        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_velocity: defaults::MAX_VELOCITY,
            max_force: defaults::MAX_FORCE,
            force_tolerance: defaults::FORCE_TOLERANCE,
            energy_tolerance: defaults::ENERGY_TOLERANCE,
        }
    }
}
