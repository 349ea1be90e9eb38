//! Common utilities and types used throughout the validator.
//!
//! This module provides the building blocks shared by the checks and the locator:
//! 1. **Vectors:** The `Vec3` alias, spatial axes, and which quantity a value belongs to.
//! 2. **Constants:** Physical-plausibility thresholds and default tolerances.
//! 3. **Error Handling:** Typed failures carrying offending indices and values.

/// Threshold and tolerance constants.
pub mod constants;

/// Error types for validation, configuration, and the locator.
pub mod error;

/// Vector, axis, and quantity definitions.
pub mod vec3;

pub use error::{
    ConfigError, Discrepancy, Divergence, EnvironmentError, ErrorKind, InputError, NanSite,
    ValidationError,
};
pub use vec3::{Axis, Quantity, Vec3, magnitude};
