//! Validation harness for molecular-dynamics state snapshots.
//!
//! This crate inspects the output of an external simulation engine and reports
//! numerical corruption or cross-run inconsistency. It provides:
//! 1. **State:** The [`Snapshot`] accessor trait and an owned [`State`] snapshot.
//! 2. **Validation:** NaN detection, physical-plausibility thresholds, and
//!    energy/force comparison between two independently computed states.
//! 3. **Configuration:** Thresholds and default tolerances, deserialisable from JSON.
//! 4. **Locator:** The directory of the running executable, for co-located resources.
//!
//! The simulation itself (force evaluation, integration) happens elsewhere;
//! nothing here mutates a snapshot.

/// Common types and constants (vectors, axes, thresholds, errors).
pub mod common;
/// Validator configuration (thresholds and default tolerances).
pub mod config;
/// Executable locator (per-OS process image query).
pub mod locator;
/// Simulation state snapshots.
pub mod state;
/// State checks and cross-run comparisons.
pub mod validate;

/// Root configuration type; use `ValidationConfig::default()` or deserialize from JSON.
pub use crate::config::ValidationConfig;
/// Error type returned by every check.
pub use crate::common::error::ValidationError;
/// Read-only view of a snapshot and its owned implementation.
pub use crate::state::{PeriodicBox, Snapshot, State};
/// The state validator and its aggregated report.
pub use crate::validate::{ValidationReport, Validator};
