//! Validation, configuration, and environment errors.
//!
//! This module defines every failure the crate can report. It provides:
//! 1. **Validation Failures:** Corruption, plausibility, divergence, and invalid-input errors,
//!    each carrying the offending index, axis, value, and threshold.
//! 2. **Configuration Errors:** Malformed or out-of-range validator settings.
//! 3. **Environment Errors:** The operating system could not report the executable's path.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use super::vec3::{Axis, Quantity};

/// Location of the first NaN found in one quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NanSite {
    /// Which sequence contained the NaN.
    pub quantity: Quantity,
    /// Particle index within the sequence.
    pub particle: usize,
    /// Component within the particle's vector.
    pub axis: Axis,
}

impl std::fmt::Display for NanSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NaNs detected in {}: ({}, {})",
            self.quantity, self.particle, self.axis
        )
    }
}

/// A value outside the physically reasonable range.
#[derive(Clone, Debug, PartialEq, Serialize, Error)]
pub enum Discrepancy {
    /// A velocity component exceeded the plausibility bound.
    #[error("Discrepancy: Velocities are blowing up: ({particle}, {axis}) = {value}")]
    VelocityBlowUp {
        /// Particle index.
        particle: usize,
        /// Offending component.
        axis: Axis,
        /// Observed component value.
        value: f64,
        /// Bound that was exceeded.
        limit: f64,
    },

    /// Too many velocity components are exactly zero.
    #[error(
        "Discrepancy: More than half of all velocities set exactly to zero! ({count} zero components, limit {limit})"
    )]
    ZeroVelocities {
        /// Number of exactly-zero components.
        count: usize,
        /// Largest tolerated count.
        limit: usize,
    },

    /// A force component exceeded the plausibility bound.
    #[error("Discrepancy: Forces are blowing up: ({particle}, {axis}) = {value}")]
    ForceBlowUp {
        /// Particle index.
        particle: usize,
        /// Offending component.
        axis: Axis,
        /// Observed component value.
        value: f64,
        /// Bound that was exceeded.
        limit: f64,
    },
}

/// Two independently computed states disagree beyond tolerance.
#[derive(Clone, Debug, PartialEq, Serialize, Error)]
pub enum Divergence {
    /// Potential energies differ.
    #[error(
        "Potential energy error of {difference}, threshold of {tolerance}\nReference potential energy: {reference} | Given potential energy: {given}"
    )]
    PotentialEnergy {
        /// Energy of the reference state.
        reference: f64,
        /// Energy of the state under test.
        given: f64,
        /// Absolute difference.
        difference: f64,
        /// Tolerance that was exceeded.
        tolerance: f64,
    },

    /// Kinetic energies differ.
    #[error(
        "Kinetic energy error of {difference}, threshold of {tolerance}\nReference kinetic energy: {reference} | Given kinetic energy: {given}"
    )]
    KineticEnergy {
        /// Energy of the reference state.
        reference: f64,
        /// Energy of the state under test.
        given: f64,
        /// Absolute difference.
        difference: f64,
        /// Tolerance that was exceeded.
        tolerance: f64,
    },

    /// Force magnitudes differ in the root-mean-square sense.
    #[error("Force RMSE error of {rmse} with threshold of {tolerance}")]
    ForceRmse {
        /// Root-mean-square error of per-particle force magnitudes.
        rmse: f64,
        /// Tolerance that was exceeded.
        tolerance: f64,
    },
}

/// A precondition of a check was violated by its arguments.
#[derive(Clone, Debug, PartialEq, Serialize, Error)]
pub enum InputError {
    /// Compared states hold a different number of particles.
    #[error("particle count mismatch: reference has {reference}, given has {given}")]
    ParticleCountMismatch {
        /// Particle count of the reference state.
        reference: usize,
        /// Particle count of the state under test.
        given: usize,
    },

    /// Positions, velocities and forces of one state have different lengths.
    #[error(
        "per-particle sequences disagree: {positions} positions, {velocities} velocities, {forces} forces"
    )]
    SequenceLengthMismatch {
        /// Number of position vectors.
        positions: usize,
        /// Number of velocity vectors.
        velocities: usize,
        /// Number of force vectors.
        forces: usize,
    },

    /// A tolerance was NaN or negative.
    #[error("tolerance must be a non-negative number, got {tolerance}")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },
}

/// Failure of a state check.
///
/// Every check returns `Result<(), ValidationError>`; the variant tells the
/// caller what went wrong and the payload says where.
#[derive(Clone, Debug, PartialEq, Serialize, Error)]
pub enum ValidationError {
    /// Non-finite (NaN) values were found. Holds the first site per quantity.
    #[error("{}", describe_sites(.0))]
    Corruption(Vec<NanSite>),

    /// A value is outside the physically reasonable range.
    #[error(transparent)]
    Plausibility(#[from] Discrepancy),

    /// Two states disagree beyond tolerance.
    #[error(transparent)]
    Divergence(#[from] Divergence),

    /// The arguments violate a precondition.
    #[error(transparent)]
    InvalidInput(#[from] InputError),
}

/// Discriminant of a [`ValidationError`], for callers that only branch on the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// See [`ValidationError::Corruption`].
    Corruption,
    /// See [`ValidationError::Plausibility`].
    Plausibility,
    /// See [`ValidationError::Divergence`].
    Divergence,
    /// See [`ValidationError::InvalidInput`].
    InvalidInput,
}

impl ValidationError {
    /// Returns the kind of failure.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Corruption(_) => ErrorKind::Corruption,
            Self::Plausibility(_) => ErrorKind::Plausibility,
            Self::Divergence(_) => ErrorKind::Divergence,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}

fn describe_sites(sites: &[NanSite]) -> String {
    sites
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors from loading a [`ValidationConfig`](crate::config::ValidationConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("failed to parse validation config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the validator cannot use.
    #[error("invalid validation config: `{field}` = {value} ({reason})")]
    Invalid {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: f64,
        /// What the field requires.
        reason: &'static str,
    },
}

/// The operating system could not report where the running executable lives.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    /// Querying the process image path failed.
    #[error("could not determine path of executable: {source}")]
    ImageQuery {
        /// Underlying OS error.
        #[from]
        source: io::Error,
    },

    /// The image path has no parent directory.
    #[error("executable path {} has no parent directory", .path.display())]
    NoParent {
        /// The path that was returned.
        path: PathBuf,
    },
}
