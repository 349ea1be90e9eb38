//! Cross-run comparison of two snapshots.
//!
//! The reference snapshot usually comes from a trusted platform and the given
//! one from the platform under benchmark. This module provides:
//! 1. **Energies:** Absolute difference of potential, then kinetic, energy.
//! 2. **Forces:** Root-mean-square error of per-particle force magnitudes.
//! 3. **Preconditions:** Tolerance and particle-count validation.

use tracing::{debug, trace, warn};

use crate::common::error::{Divergence, InputError, ValidationError};
use crate::common::vec3::{Vec3, magnitude};
use crate::state::Snapshot;

/// Rejects NaN and negative tolerances. Infinity is accepted.
///
/// # Errors
///
/// Returns [`InputError::InvalidTolerance`].
pub fn check_tolerance(tolerance: f64) -> Result<(), ValidationError> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(InputError::InvalidTolerance { tolerance }.into());
    }
    Ok(())
}

/// Fails with [`ValidationError::Divergence`] if the potential or kinetic
/// energies of the two snapshots differ by more than `tolerance`.
///
/// Potential energy is compared first; a divergence there is reported without
/// looking at kinetic energy.
///
/// # Errors
///
/// Returns [`Divergence::PotentialEnergy`] or [`Divergence::KineticEnergy`],
/// or [`InputError::InvalidTolerance`] for an unusable tolerance.
pub fn compare_energies<A, B>(reference: &A, given: &B, tolerance: f64) -> Result<(), ValidationError>
where
    A: Snapshot + ?Sized,
    B: Snapshot + ?Sized,
{
    check_tolerance(tolerance)?;

    let (reference_pe, given_pe) = (reference.potential_energy(), given.potential_energy());
    let difference = (reference_pe - given_pe).abs();
    trace!(reference = reference_pe, given = given_pe, difference, "potential energy");
    if difference > tolerance {
        warn!(difference, tolerance, "potential energy diverged");
        return Err(Divergence::PotentialEnergy {
            reference: reference_pe,
            given: given_pe,
            difference,
            tolerance,
        }
        .into());
    }

    let (reference_ke, given_ke) = (reference.kinetic_energy(), given.kinetic_energy());
    let difference = (reference_ke - given_ke).abs();
    trace!(reference = reference_ke, given = given_ke, difference, "kinetic energy");
    if difference > tolerance {
        warn!(difference, tolerance, "kinetic energy diverged");
        return Err(Divergence::KineticEnergy {
            reference: reference_ke,
            given: given_ke,
            difference,
            tolerance,
        }
        .into());
    }

    Ok(())
}

/// Root-mean-square error between per-particle force magnitudes.
///
/// Only magnitudes are compared; a force that changed direction but not
/// length contributes nothing. Returns `0.0` for empty input.
///
/// # Errors
///
/// Returns [`InputError::ParticleCountMismatch`] if the slices differ in length.
pub fn force_magnitude_rmse(reference: &[Vec3], given: &[Vec3]) -> Result<f64, ValidationError> {
    if reference.len() != given.len() {
        return Err(InputError::ParticleCountMismatch {
            reference: reference.len(),
            given: given.len(),
        }
        .into());
    }
    if reference.is_empty() {
        return Ok(0.0);
    }

    let sum_sq: f64 = reference
        .iter()
        .zip(given)
        .map(|(a, b)| {
            let error = magnitude(a) - magnitude(b);
            error * error
        })
        .sum();

    Ok((sum_sq / reference.len() as f64).sqrt())
}

/// Fails with [`ValidationError::Divergence`] if the force-magnitude RMSE
/// between the snapshots exceeds `tolerance`.
///
/// # Errors
///
/// Returns [`Divergence::ForceRmse`], [`InputError::ParticleCountMismatch`]
/// when the particle counts differ, or [`InputError::InvalidTolerance`].
pub fn compare_forces<A, B>(reference: &A, given: &B, tolerance: f64) -> Result<(), ValidationError>
where
    A: Snapshot + ?Sized,
    B: Snapshot + ?Sized,
{
    check_tolerance(tolerance)?;
    debug!(
        reference = reference.particle_count(),
        given = given.particle_count(),
        tolerance,
        "comparing forces"
    );

    let rmse = force_magnitude_rmse(reference.forces(), given.forces())?;
    trace!(rmse, "force magnitude RMSE");
    if rmse > tolerance {
        warn!(rmse, tolerance, "forces diverged");
        return Err(Divergence::ForceRmse { rmse, tolerance }.into());
    }
    Ok(())
}
