//! Physical-plausibility checks.
//!
//! Flags numerical blow-up and the zero-velocity symptom of a failed
//! integrator. The sub-checks run in a fixed order and the first one that
//! fails ends the check:
//! 1. **Velocity magnitude:** any component beyond the velocity bound.
//! 2. **Zero velocities:** more than `floor(3N / 2)` components exactly zero.
//! 3. **Force magnitude:** any component beyond the force bound.

use tracing::{debug, warn};

use crate::common::constants::max_zero_velocity_components;
use crate::common::error::{Discrepancy, ValidationError};
use crate::common::vec3::Axis;
use crate::state::Snapshot;

/// Fails with [`ValidationError::Plausibility`] if the snapshot looks unphysical.
///
/// `max_velocity` and `max_force` are inclusive bounds on the absolute value
/// of each component: a component equal to the bound passes.
///
/// # Errors
///
/// Returns the first [`Discrepancy`] found, in velocity-magnitude,
/// zero-velocity, force-magnitude order.
pub fn check_for_discrepancies<S: Snapshot + ?Sized>(
    state: &S,
    max_velocity: f64,
    max_force: f64,
) -> Result<(), ValidationError> {
    let velocities = state.velocities();
    debug!(
        particles = state.particle_count(),
        max_velocity, max_force, "checking snapshot plausibility"
    );

    let mut zero_count = 0usize;
    for (particle, v) in velocities.iter().enumerate() {
        for axis in Axis::ALL {
            let value = v[axis.index()];
            if value.abs() > max_velocity {
                warn!(particle, axis = %axis, value, "velocity blow-up");
                return Err(Discrepancy::VelocityBlowUp {
                    particle,
                    axis,
                    value,
                    limit: max_velocity,
                }
                .into());
            }
        }
        zero_count += v.iter().filter(|&&c| c == 0.0).count();
    }

    let limit = max_zero_velocity_components(velocities.len());
    if zero_count > limit {
        warn!(count = zero_count, limit, "velocities reset to zero");
        return Err(Discrepancy::ZeroVelocities {
            count: zero_count,
            limit,
        }
        .into());
    }

    for (particle, f) in state.forces().iter().enumerate() {
        for axis in Axis::ALL {
            let value = f[axis.index()];
            if value.abs() > max_force {
                warn!(particle, axis = %axis, value, "force blow-up");
                return Err(Discrepancy::ForceBlowUp {
                    particle,
                    axis,
                    value,
                    limit: max_force,
                }
                .into());
            }
        }
    }

    Ok(())
}
