//! NaN detection.
//!
//! Scans positions, velocities and forces component-wise. Every quantity is
//! scanned even after an earlier one turned up a NaN, so a single failure
//! names the first bad component of each corrupted quantity.

use tracing::{debug, warn};

use crate::common::error::{NanSite, ValidationError};
use crate::common::vec3::{Axis, Quantity, Vec3};
use crate::state::Snapshot;

/// Fails with [`ValidationError::Corruption`] if any position, velocity or
/// force component is NaN.
///
/// Infinities and large finite values pass; they are the plausibility
/// check's concern.
///
/// # Errors
///
/// Returns [`ValidationError::Corruption`] holding the first NaN site of each
/// affected quantity, in position, velocity, force order.
pub fn check_for_nans<S: Snapshot + ?Sized>(state: &S) -> Result<(), ValidationError> {
    debug!(particles = state.particle_count(), "scanning snapshot for NaNs");

    let sites: Vec<NanSite> = Quantity::ALL
        .into_iter()
        .filter_map(|quantity| first_nan(quantity, state.sequence(quantity)))
        .collect();

    if sites.is_empty() {
        return Ok(());
    }

    for site in &sites {
        warn!(
            quantity = %site.quantity,
            particle = site.particle,
            axis = %site.axis,
            "NaN detected"
        );
    }
    Err(ValidationError::Corruption(sites))
}

/// Returns the first NaN component in `values`, if any.
fn first_nan(quantity: Quantity, values: &[Vec3]) -> Option<NanSite> {
    values.iter().enumerate().find_map(|(particle, v)| {
        Axis::ALL
            .into_iter()
            .find(|axis| v[axis.index()].is_nan())
            .map(|axis| NanSite {
                quantity,
                particle,
                axis,
            })
    })
}
