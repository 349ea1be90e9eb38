//! Validation Constants.
//!
//! This module defines the thresholds the validator applies to engine output:
//! 1. **Plausibility Bounds:** Largest velocity and force components considered physical.
//! 2. **Zero-Velocity Limit:** How many exactly-zero velocity components are tolerated.
//! 3. **Default Tolerances:** Cross-run comparison limits when the caller supplies none.

/// Largest plausible absolute velocity component (nm/ps).
///
/// Maxwell-Boltzmann velocities have a standard deviation of roughly
/// `sqrt(0.00831451121 * T / m)`. At 370 K and 1.008 amu (hydrogen, the
/// lightest atom) that is 1.747, and a 10-sigma event (17.47) should occur
/// about once in 390.68 billion samples.
pub const MAX_VELOCITY_COMPONENT: f64 = 17.47;

/// Largest plausible absolute force component (kJ/mol/nm).
pub const MAX_FORCE_COMPONENT: f64 = 50_000.0;

/// Number of spatial components per particle.
pub const COMPONENTS_PER_PARTICLE: usize = 3;

/// Default RMSE tolerance for force-magnitude comparison.
pub const DEFAULT_FORCE_TOLERANCE: f64 = 1.0;

/// Default absolute tolerance for potential and kinetic energy comparison (kJ/mol).
pub const DEFAULT_ENERGY_TOLERANCE: f64 = 10.0;

/// Largest number of exactly-zero velocity components tolerated for `particles` particles.
///
/// Integrators that fail tend to reset velocities to zero silently; more than
/// half of all components being exactly zero is treated as that symptom.
/// Integer division keeps the limit at `floor(3N / 2)`.
pub const fn max_zero_velocity_components(particles: usize) -> usize {
    COMPONENTS_PER_PARTICLE * particles / 2
}
