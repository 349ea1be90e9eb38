//! State validator.
//!
//! This module inspects simulation snapshots produced by the external engine. It performs:
//! 1. **Integrity:** NaN detection across positions, velocities and forces.
//! 2. **Plausibility:** Velocity and force bounds, and the zero-velocity symptom.
//! 3. **Comparison:** Energy differences and force-magnitude RMSE between two runs.
//! 4. **Audit:** Every applicable check at once, collected into a [`ValidationReport`].
//!
//! Checks are pure: they read the snapshot, never mutate it, and return
//! `Ok(())` or a [`ValidationError`] describing the first problem found.

/// Cross-run energy and force comparison.
pub mod comparison;
/// NaN detection.
pub mod integrity;
/// Plausibility thresholds.
pub mod plausibility;
/// Aggregated audit results.
pub mod report;

pub use report::{Check, Failure, Role, ValidationReport};

use tracing::info;

use crate::common::error::{ConfigError, ValidationError};
use crate::config::ValidationConfig;
use crate::state::Snapshot;

/// Runs state checks with a fixed set of thresholds.
///
/// # Examples
///
/// ```
/// use mdcheck_core::{State, Validator};
///
/// let reference = State::new(
///     vec![[0.0; 3]; 2],
///     vec![[0.5, -0.5, 1.0]; 2],
///     vec![[10.0, 0.0, 0.0]; 2],
/// )
/// .unwrap()
/// .with_energies(-500.0, 120.0);
/// let given = reference.clone().with_energies(-500.5, 120.2);
///
/// let validator = Validator::default();
/// validator.check_for_nans(&given).unwrap();
/// validator.check_for_discrepancies(&given).unwrap();
/// validator
///     .compare_forces_and_energies(&reference, &given, 0.1, 1.0)
///     .unwrap();
/// assert!(validator.compare_energies(&reference, &given, 0.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Creates a validator after checking the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a threshold or tolerance is unusable.
    pub fn new(config: ValidationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Fails if any position, velocity or force component is NaN.
    ///
    /// # Errors
    ///
    /// See [`integrity::check_for_nans`].
    #[allow(clippy::unused_self)]
    pub fn check_for_nans<S: Snapshot + ?Sized>(&self, state: &S) -> Result<(), ValidationError> {
        integrity::check_for_nans(state)
    }

    /// Fails if velocities or forces are physically implausible.
    ///
    /// # Errors
    ///
    /// See [`plausibility::check_for_discrepancies`].
    pub fn check_for_discrepancies<S: Snapshot + ?Sized>(
        &self,
        state: &S,
    ) -> Result<(), ValidationError> {
        plausibility::check_for_discrepancies(state, self.config.max_velocity, self.config.max_force)
    }

    /// Fails if potential or kinetic energies differ by more than `tolerance`.
    ///
    /// # Errors
    ///
    /// See [`comparison::compare_energies`].
    #[allow(clippy::unused_self)]
    pub fn compare_energies<A, B>(
        &self,
        reference: &A,
        given: &B,
        tolerance: f64,
    ) -> Result<(), ValidationError>
    where
        A: Snapshot + ?Sized,
        B: Snapshot + ?Sized,
    {
        comparison::compare_energies(reference, given, tolerance)
    }

    /// Fails if the force-magnitude RMSE exceeds `tolerance`.
    ///
    /// # Errors
    ///
    /// See [`comparison::compare_forces`].
    #[allow(clippy::unused_self)]
    pub fn compare_forces<A, B>(
        &self,
        reference: &A,
        given: &B,
        tolerance: f64,
    ) -> Result<(), ValidationError>
    where
        A: Snapshot + ?Sized,
        B: Snapshot + ?Sized,
    {
        comparison::compare_forces(reference, given, tolerance)
    }

    /// Compares forces with `force_tolerance`, then energies with `energy_tolerance`.
    ///
    /// # Errors
    ///
    /// Returns the force comparison's error if it fails, otherwise the energy
    /// comparison's.
    pub fn compare_forces_and_energies<A, B>(
        &self,
        reference: &A,
        given: &B,
        force_tolerance: f64,
        energy_tolerance: f64,
    ) -> Result<(), ValidationError>
    where
        A: Snapshot + ?Sized,
        B: Snapshot + ?Sized,
    {
        self.compare_forces(reference, given, force_tolerance)?;
        self.compare_energies(reference, given, energy_tolerance)
    }

    /// [`compare_forces_and_energies`](Self::compare_forces_and_energies) with
    /// the configured default tolerances.
    ///
    /// # Errors
    ///
    /// As for `compare_forces_and_energies`.
    pub fn compare<A, B>(&self, reference: &A, given: &B) -> Result<(), ValidationError>
    where
        A: Snapshot + ?Sized,
        B: Snapshot + ?Sized,
    {
        self.compare_forces_and_energies(
            reference,
            given,
            self.config.force_tolerance,
            self.config.energy_tolerance,
        )
    }

    /// Runs both single-state checks on `state` and collects the failures.
    pub fn audit<S: Snapshot + ?Sized>(&self, state: &S) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.audit_state(&mut report, state, Role::Reference);
        info!(failures = report.failures().len(), "state audit complete");
        report
    }

    /// Runs the single-state checks on both snapshots, then both comparisons
    /// with the configured tolerances, and collects every failure.
    ///
    /// Unlike [`compare`](Self::compare), a force failure does not stop the
    /// energy comparison.
    pub fn audit_pair<A, B>(&self, reference: &A, given: &B) -> ValidationReport
    where
        A: Snapshot + ?Sized,
        B: Snapshot + ?Sized,
    {
        let mut report = ValidationReport::default();
        self.audit_state(&mut report, reference, Role::Reference);
        self.audit_state(&mut report, given, Role::Given);
        report.record(
            Check::Forces,
            Role::Pair,
            self.compare_forces(reference, given, self.config.force_tolerance),
        );
        report.record(
            Check::Energies,
            Role::Pair,
            self.compare_energies(reference, given, self.config.energy_tolerance),
        );
        info!(failures = report.failures().len(), "pair audit complete");
        report
    }

    fn audit_state<S: Snapshot + ?Sized>(&self, report: &mut ValidationReport, state: &S, role: Role) {
        report.record(Check::Nans, role, self.check_for_nans(state));
        report.record(Check::Discrepancies, role, self.check_for_discrepancies(state));
    }
}
