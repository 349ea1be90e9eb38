//! Aggregated validation results.
//!
//! Individual checks stop at their first failure. An audit runs every check
//! and collects what failed, so the caller can decide whether to abort the
//! benchmark or log and continue.

use serde::Serialize;

use crate::common::error::{ErrorKind, ValidationError};

/// Which check produced a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// NaN scan.
    Nans,
    /// Plausibility thresholds.
    Discrepancies,
    /// Force-magnitude RMSE comparison.
    Forces,
    /// Potential and kinetic energy comparison.
    Energies,
}

/// Which snapshot a failure refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The reference snapshot (or the only one, for single-state audits).
    Reference,
    /// The snapshot under test.
    Given,
    /// Both snapshots, for comparisons.
    Pair,
}

/// One failed check.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Failure {
    /// The check that failed.
    pub check: Check,
    /// The snapshot it failed on.
    pub role: Role,
    /// What went wrong.
    pub error: ValidationError,
}

/// Every failure from one audit, in the order the checks ran.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    failures: Vec<Failure>,
}

impl ValidationReport {
    /// Records the outcome of one check.
    pub(crate) fn record(&mut self, check: Check, role: Role, outcome: Result<(), ValidationError>) {
        if let Err(error) = outcome {
            self.failures.push(Failure { check, role, error });
        }
    }

    /// True when no check failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// The recorded failures.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Kinds of the recorded failures, in order.
    pub fn kinds(&self) -> impl Iterator<Item = ErrorKind> + '_ {
        self.failures.iter().map(|f| f.error.kind())
    }

    /// Whether `check` failed on any snapshot.
    pub fn failed(&self, check: Check) -> bool {
        self.failures.iter().any(|f| f.check == check)
    }

    /// Converts the report into the result of its first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the first recorded failure.
    pub fn into_result(self) -> Result<(), ValidationError> {
        self.failures
            .into_iter()
            .next()
            .map_or(Ok(()), |failure| Err(failure.error))
    }
}
