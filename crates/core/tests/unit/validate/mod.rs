//! # Validator Tests
//!
//! Each check against its boundary values and ordering rules, the audit
//! report, and property tests over generated snapshots.


/// NaN detection.
pub mod integrity;


/// Generated-input properties of every check.
pub mod properties;

/// Aggregated audits.
pub mod report;
