//! Shared helpers for the test suite.

/// Tracing setup.
pub mod harness;
