//! Logging harness.
//!
//! Installs a `tracing` subscriber that writes through the test writer, so
//! validator logs appear only for failing tests. Honours `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Installs the test subscriber once per process; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mdcheck_core=debug")),
        )
        .with_test_writer()
        .try_init();
}
