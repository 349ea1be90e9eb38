//! Linux: the kernel exposes the running image as the `/proc/self/exe` link.

use std::fs;
use std::path::PathBuf;

use crate::common::error::EnvironmentError;

const PROC_SELF_EXE: &str = "/proc/self/exe";

/// Resolves `/proc/self/exe` to the canonical path of the running binary.
pub(super) fn image_path() -> Result<PathBuf, EnvironmentError> {
    Ok(fs::canonicalize(PROC_SELF_EXE)?)
}
