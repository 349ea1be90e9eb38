//! Other targets: the standard library asks the OS for the image path
//! (`GetModuleFileNameW` on Windows, `_NSGetExecutablePath` on macOS).

use std::env;
use std::path::PathBuf;

use crate::common::error::EnvironmentError;

/// Queries and canonicalises the running binary's path.
pub(super) fn image_path() -> Result<PathBuf, EnvironmentError> {
    let path = env::current_exe()?;
    Ok(path.canonicalize()?)
}
