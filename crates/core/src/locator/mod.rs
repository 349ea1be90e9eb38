//! Executable locator.
//!
//! Resolves the directory holding the running binary, so resource files
//! shipped next to it can be found regardless of the working directory. It provides:
//! 1. **Seam:** The [`ProcessImage`] trait, the only place platform code lives.
//! 2. **Host Implementation:** [`HostImage`], whose body is chosen per target OS at build time.
//! 3. **Helpers:** Directory and resource-path resolution on top of any `ProcessImage`.
//!
//! Nothing is cached; the image path cannot change during the life of a process.

#[cfg(target_os = "linux")]
mod linux;
#[cfg(not(target_os = "linux"))]
mod portable;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::error::EnvironmentError;

/// Source of the running process's image path.
pub trait ProcessImage {
    /// Absolute path of the running binary.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::ImageQuery`] if the OS cannot supply it.
    fn image_path(&self) -> Result<PathBuf, EnvironmentError>;
}

/// The process image as reported by the host operating system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostImage;

impl ProcessImage for HostImage {
    fn image_path(&self) -> Result<PathBuf, EnvironmentError> {
        #[cfg(target_os = "linux")]
        let path = linux::image_path()?;
        #[cfg(not(target_os = "linux"))]
        let path = portable::image_path()?;
        Ok(path)
    }
}

/// Directory portion of `image`'s path.
///
/// # Errors
///
/// Propagates the image query error, or returns [`EnvironmentError::NoParent`]
/// if the path has no directory component.
pub fn executable_directory_of<I: ProcessImage + ?Sized>(
    image: &I,
) -> Result<PathBuf, EnvironmentError> {
    let path = image.image_path()?;
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            debug!(directory = %dir.display(), "resolved executable directory");
            Ok(dir.to_path_buf())
        }
        _ => Err(EnvironmentError::NoParent { path }),
    }
}

/// Directory containing the running executable.
///
/// # Errors
///
/// See [`executable_directory_of`].
///
/// # Examples
///
/// ```
/// let dir = mdcheck_core::locator::executable_directory().unwrap();
/// assert!(dir.is_dir());
/// ```
pub fn executable_directory() -> Result<PathBuf, EnvironmentError> {
    executable_directory_of(&HostImage)
}

/// Path of a resource file co-located with the running executable.
///
/// The file is not required to exist.
///
/// # Errors
///
/// See [`executable_directory`].
pub fn resolve_resource<P: AsRef<Path>>(name: P) -> Result<PathBuf, EnvironmentError> {
    Ok(executable_directory()?.join(name))
}
