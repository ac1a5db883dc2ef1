//! One-shot checks against the global registry.

use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::domains::analysis::{matcher, normalize::normalize};
use crate::domains::checker::path_checker::PathChecker;
use crate::domains::platform::{self, Platform};
use crate::domains::registry::UserPathRegistry;

/// True if `path` is dangerous to write to.
///
/// ```rust,no_run
/// assert!(bad_path::is_dangerous_path("/etc/passwd"));
/// ```
pub fn is_dangerous_path(path: impl AsRef<Path>) -> bool {
    PathChecker::new(path).is_dangerous()
}

/// Like [`is_dangerous_path`], but a dangerous path is an error.
///
/// Returns the normalized path on success.
pub fn ensure_safe_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let checker = PathChecker::builder(path).raise_error(true).check()?;
    Ok(checker.normalized_path().to_path_buf())
}

/// Whether `path` lies inside a system directory of the host platform.
pub fn is_system_path(path: impl AsRef<Path>) -> bool {
    matcher::is_host_system_path(&normalize(path))
}

/// Whether `path` lies inside a path registered with [`add_user_path`].
pub fn is_sensitive_path(path: impl AsRef<Path>) -> bool {
    matcher::is_sensitive_path(&normalize(path), &UserPathRegistry::global())
}

/// The host platform's system directories, in reference order.
pub fn get_dangerous_paths() -> Vec<String> {
    platform::dangerous_prefixes(Platform::current())
}

/// Register a sensitive path. Returns `false` if it was already present.
pub fn add_user_path(path: impl AsRef<Path>) -> bool {
    UserPathRegistry::global().add(path)
}

/// Unregister a sensitive path.
pub fn remove_user_path(path: impl AsRef<Path>) -> Result<()> {
    UserPathRegistry::global().remove(path)
}

pub fn clear_user_paths() {
    UserPathRegistry::global().clear();
}

/// Copy of the registered sensitive paths.
pub fn get_user_paths() -> Vec<String> {
    UserPathRegistry::global().paths()
}
