//! Working-directory confinement.
//!
//! Normalization has already folded `..` and resolved symlinks, so a
//! traversal payload such as `../../etc/passwd` shows up here as a plain
//! absolute path and an ancestor test is enough.

use std::path::Path;

use tracing::warn;

use crate::domains::analysis::matcher::path_starts_with;
use crate::domains::analysis::normalize::normalize;
use crate::domains::platform::Platform;

/// True iff `normalized` is neither `base` nor inside it.
///
/// `base` is normalized first, so it may be relative or contain symlinks.
pub fn is_outside_dir(normalized: &Path, base: &Path) -> bool {
    let base = normalize(base);
    !path_starts_with(
        &normalized.to_string_lossy(),
        &base.to_string_lossy(),
        Platform::current(),
    )
}

/// True iff `normalized` is outside the current working directory.
///
/// The working directory is read on every call since it can change between
/// checks. If it cannot be determined the path is reported outside.
pub fn is_outside_cwd(normalized: &Path) -> bool {
    match std::env::current_dir() {
        Ok(cwd) => is_outside_dir(normalized, &cwd),
        Err(e) => {
            warn!(
                "Cannot determine working directory ({}), treating '{}' as outside",
                e,
                normalized.display()
            );
            true
        }
    }
}
