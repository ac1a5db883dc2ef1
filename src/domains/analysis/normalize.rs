//! Path normalization.
//!
//! Turns caller input into the absolute form every other check works on.
//! Resolution is attempted in three steps, each a fallback for the previous:
//!
//! 1. Full resolution of an existing path (symlinks, `.` and `..`).
//! 2. Resolution of the longest existing ancestor with the missing tail
//!    appended lexically, so a not-yet-created file under a symlinked
//!    directory still resolves through the link.
//! 3. Purely lexical cleanup against the working directory.
//!
//! Normalization never fails. The lexical result is fine for prefix
//! matching but gives no protection against symlinks.

use std::path::{Component, Path, PathBuf};

use soft_canonicalize::soft_canonicalize;
use tracing::debug;

/// Normalizes `input` into an absolute, resolved path.
pub fn normalize(input: impl AsRef<Path>) -> PathBuf {
    let expanded = expand_home(input.as_ref());

    match dunce::canonicalize(&expanded) {
        Ok(resolved) => resolved,
        Err(e) => {
            debug!(
                "Cannot resolve '{}' ({}), resolving existing ancestors",
                expanded.display(),
                e
            );
            match soft_canonicalize(expanded.as_path()) {
                Ok(resolved) => dunce::simplified(&resolved).to_path_buf(),
                Err(e) => {
                    debug!(
                        "Cannot resolve ancestors of '{}' ({}), using lexical normalization",
                        expanded.display(),
                        e
                    );
                    lexical_normalize(&expanded)
                }
            }
        }
    }
}

/// Expands a leading `~` to the current user's home directory.
///
/// Only `~` on its own and `~/...` (also `~\...` on Windows) are expanded;
/// `~user` forms and paths without a home directory are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };

    let rest = if text == "~" {
        Some("")
    } else if let Some(rest) = text.strip_prefix("~/") {
        Some(rest)
    } else if cfg!(windows) {
        text.strip_prefix("~\\")
    } else {
        None
    };

    match (rest, dirs::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Makes `path` absolute and folds `.` and `..` without touching the filesystem.
///
/// Relative paths are joined onto the working directory; if that cannot be
/// determined the path stays relative and leading `..` are kept. `..` never
/// climbs above the root.
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::ParentDir) | None => normalized.push(".."),
                _ => {}
            },
            Component::Normal(name) => normalized.push(name),
        }
    }
    normalized
}
