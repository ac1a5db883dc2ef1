//! Error types and handling for the path checker.
//!
//! This module defines the unified error type returned by the public API.
//! Classification itself never fails: filesystem problems hit during a check
//! are absorbed into conservative results. The only way a check produces an
//! error is when the caller asked for one with `raise_error`.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A specialized Result type for path checking operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The checked path was classified dangerous and the caller asked for an error.
    #[error(transparent)]
    DangerousPath(#[from] DangerousPathError),

    /// `remove_user_path` was given a path that was never registered.
    #[error("Path '{0}' is not in the user-defined paths list")]
    NotRegistered(String),

    /// A check mode other than `read` or `write` was requested.
    #[error("Invalid mode: {0} (expected 'read' or 'write')")]
    InvalidMode(String),

    /// A platform name that does not map to a known platform.
    #[error("Unknown platform: {0} (expected 'posix', 'darwin' or 'windows')")]
    UnknownPlatform(String),
}

impl Error {
    /// Returns the dangerous-path details if this is a [`Error::DangerousPath`].
    pub fn as_dangerous(&self) -> Option<&DangerousPathError> {
        match self {
            Self::DangerousPath(err) => Some(err),
            _ => None,
        }
    }
}

/// Raised when a path is classified dangerous under `raise_error`.
///
/// Carries the offending path as supplied by the caller together with the
/// checks that fired.
#[derive(Debug, Clone, Error)]
#[error("Path '{}' points to a dangerous location ({reasons})", path.display())]
pub struct DangerousPathError {
    /// The path as supplied by the caller.
    pub path: PathBuf,

    /// Which checks classified the path as dangerous.
    pub reasons: DangerReasons,
}

/// The set of checks that flagged a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DangerReasons {
    /// Inside a platform system location counted by the active mode.
    pub system_path: bool,

    /// Inside a user-registered sensitive location.
    pub sensitive_path: bool,

    /// Contains characters or names that are invalid on the platform.
    pub invalid_chars: bool,

    /// Resolves outside the current working directory under `cwd_only`.
    pub outside_cwd: bool,

    /// Exists but is not writable while `require_writable` is set.
    pub not_writable: bool,
}

impl DangerReasons {
    /// True if at least one check fired.
    pub fn any(&self) -> bool {
        self.system_path
            || self.sensitive_path
            || self.invalid_chars
            || self.outside_cwd
            || self.not_writable
    }

    fn labels(&self) -> Vec<&'static str> {
        [
            (self.system_path, "system path"),
            (self.sensitive_path, "sensitive path"),
            (self.invalid_chars, "invalid characters"),
            (self.outside_cwd, "outside working directory"),
            (self.not_writable, "not writable"),
        ]
        .into_iter()
        .filter_map(|(fired, label)| fired.then_some(label))
        .collect()
    }
}

impl fmt::Display for DangerReasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels();
        if labels.is_empty() {
            f.write_str("no reason")
        } else {
            f.write_str(&labels.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasons_display_lists_fired_checks() {
        let reasons = DangerReasons {
            system_path: true,
            invalid_chars: true,
            ..Default::default()
        };
        assert_eq!(reasons.to_string(), "system path, invalid characters");
        assert!(reasons.any());
        assert!(!DangerReasons::default().any());
    }

    #[test]
    fn test_dangerous_path_error_message() {
        let err = DangerousPathError {
            path: PathBuf::from("/etc/passwd"),
            reasons: DangerReasons {
                system_path: true,
                ..Default::default()
            },
        };
        assert_eq!(
            err.to_string(),
            "Path '/etc/passwd' points to a dangerous location (system path)"
        );

        let wrapped: Error = err.into();
        assert!(wrapped.as_dangerous().is_some());
        assert!(wrapped.to_string().contains("dangerous location"));
    }

    #[test]
    fn test_not_registered_message() {
        let err = Error::NotRegistered("/nonexistent/path".to_string());
        assert!(err.to_string().contains("not in the user-defined paths list"));
        assert!(err.as_dangerous().is_none());
    }
}
