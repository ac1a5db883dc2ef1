//! Serializable snapshot of a classification.

use serde::Serialize;

use crate::core::error::DangerReasons;
use crate::domains::checker::mode::Mode;

/// Result of checking one path.
///
/// `is_outside_cwd` is present only when confinement was requested, and the
/// accessibility fields only once they have been evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathVerdict {
    /// The path as supplied.
    pub path: String,

    /// Absolute, resolved form used by every check.
    pub normalized_path: String,

    pub mode: Mode,

    /// Inside a platform system directory (full list, whatever the mode).
    pub is_system_path: bool,

    /// Inside a user-defined sensitive path.
    pub is_sensitive_path: bool,

    pub has_invalid_chars: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_outside_cwd: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_readable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_writable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_creatable: Option<bool>,

    /// Overall decision: true means safe to use.
    pub is_safe: bool,

    /// The checks that made the path dangerous (all false when safe).
    pub reasons: DangerReasons,
}
