//! Invalid character and reserved name detection.
//!
//! Works on path text only and never touches the filesystem, so it can run
//! on the raw input before normalization (a NUL byte makes resolution fail).

use std::fmt;

use crate::domains::analysis::components;
use crate::domains::platform::{self, Platform};

/// What made a path invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// A character the platform forbids in path components.
    Character(char),
    /// A component whose base name is a reserved device name.
    ReservedName(String),
    /// A final component ending in a space or period.
    TrailingCharacter(String),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character(c) => write!(f, "invalid character {:?}", c),
            Self::ReservedName(name) => write!(f, "reserved name '{}'", name),
            Self::TrailingCharacter(name) => {
                write!(f, "component '{}' ends with a space or period", name)
            }
        }
    }
}

/// Whether `path` contains characters or names invalid on `platform`.
pub fn has_invalid_chars(path: &str, platform: Platform) -> bool {
    find_invalid(path, platform).is_some()
}

/// The first problem found in `path`, if any.
///
/// Checks, in order: forbidden characters anywhere in the text, reserved
/// device names in any component, and the trailing-character rule on the
/// final component.
pub fn find_invalid(path: &str, platform: Platform) -> Option<InvalidReason> {
    let text = strip_device_prefix(path, platform);
    let invalid = platform::invalid_characters(platform);

    for (index, c) in text.char_indices() {
        if !invalid.contains(&c) {
            continue;
        }
        if platform == Platform::Windows && c == ':' && is_drive_colon(text, index) {
            continue;
        }
        return Some(InvalidReason::Character(c));
    }

    let reserved = platform::reserved_names(platform);
    if !reserved.is_empty() {
        for component in components::split(text, platform) {
            let stem = component.split('.').next().unwrap_or(component);
            let stem = stem.trim_end_matches(' ');
            if reserved.iter().any(|name| name.eq_ignore_ascii_case(stem)) {
                return Some(InvalidReason::ReservedName(component.to_string()));
            }
        }
    }

    components::file_name(text, platform)
        .filter(|last| platform::violates_trailing_rule(platform, last))
        .map(|last| InvalidReason::TrailingCharacter(last.to_string()))
}

/// Drops the Windows `\\?\` and `\\.\` introducers, whose `?` and `.` are syntax.
fn strip_device_prefix(path: &str, platform: Platform) -> &str {
    if platform != Platform::Windows {
        return path;
    }
    path.strip_prefix(r"\\?\")
        .or_else(|| path.strip_prefix(r"\\.\"))
        .unwrap_or(path)
}

/// A colon directly after a leading drive letter, as in `C:`.
fn is_drive_colon(text: &str, index: usize) -> bool {
    index == 1 && text.as_bytes()[0].is_ascii_alphabetic()
}
