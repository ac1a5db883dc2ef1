//! Platform path database.
//!
//! Behaviour differs between operating systems only in data, so a platform
//! is a plain tag and every lookup is a pure function over static tables.
//! The tables live in one file per platform.

mod darwin;
mod posix;
mod windows;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::error::Error;

/// Operating-system family whose path conventions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux and other Unix-like systems.
    Posix,
    /// macOS.
    Darwin,
    /// Windows.
    Windows,
}

impl Platform {
    /// Every supported platform, in declaration order.
    pub const ALL: [Platform; 3] = [Platform::Posix, Platform::Darwin, Platform::Windows];

    /// The platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Darwin
        } else {
            Platform::Posix
        }
    }

    /// Whether path components compare case-sensitively.
    pub fn is_case_sensitive(self) -> bool {
        !matches!(self, Platform::Windows)
    }

    /// Characters that separate path components.
    pub fn separators(self) -> &'static [char] {
        match self {
            Platform::Windows => &['\\', '/'],
            Platform::Posix | Platform::Darwin => &['/'],
        }
    }

    /// The separator used when joining components.
    pub fn separator(self) -> char {
        self.separators()[0]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Posix => "posix",
            Platform::Darwin => "darwin",
            Platform::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "posix" | "linux" | "unix" => Ok(Platform::Posix),
            "darwin" | "macos" => Ok(Platform::Darwin),
            "windows" | "win32" => Ok(Platform::Windows),
            _ => Err(Error::UnknownPlatform(format!("'{}'", s))),
        }
    }
}

/// System directories for `platform`, in table order.
///
/// On Windows the directories named by `WINDIR`, `SYSTEMROOT` and the
/// `ProgramFiles` family are appended when set and not already listed.
pub fn dangerous_prefixes(platform: Platform) -> Vec<String> {
    match platform {
        Platform::Posix => to_owned(posix::SYSTEM_PATHS),
        Platform::Darwin => to_owned(darwin::SYSTEM_PATHS),
        Platform::Windows => {
            let mut prefixes = to_owned(windows::SYSTEM_PATHS);
            for var in windows::SYSTEM_PATH_VARS {
                let Ok(value) = std::env::var(var) else {
                    continue;
                };
                let value = value.trim_end_matches(['\\', '/']).to_string();
                if value.is_empty() {
                    continue;
                }
                let lowered = value.to_lowercase();
                if !prefixes.iter().any(|p| p.to_lowercase() == lowered) {
                    prefixes.push(value);
                }
            }
            prefixes
        }
    }
}

/// The narrower set of system locations that are dangerous even to read.
///
/// Every entry lies inside one of [`dangerous_prefixes`].
pub fn read_protected_prefixes(platform: Platform) -> Vec<String> {
    match platform {
        Platform::Posix => to_owned(posix::READ_PROTECTED_PATHS),
        Platform::Darwin => to_owned(darwin::READ_PROTECTED_PATHS),
        Platform::Windows => to_owned(windows::READ_PROTECTED_PATHS),
    }
}

/// Characters that may not appear anywhere in a path.
pub fn invalid_characters(platform: Platform) -> &'static [char] {
    match platform {
        Platform::Posix => posix::INVALID_CHARS,
        Platform::Darwin => darwin::INVALID_CHARS,
        Platform::Windows => windows::INVALID_CHARS,
    }
}

/// Base names reserved by the platform (compared without extension, any case).
pub fn reserved_names(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Windows => windows::RESERVED_NAMES,
        Platform::Posix | Platform::Darwin => &[],
    }
}

/// Whether a final path component breaks the platform's trailing-character rule.
///
/// Windows silently strips a trailing space or period, so such a name never
/// refers to the file the caller meant. `.` and `..` are exempt.
pub fn violates_trailing_rule(platform: Platform, component: &str) -> bool {
    match platform {
        Platform::Windows => {
            component != "."
                && component != ".."
                && (component.ends_with(' ') || component.ends_with('.'))
        }
        Platform::Posix | Platform::Darwin => false,
    }
}

fn to_owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_prefixes() {
        let prefixes = dangerous_prefixes(Platform::Posix);
        for expected in ["/etc", "/bin", "/sbin", "/boot", "/dev", "/proc", "/sys", "/root"] {
            assert!(prefixes.iter().any(|p| p == expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_darwin_prefixes_keep_temp_areas_usable() {
        let prefixes = dangerous_prefixes(Platform::Darwin);
        assert!(prefixes.iter().any(|p| p == "/System"));
        assert!(prefixes.iter().any(|p| p == "/Library"));
        assert!(prefixes.iter().any(|p| p == "/private/etc"));
        assert!(!prefixes.iter().any(|p| p == "/private"));
        assert!(!prefixes.iter().any(|p| p == "/var"));
        assert!(!prefixes.iter().any(|p| p == "/private/tmp"));
    }

    #[test]
    fn test_windows_prefixes() {
        let prefixes = dangerous_prefixes(Platform::Windows);
        assert_eq!(prefixes[0], "C:\\Windows");
        assert!(prefixes.iter().any(|p| p == "C:\\Program Files"));
        let mut lowered: Vec<String> = prefixes.iter().map(|p| p.to_lowercase()).collect();
        let before = lowered.len();
        lowered.sort();
        lowered.dedup();
        assert_eq!(lowered.len(), before, "environment entries must not duplicate");
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(invalid_characters(Platform::Posix), &['\0']);
        assert!(invalid_characters(Platform::Darwin).contains(&':'));
        let windows = invalid_characters(Platform::Windows);
        for c in ['<', '>', ':', '"', '|', '?', '*'] {
            assert!(windows.contains(&c));
        }
        assert!((0u32..32).all(|code| windows.contains(&char::from_u32(code).unwrap())));
        assert!(!windows.contains(&'\\'));
    }

    #[test]
    fn test_reserved_names_only_on_windows() {
        assert!(reserved_names(Platform::Posix).is_empty());
        assert!(reserved_names(Platform::Darwin).is_empty());
        let names = reserved_names(Platform::Windows);
        assert_eq!(names.len(), 22);
        assert!(names.contains(&"COM9"));
        assert!(names.contains(&"LPT1"));
    }

    #[test]
    fn test_trailing_rule() {
        assert!(violates_trailing_rule(Platform::Windows, "file."));
        assert!(violates_trailing_rule(Platform::Windows, "file "));
        assert!(!violates_trailing_rule(Platform::Windows, "file.txt"));
        assert!(!violates_trailing_rule(Platform::Windows, ".."));
        assert!(!violates_trailing_rule(Platform::Posix, "file."));
        assert!(!violates_trailing_rule(Platform::Darwin, "file "));
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("Linux".parse::<Platform>().unwrap(), Platform::Posix);
        assert_eq!("macos".parse::<Platform>().unwrap(), Platform::Darwin);
        assert_eq!("WINDOWS".parse::<Platform>().unwrap(), Platform::Windows);
        assert!(matches!(
            "plan9".parse::<Platform>(),
            Err(Error::UnknownPlatform(_))
        ));
    }

    #[test]
    fn test_current_platform_matches_target() {
        let current = Platform::current();
        if cfg!(windows) {
            assert_eq!(current, Platform::Windows);
        } else if cfg!(target_os = "macos") {
            assert_eq!(current, Platform::Darwin);
        } else {
            assert_eq!(current, Platform::Posix);
        }
    }
}
