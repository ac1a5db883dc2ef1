//! Path text splitting and comparison under a platform's conventions.
//!
//! These helpers work on strings rather than `std::path::Path` so that
//! Windows rules can be applied on a Unix host and the other way round.

use crate::domains::platform::Platform;

/// Marker standing for a leading separator (the filesystem root).
const ROOT: &str = "/";

/// Splits `path` into its non-empty components.
///
/// A leading separator becomes a root marker so that `/etc` and `etc` never
/// compare equal. On Windows the `\\?\` and `\\?\UNC\` verbatim introducers
/// are dropped, so `\\?\C:\Windows` splits like `C:\Windows` and
/// `\\?\UNC\srv\share` like `\\srv\share`.
pub fn split(path: &str, platform: Platform) -> Vec<&str> {
    let separators = platform.separators();
    let (rooted, rest) = match platform {
        Platform::Windows => {
            if let Some(rest) = path.strip_prefix(r"\\?\UNC\") {
                (true, rest)
            } else if let Some(rest) = path.strip_prefix(r"\\?\") {
                (rest.starts_with(separators), rest)
            } else {
                (path.starts_with(separators), path)
            }
        }
        Platform::Posix | Platform::Darwin => (path.starts_with(separators), path),
    };

    let mut components = Vec::new();
    if rooted {
        components.push(ROOT);
    }
    components.extend(rest.split(separators).filter(|c| !c.is_empty()));
    components
}

/// The last non-root component of `path`, if any.
pub fn file_name(path: &str, platform: Platform) -> Option<&str> {
    split(path, platform).into_iter().rev().find(|c| *c != ROOT)
}

/// Compares two components with the platform's case rule.
pub fn component_eq(a: &str, b: &str, platform: Platform) -> bool {
    if platform.is_case_sensitive() {
        a == b
    } else {
        a == b || a.to_lowercase() == b.to_lowercase()
    }
}

/// True iff `prefix` equals `path` or is one of its ancestors.
///
/// The test is component-wise, so `/etc` is an ancestor of `/etc/passwd` but
/// not of `/etcetera`. An empty prefix matches nothing.
pub fn starts_with(path: &str, prefix: &str, platform: Platform) -> bool {
    let prefix = split(prefix, platform);
    if prefix.is_empty() {
        return false;
    }
    let path = split(path, platform);
    prefix.len() <= path.len()
        && prefix
            .iter()
            .zip(&path)
            .all(|(p, c)| component_eq(p, c, platform))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_posix() {
        assert_eq!(split("/etc//ssh/", Platform::Posix), vec!["/", "etc", "ssh"]);
        assert_eq!(split("etc/ssh", Platform::Posix), vec!["etc", "ssh"]);
        // Backslash is an ordinary character on POSIX
        assert_eq!(split("/a\\b", Platform::Posix), vec!["/", "a\\b"]);
    }

    #[test]
    fn test_split_windows() {
        assert_eq!(
            split(r"C:\Windows/System32", Platform::Windows),
            vec!["C:", "Windows", "System32"]
        );
        assert_eq!(
            split(r"\\?\C:\Windows", Platform::Windows),
            vec!["C:", "Windows"]
        );
        assert_eq!(
            split(r"\\?\UNC\srv\share", Platform::Windows),
            split(r"\\srv\share", Platform::Windows)
        );
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/tmp/out.txt", Platform::Posix), Some("out.txt"));
        assert_eq!(file_name(r"C:\dir\", Platform::Windows), Some("dir"));
        assert_eq!(file_name("/", Platform::Posix), None);
    }

    #[test]
    fn test_starts_with_is_component_wise() {
        assert!(starts_with("/etc", "/etc", Platform::Posix));
        assert!(starts_with("/etc/passwd", "/etc", Platform::Posix));
        assert!(!starts_with("/etcetera", "/etc", Platform::Posix));
        assert!(!starts_with("/etc", "/etc/passwd", Platform::Posix));
        assert!(!starts_with("etc/passwd", "/etc", Platform::Posix));
        assert!(starts_with("/anything", "/", Platform::Posix));
        assert!(!starts_with("/anything", "", Platform::Posix));
    }

    #[test]
    fn test_case_rules() {
        assert!(starts_with(r"c:\windows\temp", r"C:\Windows", Platform::Windows));
        assert!(!starts_with("/system/x", "/System", Platform::Darwin));
        assert!(!starts_with("/ETC/passwd", "/etc", Platform::Posix));
    }
}
