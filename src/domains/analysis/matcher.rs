//! Dangerous-path matching.
//!
//! A path is a system path when one of the platform's system prefixes is
//! an ancestor of (or equal to) it, and a sensitive path when a user
//! registered entry is. Matching is a linear, component-wise scan; the lists
//! involved are tens of entries long.

use std::path::Path;
use std::sync::LazyLock;

use crate::domains::analysis::components;
use crate::domains::analysis::normalize::normalize;
use crate::domains::platform::{self, Platform};
use crate::domains::registry::UserPathRegistry;

/// Host system prefixes together with their resolved forms.
static HOST_SYSTEM_PREFIXES: LazyLock<Vec<String>> =
    LazyLock::new(|| with_resolved_forms(platform::dangerous_prefixes(Platform::current())));

static HOST_READ_PROTECTED_PREFIXES: LazyLock<Vec<String>> =
    LazyLock::new(|| with_resolved_forms(platform::read_protected_prefixes(Platform::current())));

/// True iff `prefix` is `path` or one of its ancestors under `platform` rules.
pub fn path_starts_with(path: &str, prefix: &str, platform: Platform) -> bool {
    components::starts_with(path, prefix, platform)
}

/// True iff any of `prefixes` is `path` or one of its ancestors.
pub fn matches_any<I, S>(path: &str, prefixes: I, platform: Platform) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    prefixes
        .into_iter()
        .any(|prefix| path_starts_with(path, prefix.as_ref(), platform))
}

/// Whether a normalized path lies inside a system directory of `platform`.
pub fn is_system_path(normalized: &str, platform: Platform) -> bool {
    matches_any(normalized, platform::dangerous_prefixes(platform), platform)
}

/// Whether a normalized path lies inside a read-protected location of `platform`.
pub fn is_read_protected_path(normalized: &str, platform: Platform) -> bool {
    matches_any(normalized, platform::read_protected_prefixes(platform), platform)
}

/// [`is_system_path`] for the host, also matching resolved prefix forms
/// (`/etc` is `/private/etc` on macOS).
pub fn is_host_system_path(normalized: &Path) -> bool {
    matches_any(
        &normalized.to_string_lossy(),
        HOST_SYSTEM_PREFIXES.iter(),
        Platform::current(),
    )
}

/// [`is_read_protected_path`] for the host, also matching resolved prefix forms.
pub fn is_host_read_protected_path(normalized: &Path) -> bool {
    matches_any(
        &normalized.to_string_lossy(),
        HOST_READ_PROTECTED_PREFIXES.iter(),
        Platform::current(),
    )
}

/// Whether a normalized path lies inside any entry of `registry`.
///
/// Entries are normalized at check time, the same way the checked path was,
/// so relative entries and entries behind symlinks compare correctly.
pub fn is_sensitive_path(normalized: &Path, registry: &UserPathRegistry) -> bool {
    let entries = registry.paths();
    if entries.is_empty() {
        return false;
    }

    let path = normalized.to_string_lossy();
    entries.iter().any(|entry| {
        let entry = normalize(entry);
        path_starts_with(&path, &entry.to_string_lossy(), Platform::current())
    })
}

fn with_resolved_forms(prefixes: Vec<String>) -> Vec<String> {
    let mut all = prefixes.clone();
    for prefix in prefixes {
        if let Ok(resolved) = dunce::canonicalize(&prefix) {
            let resolved = resolved.to_string_lossy().into_owned();
            if !all.contains(&resolved) {
                all.push(resolved);
            }
        }
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_every_prefix_matches_itself_and_descendants() {
        for platform in Platform::ALL {
            let sep = platform.separator();
            let prefixes = platform::dangerous_prefixes(platform);
            for prefix in &prefixes {
                assert!(is_system_path(prefix, platform), "{} on {}", prefix, platform);
                assert!(
                    is_system_path(&format!("{}{}anything", prefix, sep), platform),
                    "{}/anything on {}",
                    prefix,
                    platform
                );

                // C:\Windows\System32x is still inside C:\Windows
                let nested = prefixes
                    .iter()
                    .any(|other| other != prefix && path_starts_with(prefix, other, platform));
                if !nested {
                    assert!(
                        !is_system_path(&format!("{}x", prefix), platform),
                        "{}x on {}",
                        prefix,
                        platform
                    );
                }
            }
        }
    }

    #[test]
    fn test_read_protected_is_subset_of_system() {
        for platform in Platform::ALL {
            for prefix in platform::read_protected_prefixes(platform) {
                assert!(is_system_path(&prefix, platform), "{} on {}", prefix, platform);
                assert!(is_read_protected_path(&prefix, platform));
            }
        }
    }

    #[test]
    fn test_platform_specific_examples() {
        assert!(is_system_path("/etc/passwd", Platform::Posix));
        assert!(!is_system_path("/tmp/out.txt", Platform::Posix));
        assert!(!is_system_path("/home/u/project", Platform::Posix));

        assert!(is_system_path("/System/Library/CoreServices", Platform::Darwin));
        assert!(is_system_path("/private/etc/hosts", Platform::Darwin));
        assert!(!is_system_path("/private/tmp/out.txt", Platform::Darwin));
        assert!(!is_system_path("/private/var/folders/xy/T/file", Platform::Darwin));

        assert!(is_system_path(r"c:\windows\system32\drivers", Platform::Windows));
        assert!(is_system_path(r"C:/Program Files/App/app.exe", Platform::Windows));
        assert!(!is_system_path(r"C:\Users\u\Documents\a.txt", Platform::Windows));

        assert!(is_read_protected_path("/etc/shadow", Platform::Posix));
        assert!(!is_read_protected_path("/etc/passwd", Platform::Posix));
    }

    #[test]
    fn test_host_matching() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!is_host_system_path(&normalize(temp_dir.path())));

        if cfg!(unix) {
            assert!(is_host_system_path(&normalize("/etc/passwd")));
            assert!(is_host_system_path(&normalize("/etc")));
            assert!(is_host_read_protected_path(&normalize("/etc/sudoers")));
            assert!(!is_host_read_protected_path(&normalize("/etc/passwd")));
        }
    }

    #[test]
    fn test_sensitive_paths_follow_registry() {
        let temp_dir = TempDir::new().unwrap();
        let secrets = temp_dir.path().join("secrets");
        let inside = normalize(secrets.join("key.pem"));
        let sibling = normalize(temp_dir.path().join("secrets-public"));

        let registry = UserPathRegistry::new();
        assert!(!is_sensitive_path(&inside, &registry));

        registry.add(&secrets);
        assert!(is_sensitive_path(&inside, &registry));
        assert!(is_sensitive_path(&normalize(&secrets), &registry));
        assert!(!is_sensitive_path(&sibling, &registry));

        registry.clear();
        assert!(!is_sensitive_path(&inside, &registry));
    }

    #[test]
    fn test_both_registries_can_match() {
        let registry = UserPathRegistry::new();
        registry.add("/etc/myapp");
        let target = normalize("/etc/myapp/config.toml");

        assert!(is_sensitive_path(&target, &registry));
        if cfg!(unix) {
            assert!(is_host_system_path(&target));
        }
    }
}
