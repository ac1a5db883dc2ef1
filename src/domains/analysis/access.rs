//! Read, write and create feasibility probes.
//!
//! The probes ask the OS about permissions (`access(2)` on Unix) and never
//! open the file. Their answers are advisory: the filesystem can change
//! between the check and the caller's own operation (TOCTOU). Any error while
//! probing is reported as `false`.

use std::path::Path;

/// Whether `path` exists and the current process may read it.
pub fn is_readable(path: &Path) -> bool {
    exists(path) && can_read(path)
}

/// Whether `path` exists and the current process may write it.
pub fn is_writable(path: &Path) -> bool {
    exists(path) && can_write(path)
}

/// Whether `path` does not exist yet and could be created.
///
/// Walks up to the nearest existing ancestor, which must be a directory the
/// process can write into.
pub fn is_creatable(path: &Path) -> bool {
    // A dangling symlink occupies the name even though `exists` says no
    if path.symlink_metadata().is_ok() {
        return false;
    }
    match nearest_existing_ancestor(path) {
        Some(ancestor) => ancestor.is_dir() && can_write(ancestor) && can_search(ancestor),
        None => false,
    }
}

/// The closest ancestor of `path` that exists.
pub fn nearest_existing_ancestor(path: &Path) -> Option<&Path> {
    path.ancestors().skip(1).find(|ancestor| {
        !ancestor.as_os_str().is_empty() && exists(ancestor)
    })
}

fn exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

#[cfg(unix)]
fn can_read(path: &Path) -> bool {
    rustix::fs::access(path, rustix::fs::Access::READ_OK).is_ok()
}

#[cfg(unix)]
fn can_write(path: &Path) -> bool {
    rustix::fs::access(path, rustix::fs::Access::WRITE_OK).is_ok()
}

#[cfg(unix)]
fn can_search(path: &Path) -> bool {
    rustix::fs::access(path, rustix::fs::Access::EXEC_OK).is_ok()
}

#[cfg(not(unix))]
fn can_read(path: &Path) -> bool {
    std::fs::metadata(path).is_ok()
}

#[cfg(not(unix))]
fn can_write(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|metadata| !metadata.permissions().readonly())
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn can_search(path: &Path) -> bool {
    path.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn running_as_root() -> bool {
        rustix::process::geteuid().is_root()
    }

    #[test]
    fn test_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("test.txt");
        fs::write(&file, "test").unwrap();

        assert!(is_readable(&file));
        assert!(is_writable(&file));
        assert!(!is_creatable(&file));
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("nonexistent.txt");

        assert!(!is_readable(&file));
        assert!(!is_writable(&file));
        assert!(is_creatable(&file));
    }

    #[test]
    fn test_missing_intermediate_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a").join("b").join("c.txt");

        assert_eq!(nearest_existing_ancestor(&file), Some(temp_dir.path()));
        assert!(is_creatable(&file));
    }

    #[test]
    fn test_ancestor_must_be_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "test").unwrap();

        assert!(!is_creatable(&file.join("child.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn test_readonly_file() {
        use std::os::unix::fs::PermissionsExt;

        if running_as_root() {
            return;
        }

        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("readonly.txt");
        fs::write(&file, "test").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o444)).unwrap();

        assert!(is_readable(&file));
        assert!(!is_writable(&file));

        fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_readonly_directory_blocks_creation() {
        use std::os::unix::fs::PermissionsExt;

        if running_as_root() {
            return;
        }

        let temp_dir = TempDir::new().unwrap();
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        assert!(!is_creatable(&locked.join("new.txt")));
        assert!(!is_creatable(&locked.join("sub").join("new.txt")));

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_not_creatable() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("dangling");
        symlink(temp_dir.path().join("gone"), &link).unwrap();

        assert!(!is_creatable(&link));
    }
}
