//! macOS.
//!
//! `/etc`, `/var` and `/tmp` are symlinks into `/private`, so the system
//! parts of `/private` are listed individually. `/private/tmp` and
//! `/private/var/folders` (the per-user temporary area) stay usable.

/// System directories that must not be written to.
pub const SYSTEM_PATHS: &[&str] = &[
    "/etc",
    "/bin",
    "/sbin",
    "/boot",
    "/sys",
    "/proc",
    "/dev",
    "/System",
    "/Library",
    "/private/etc",
    "/private/var/root",
    "/private/var/db",
    "/private/var/log",
    "/private/var/audit",
    "/private/var/vm",
    "/private/var/backups",
    "/var/root",
    "/var/db",
    "/var/log",
    "/var/audit",
    "/var/vm",
    "/var/backups",
    "/usr",
    "/Applications",
];

/// Locations that leak secrets or kernel state when merely read.
pub const READ_PROTECTED_PATHS: &[&str] = &[
    "/etc/master.passwd",
    "/etc/sudoers",
    "/etc/sudoers.d",
    "/etc/ssh",
    "/private/etc/master.passwd",
    "/private/etc/sudoers",
    "/private/etc/sudoers.d",
    "/private/etc/ssh",
    "/private/var/root",
    "/private/var/db/dslocal",
    "/private/var/db/sudo",
    "/var/root",
    "/var/db/dslocal",
    "/var/db/sudo",
    "/Library/Keychains",
    "/System/Library/Keychains",
    "/dev/mem",
];

/// NUL plus the legacy Mac OS separator.
pub const INVALID_CHARS: &[char] = &['\0', ':'];
