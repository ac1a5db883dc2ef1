//! Linux and other Unix-like systems.

/// System directories that must not be written to.
pub const SYSTEM_PATHS: &[&str] = &[
    "/etc", "/bin", "/sbin", "/boot", "/sys", "/proc", "/dev", "/root", "/lib", "/lib64", "/usr",
    "/var", "/opt",
];

/// Locations that leak secrets or kernel state when merely read.
pub const READ_PROTECTED_PATHS: &[&str] = &[
    "/etc/shadow",
    "/etc/gshadow",
    "/etc/sudoers",
    "/etc/sudoers.d",
    "/etc/ssh",
    "/etc/ssl/private",
    "/root",
    "/boot",
    "/proc/kcore",
    "/dev/mem",
    "/dev/kmem",
    "/dev/port",
    "/sys/firmware",
];

/// NUL is the only byte a POSIX filename cannot hold besides the separator.
pub const INVALID_CHARS: &[char] = &['\0'];
