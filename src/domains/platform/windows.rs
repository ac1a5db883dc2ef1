//! Windows.

/// System directories that must not be written to.
pub const SYSTEM_PATHS: &[&str] = &[
    "C:\\Windows",
    "C:\\Windows\\System32",
    "C:\\Program Files",
    "C:\\Program Files (x86)",
    "C:\\ProgramData",
];

/// Environment variables naming further system directories on this host.
pub const SYSTEM_PATH_VARS: &[&str] = &[
    "WINDIR",
    "SYSTEMROOT",
    "ProgramFiles",
    "ProgramFiles(x86)",
    "ProgramData",
];

/// Registry hives, the repair copies of them and the AD database.
pub const READ_PROTECTED_PATHS: &[&str] = &[
    "C:\\Windows\\System32\\config",
    "C:\\Windows\\repair",
    "C:\\Windows\\NTDS",
];

/// `< > : " | ? *` and the control characters U+0000..=U+001F.
///
/// `/` and `\` are separators and are handled by component splitting.
pub const INVALID_CHARS: &[char] = &[
    '<', '>', ':', '"', '|', '?', '*', '\u{0}', '\u{1}', '\u{2}', '\u{3}', '\u{4}', '\u{5}',
    '\u{6}', '\u{7}', '\u{8}', '\u{9}', '\u{a}', '\u{b}', '\u{c}', '\u{d}', '\u{e}', '\u{f}',
    '\u{10}', '\u{11}', '\u{12}', '\u{13}', '\u{14}', '\u{15}', '\u{16}', '\u{17}', '\u{18}',
    '\u{19}', '\u{1a}', '\u{1b}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{1f}',
];

/// Device names reserved regardless of case or extension.
pub const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];
