//! Check modes and policy switches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;

/// How the caller intends to use the path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Reading: only read-protected system locations count as dangerous,
    /// user-defined sensitive paths do not.
    Read,
    /// Writing: every system and user-defined sensitive location counts as
    /// dangerous.
    #[default]
    Write,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Read => "read",
            Mode::Write => "write",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "read" => Ok(Mode::Read),
            "write" => Ok(Mode::Write),
            _ => Err(Error::InvalidMode(format!("'{}'", s))),
        }
    }
}

/// Exemptions that relax the danger decision.
///
/// Invalid characters and working-directory escapes are never exempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckPolicy {
    /// Do not count system locations as dangerous.
    pub system_ok: bool,

    /// Do not count user-defined sensitive locations as dangerous (they
    /// never count in read mode).
    pub user_paths_ok: bool,

    /// Count an existing path the process cannot write as dangerous.
    pub require_writable: bool,
}
