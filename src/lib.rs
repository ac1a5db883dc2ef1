//! Dangerous path classification
//!
//! This crate decides whether a filesystem path is safe to read from or write
//! to, using only the path text and cheap filesystem metadata. It rejects
//! system locations, administrator-defined sensitive paths, platform-invalid
//! characters and (optionally) escapes from the working directory.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - **core**: Configuration and error handling
//! - **domains**: The classification engine organized by concern
//!   - **platform**: Per-OS reference data
//!   - **analysis**: Normalization and the individual checks
//!   - **registry**: User-defined sensitive paths
//!   - **checker**: The `PathChecker` facade and free functions
//!
//! # Example
//!
//! ```rust,no_run
//! use bad_path::{Mode, PathChecker, add_user_path, is_dangerous_path};
//!
//! fn main() -> bad_path::Result<()> {
//!     assert!(is_dangerous_path("/etc/passwd"));
//!
//!     add_user_path("/srv/secrets");
//!     let writer = PathChecker::builder("/srv/secrets/token")
//!         .mode(Mode::Write)
//!         .check()?;
//!     assert!(writer.is_dangerous());
//!
//!     let reader = PathChecker::builder("/srv/secrets/token")
//!         .mode(Mode::Read)
//!         .check()?;
//!     assert!(reader.is_safe() && reader.is_sensitive_path());
//!
//!     let output = bad_path::ensure_safe_path("./out/report.txt")?;
//!     println!("writing to {}", output.display());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, DangerReasons, DangerousPathError, Error, Result};
pub use domains::checker::{
    CheckPolicy, Mode, PathChecker, PathCheckerBuilder, PathVerdict, add_user_path,
    clear_user_paths, ensure_safe_path, get_dangerous_paths, get_user_paths, is_dangerous_path,
    is_sensitive_path, is_system_path, remove_user_path,
};
pub use domains::platform::Platform;
pub use domains::registry::UserPathRegistry;
