//! Path classification.
//!
//! ## Architecture
//!
//! - `mode.rs` - Read / write mode and policy exemptions
//! - `path_checker.rs` - The `PathChecker` facade and its builder
//! - `verdict.rs` - Serializable classification snapshot
//! - `functions.rs` - One-shot helpers over the global registry

pub mod functions;
pub mod mode;
pub mod path_checker;
pub mod verdict;

pub use functions::{
    add_user_path, clear_user_paths, ensure_safe_path, get_dangerous_paths, get_user_paths,
    is_dangerous_path, is_sensitive_path, is_system_path, remove_user_path,
};
pub use mode::{CheckPolicy, Mode};
pub use path_checker::{PathChecker, PathCheckerBuilder};
pub use verdict::PathVerdict;
