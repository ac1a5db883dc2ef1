//! Individual path checks.
//!
//! ## Architecture
//!
//! - `components.rs` - Platform-aware splitting and comparison of path text
//! - `normalize.rs` - Home expansion, resolution and lexical fallback
//! - `matcher.rs` - System and user-defined prefix matching
//! - `validator.rs` - Invalid characters, reserved names, trailing rule
//! - `traversal.rs` - Working-directory confinement
//! - `access.rs` - Read / write / create probes
//!
//! The checks are independent of each other; `checker` composes them.

pub mod access;
pub mod components;
pub mod matcher;
pub mod normalize;
pub mod traversal;
pub mod validator;

pub use normalize::{lexical_normalize, normalize};
pub use validator::{InvalidReason, find_invalid, has_invalid_chars};
