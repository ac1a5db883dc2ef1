//! Domains module containing the classification engine organized by concern.
//!
//! - **platform**: per-OS reference data (system prefixes, invalid characters,
//!   reserved names)
//! - **analysis**: the individual checks (normalization, matching, character
//!   validation, traversal confinement, accessibility)
//! - **registry**: the user-defined sensitive path store
//! - **checker**: the `PathChecker` facade and free functions composing the
//!   checks into a verdict

pub mod analysis;
pub mod checker;
pub mod platform;
pub mod registry;
