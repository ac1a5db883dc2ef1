//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks used by every
//! domain: error handling and configuration.

pub mod config;
pub mod error;

pub use config::{CheckerConfig, Config, LoggingConfig, RegistryConfig};
pub use error::{DangerReasons, DangerousPathError, Error, Result};
