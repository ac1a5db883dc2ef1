//! Configuration management for the path checker.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally through a `.env` file)
//! or defaults. Library callers can also build it directly.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::domains::checker::Mode;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Defaults applied to every checker built with this configuration.
    pub checker: CheckerConfig,

    /// Administrator deny-list seeded into a registry.
    pub registry: RegistryConfig,

    /// Logging configuration (used by the command-line shell).
    pub logging: LoggingConfig,
}

/// Default options for `PathChecker`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Check mode, `write` unless configured otherwise.
    pub mode: Mode,

    /// Confine accepted paths to the current working directory subtree.
    pub cwd_only: bool,

    /// Turn a dangerous verdict into an error.
    pub raise_error: bool,
}

/// Configuration for the user path registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Paths treated as sensitive in addition to the platform system paths.
    pub user_paths: Vec<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `BAD_PATH_`:
    /// `BAD_PATH_MODE`, `BAD_PATH_CWD_ONLY`, `BAD_PATH_RAISE_ERROR`,
    /// `BAD_PATH_USER_PATHS` (a list in the OS path-list syntax, `:` separated
    /// on Unix and `;` on Windows) and `BAD_PATH_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(mode) = std::env::var("BAD_PATH_MODE") {
            match mode.parse() {
                Ok(mode) => config.checker.mode = mode,
                Err(e) => warn!("Ignoring BAD_PATH_MODE: {}", e),
            }
        }

        if let Some(cwd_only) = bool_var("BAD_PATH_CWD_ONLY") {
            config.checker.cwd_only = cwd_only;
        }

        if let Some(raise_error) = bool_var("BAD_PATH_RAISE_ERROR") {
            config.checker.raise_error = raise_error;
        }

        if let Some(paths) = std::env::var_os("BAD_PATH_USER_PATHS") {
            config.registry.user_paths = std::env::split_paths(&paths)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            info!(
                "Loaded {} user-defined sensitive path(s) from environment",
                config.registry.user_paths.len()
            );
        }

        if let Ok(level) = std::env::var("BAD_PATH_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }
}

fn bool_var(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!("Ignoring {}: '{}' is not a boolean", name, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "BAD_PATH_MODE",
        "BAD_PATH_CWD_ONLY",
        "BAD_PATH_RAISE_ERROR",
        "BAD_PATH_USER_PATHS",
        "BAD_PATH_LOG_LEVEL",
    ];

    fn clear_vars() {
        for var in VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.checker.mode, Mode::Write);
        assert!(!config.checker.cwd_only);
        assert!(!config.checker.raise_error);
        assert!(config.registry.user_paths.is_empty());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_checker_options_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("BAD_PATH_MODE", "read");
            std::env::set_var("BAD_PATH_CWD_ONLY", "true");
            std::env::set_var("BAD_PATH_RAISE_ERROR", "1");
            std::env::set_var("BAD_PATH_LOG_LEVEL", "debug");
        }
        let config = Config::from_env();
        assert_eq!(config.checker.mode, Mode::Read);
        assert!(config.checker.cwd_only);
        assert!(config.checker.raise_error);
        assert_eq!(config.logging.level, "debug");
        clear_vars();
    }

    #[test]
    fn test_user_paths_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        let joined =
            std::env::join_paths([PathBuf::from("/srv/secrets"), PathBuf::from("/opt/keys")])
                .unwrap();
        unsafe {
            std::env::set_var("BAD_PATH_USER_PATHS", &joined);
        }
        let config = Config::from_env();
        assert_eq!(
            config.registry.user_paths,
            vec![PathBuf::from("/srv/secrets"), PathBuf::from("/opt/keys")]
        );
        clear_vars();
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("BAD_PATH_MODE", "append");
            std::env::set_var("BAD_PATH_CWD_ONLY", "maybe");
        }
        let config = Config::from_env();
        assert_eq!(config.checker.mode, Mode::Write);
        assert!(!config.checker.cwd_only);
        clear_vars();
    }
}
