//! User path registry - the administrator-configured deny-list.
//!
//! This module provides:
//! - An explicit, lock-guarded store of user-defined sensitive paths
//! - A process-wide default instance used by the crate's free functions
//!
//! Entries are kept as supplied (insertion ordered, without duplicates) and
//! are only normalized when a path is matched against them. The store is
//! append-only until an explicit `remove` or `clear`.

use std::path::Path;
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::core::config::RegistryConfig;
use crate::core::error::{Error, Result};

static GLOBAL: LazyLock<Arc<UserPathRegistry>> =
    LazyLock::new(|| Arc::new(UserPathRegistry::new()));

// ============================================================================
// User Path Registry
// ============================================================================

/// Store of user-defined sensitive paths.
///
/// Safe to share between threads; readers take a snapshot so no lock is held
/// while paths are resolved against the filesystem.
#[derive(Debug, Default)]
pub struct UserPathRegistry {
    paths: RwLock<Vec<String>>,
}

impl UserPathRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded from configuration.
    pub fn from_config(config: &RegistryConfig) -> Self {
        let registry = Self::new();
        for path in &config.user_paths {
            registry.add(path);
        }
        registry
    }

    /// The process-wide registry shared by checkers that were not given one.
    pub fn global() -> Arc<UserPathRegistry> {
        Arc::clone(&GLOBAL)
    }

    /// Register a sensitive path. Returns `false` if it was already present.
    pub fn add(&self, path: impl AsRef<Path>) -> bool {
        let entry = path.as_ref().to_string_lossy().into_owned();
        let mut paths = self.write();
        if paths.contains(&entry) {
            debug!("User path '{}' already registered", entry);
            return false;
        }
        info!("Registered user-defined sensitive path '{}'", entry);
        paths.push(entry);
        true
    }

    /// Unregister a path previously passed to [`add`](Self::add).
    pub fn remove(&self, path: impl AsRef<Path>) -> Result<()> {
        let entry = path.as_ref().to_string_lossy().into_owned();
        let mut paths = self.write();
        match paths.iter().position(|p| *p == entry) {
            Some(index) => {
                paths.remove(index);
                info!("Removed user-defined sensitive path '{}'", entry);
                Ok(())
            }
            None => Err(Error::NotRegistered(entry)),
        }
    }

    /// Remove every entry.
    pub fn clear(&self) {
        let mut paths = self.write();
        if !paths.is_empty() {
            info!("Cleared {} user-defined sensitive path(s)", paths.len());
        }
        paths.clear();
    }

    /// Snapshot of the registered entries, in insertion order.
    pub fn paths(&self) -> Vec<String> {
        self.read().clone()
    }

    /// Whether `path` is registered verbatim.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        let entry = path.as_ref().to_string_lossy();
        self.read().iter().any(|p| *p == entry)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-updated,
    // so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Vec<String>> {
        self.paths.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<String>> {
        self.paths.write().unwrap_or_else(PoisonError::into_inner)
    }
}
