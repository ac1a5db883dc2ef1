//! The `PathChecker` facade.
//!
//! Construction runs normalization and every text/prefix check eagerly.
//! Accessibility is probed lazily, once per checker, on first access.
//!
//! Polarity: [`PathChecker::is_safe`] is true when the path may be used,
//! [`PathChecker::is_dangerous`] is its inverse.

use std::cell::OnceCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::core::config::CheckerConfig;
use crate::core::error::{DangerReasons, DangerousPathError, Result};
use crate::domains::analysis::normalize::normalize;
use crate::domains::analysis::{access, matcher, traversal, validator};
use crate::domains::checker::mode::{CheckPolicy, Mode};
use crate::domains::checker::verdict::PathVerdict;
use crate::domains::platform::Platform;
use crate::domains::registry::UserPathRegistry;

#[derive(Debug, Clone, Copy)]
struct CheckOptions {
    mode: Mode,
    cwd_only: bool,
    policy: CheckPolicy,
}

/// Raw results of the eager checks, before mode and policy are applied.
#[derive(Debug, Clone, Copy)]
struct Classification {
    is_system_path: bool,
    is_read_protected: bool,
    is_sensitive_path: bool,
    has_invalid_chars: bool,
    is_outside_cwd: Option<bool>,
}

fn classify(
    path: &Path,
    options: &CheckOptions,
    registry: &UserPathRegistry,
) -> (PathBuf, Classification) {
    let platform = Platform::current();

    // Text checks run on the input: a NUL byte would make resolution fail
    let raw = path.to_string_lossy();
    let invalid = validator::find_invalid(&raw, platform);
    if let Some(reason) = &invalid {
        debug!("'{}' is invalid on {}: {}", raw, platform, reason);
    }

    let normalized = normalize(path);
    let classification = Classification {
        is_system_path: matcher::is_host_system_path(&normalized),
        is_read_protected: matcher::is_host_read_protected_path(&normalized),
        is_sensitive_path: matcher::is_sensitive_path(&normalized, registry),
        has_invalid_chars: invalid.is_some(),
        is_outside_cwd: options
            .cwd_only
            .then(|| traversal::is_outside_cwd(&normalized)),
    };
    (normalized, classification)
}

// ============================================================================
// Path Checker
// ============================================================================

/// Classification of one path, with lazily probed accessibility.
///
/// # Examples
///
/// ```rust,no_run
/// use bad_path::{Mode, PathChecker};
///
/// let checker = PathChecker::new("/etc/passwd");
/// if checker.is_dangerous() {
///     println!("system path: {}", checker.is_system_path());
/// }
///
/// let reader = PathChecker::builder("/etc/passwd")
///     .mode(Mode::Read)
///     .check()
///     .unwrap();
/// assert!(reader.is_safe());
/// ```
#[derive(Debug)]
pub struct PathChecker {
    path: PathBuf,
    normalized: PathBuf,
    options: CheckOptions,
    registry: Arc<UserPathRegistry>,
    classification: Classification,
    readable: OnceCell<bool>,
    writable: OnceCell<bool>,
    creatable: OnceCell<bool>,
}

impl PathChecker {
    /// Check `path` in write mode against the global registry.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::builder(path).evaluate()
    }

    /// Start configuring a check of `path`.
    pub fn builder(path: impl AsRef<Path>) -> PathCheckerBuilder {
        PathCheckerBuilder::new(path)
    }

    /// The path as supplied.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The absolute, resolved path every check ran on.
    pub fn normalized_path(&self) -> &Path {
        &self.normalized
    }

    pub fn mode(&self) -> Mode {
        self.options.mode
    }

    pub fn policy(&self) -> CheckPolicy {
        self.options.policy
    }

    /// Inside a platform system directory (full list, independent of mode).
    pub fn is_system_path(&self) -> bool {
        self.classification.is_system_path
    }

    /// Inside a user-defined sensitive path.
    pub fn is_sensitive_path(&self) -> bool {
        self.classification.is_sensitive_path
    }

    /// Contains characters or names that are invalid on this platform.
    pub fn has_invalid_chars(&self) -> bool {
        self.classification.has_invalid_chars
    }

    /// `Some` only when the check was confined to the working directory.
    pub fn is_outside_cwd(&self) -> Option<bool> {
        self.classification.is_outside_cwd
    }

    /// Whether the path exists and is readable. Probed once, then cached.
    pub fn is_readable(&self) -> bool {
        *self
            .readable
            .get_or_init(|| access::is_readable(&self.normalized))
    }

    /// Whether the path exists and is writable. Probed once, then cached.
    pub fn is_writable(&self) -> bool {
        *self
            .writable
            .get_or_init(|| access::is_writable(&self.normalized))
    }

    /// Whether the path is missing and could be created. Probed once, then cached.
    pub fn is_creatable(&self) -> bool {
        *self
            .creatable
            .get_or_init(|| access::is_creatable(&self.normalized))
    }

    /// The checks that make this path dangerous under its mode and policy.
    pub fn reasons(&self) -> DangerReasons {
        let c = &self.classification;
        let policy = self.options.policy;
        // Reading only counts the read-protected system subset and never
        // user-defined paths; the classification itself is kept either way.
        let (system_hit, sensitive_hit) = match self.options.mode {
            Mode::Write => (c.is_system_path, c.is_sensitive_path),
            Mode::Read => (c.is_read_protected, false),
        };

        DangerReasons {
            system_path: system_hit && !policy.system_ok,
            sensitive_path: sensitive_hit && !policy.user_paths_ok,
            invalid_chars: c.has_invalid_chars,
            outside_cwd: c.is_outside_cwd == Some(true),
            not_writable: policy.require_writable
                && !self.is_writable()
                && self.normalized.try_exists().unwrap_or(false),
        }
    }

    pub fn is_dangerous(&self) -> bool {
        self.reasons().any()
    }

    /// True means safe to use.
    pub fn is_safe(&self) -> bool {
        !self.is_dangerous()
    }

    /// Snapshot of the classification. Accessibility fields are included
    /// only if they were already probed.
    pub fn verdict(&self) -> PathVerdict {
        let reasons = self.reasons();
        PathVerdict {
            path: self.path.to_string_lossy().into_owned(),
            normalized_path: self.normalized.to_string_lossy().into_owned(),
            mode: self.options.mode,
            is_system_path: self.classification.is_system_path,
            is_sensitive_path: self.classification.is_sensitive_path,
            has_invalid_chars: self.classification.has_invalid_chars,
            is_outside_cwd: self.classification.is_outside_cwd,
            is_readable: self.readable.get().copied(),
            is_writable: self.writable.get().copied(),
            is_creatable: self.creatable.get().copied(),
            is_safe: !reasons.any(),
            reasons,
        }
    }

    /// [`verdict`](Self::verdict) with all three accessibility probes run.
    pub fn verdict_with_access(&self) -> PathVerdict {
        self.is_readable();
        self.is_writable();
        self.is_creatable();
        self.verdict()
    }

    /// Check another path with this checker's mode, policy and registry.
    ///
    /// The registry is shared, not copied: `path` is matched against its
    /// contents at the time of this call, including entries added after the
    /// checker was built.
    ///
    /// Returns true if `path` is dangerous. With `raise_error` a dangerous
    /// path is reported as an error instead.
    pub fn check_path(&self, path: impl AsRef<Path>, raise_error: bool) -> Result<bool> {
        let checker = PathCheckerBuilder {
            path: path.as_ref().to_path_buf(),
            mode: self.options.mode,
            cwd_only: self.options.cwd_only,
            raise_error,
            policy: self.options.policy,
            registry: Some(Arc::clone(&self.registry)),
        }
        .check()?;
        Ok(checker.is_dangerous())
    }

    /// Classify the supplied path again against the registry's current
    /// contents and the current working directory.
    ///
    /// This starts a fresh verdict: accessibility is probed again on next
    /// access. Returns true if the path is now dangerous.
    pub fn recheck(&mut self) -> bool {
        let (normalized, classification) = classify(&self.path, &self.options, &self.registry);
        self.normalized = normalized;
        self.classification = classification;
        self.readable = OnceCell::new();
        self.writable = OnceCell::new();
        self.creatable = OnceCell::new();
        self.is_dangerous()
    }
}

impl fmt::Display for PathChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_safe() { "safe" } else { "dangerous" };
        write!(f, "PathChecker('{}', {})", self.path.display(), status)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Options for a [`PathChecker`].
#[derive(Debug, Clone)]
pub struct PathCheckerBuilder {
    path: PathBuf,
    mode: Mode,
    cwd_only: bool,
    raise_error: bool,
    policy: CheckPolicy,
    registry: Option<Arc<UserPathRegistry>>,
}

impl PathCheckerBuilder {
    /// Write mode, no confinement, no error raising, global registry.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            mode: Mode::default(),
            cwd_only: false,
            raise_error: false,
            policy: CheckPolicy::default(),
            registry: None,
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Treat paths outside the current working directory as dangerous.
    pub fn cwd_only(mut self, cwd_only: bool) -> Self {
        self.cwd_only = cwd_only;
        self
    }

    /// Make [`check`](Self::check) fail when the path is dangerous.
    pub fn raise_error(mut self, raise_error: bool) -> Self {
        self.raise_error = raise_error;
        self
    }

    pub fn system_ok(mut self, system_ok: bool) -> Self {
        self.policy.system_ok = system_ok;
        self
    }

    pub fn user_paths_ok(mut self, user_paths_ok: bool) -> Self {
        self.policy.user_paths_ok = user_paths_ok;
        self
    }

    pub fn require_writable(mut self, require_writable: bool) -> Self {
        self.policy.require_writable = require_writable;
        self
    }

    pub fn policy(mut self, policy: CheckPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Match against `registry` instead of the global one.
    pub fn registry(mut self, registry: Arc<UserPathRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Apply configured defaults (mode, confinement, error raising).
    pub fn with_config(mut self, config: &CheckerConfig) -> Self {
        self.mode = config.mode;
        self.cwd_only = config.cwd_only;
        self.raise_error = config.raise_error;
        self
    }

    /// Run the checks.
    ///
    /// Fails only when `raise_error` is set and the path is dangerous.
    #[instrument(skip_all, fields(path = %self.path.display(), mode = %self.mode))]
    pub fn check(self) -> Result<PathChecker> {
        let raise_error = self.raise_error;
        let checker = self.evaluate();

        if raise_error {
            let reasons = checker.reasons();
            if reasons.any() {
                warn!(
                    "Rejecting dangerous path '{}': {}",
                    checker.path.display(),
                    reasons
                );
                return Err(DangerousPathError {
                    path: checker.path.clone(),
                    reasons,
                }
                .into());
            }
        }

        Ok(checker)
    }

    fn evaluate(self) -> PathChecker {
        let options = CheckOptions {
            mode: self.mode,
            cwd_only: self.cwd_only,
            policy: self.policy,
        };
        let registry = self.registry.unwrap_or_else(UserPathRegistry::global);
        let (normalized, classification) = classify(&self.path, &options, &registry);

        debug!(
            "Classified '{}' -> '{}' (system: {}, sensitive: {}, invalid: {}, outside cwd: {:?})",
            self.path.display(),
            normalized.display(),
            classification.is_system_path,
            classification.is_sensitive_path,
            classification.has_invalid_chars,
            classification.is_outside_cwd
        );

        PathChecker {
            path: self.path,
            normalized,
            options,
            registry,
            classification,
            readable: OnceCell::new(),
            writable: OnceCell::new(),
            creatable: OnceCell::new(),
        }
    }
}
