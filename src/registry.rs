//! Verifier registry: string-keyed lookup, register and unregister.
//!
//! Built-in verifiers are inserted at startup. The registry is the single
//! point of process-wide mutable state in this crate; it is read far more
//! often than written, so a reader-preferring [`RwLock`](std::sync::RwLock)
//! guards the map rather than a single mutex held for the duration of a scan.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::verify;

/// A verifier's signature: take the matched text, return whether it passes.
///
/// Verifiers are total and deterministic (spec invariant): no input may
/// cause a panic, and two calls with the same input must agree.
pub type VerifierFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// String-keyed store of verifier functions, safe for concurrent lookup
/// during scanning and serialized register/unregister.
pub struct VerifierRegistry {
    inner: RwLock<HashMap<String, VerifierFn>>,
}

impl std::fmt::Debug for VerifierRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifierRegistry").finish_non_exhaustive()
    }
}

impl VerifierRegistry {
    /// An empty registry with no builtins. Mainly useful in tests that want
    /// isolation from the process-wide default.
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// A registry pre-populated with every verifier from §4.1.
    pub fn with_builtins() -> Self {
        let registry = Self::empty();
        for (name, f) in verify::builtin_verifiers() {
            registry.register(name, f);
        }
        registry
    }

    /// Look up a verifier by name. Returns a cloned `Arc` so the caller can
    /// invoke it without holding the registry lock, meaning a concurrent
    /// `unregister` cannot invalidate an in-flight call.
    pub fn lookup(&self, name: &str) -> Option<VerifierFn> {
        self.inner.read().expect("registry lock poisoned").get(name).cloned()
    }

    /// Register a verifier under `name`, silently replacing any existing
    /// entry with that name.
    pub fn register(&self, name: impl Into<String>, f: impl Fn(&str) -> bool + Send + Sync + 'static) {
        let mut guard = self.inner.write().expect("registry lock poisoned");
        guard.insert(name.into(), Arc::new(f));
    }

    /// Remove a verifier by name. Returns whether an entry was removed.
    pub fn unregister(&self, name: &str) -> bool {
        self.inner
            .write()
            .expect("registry lock poisoned")
            .remove(name)
            .is_some()
    }

    /// Number of registered verifiers, mainly for diagnostics/tests.
    pub fn len(&self) -> usize {
        self.inner.read().expect("registry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VerifierRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// The process-wide default registry, used by [`crate::scan`] when callers
/// don't want to manage their own.
static DEFAULT_REGISTRY: Lazy<VerifierRegistry> = Lazy::new(VerifierRegistry::with_builtins);

/// Borrow the process-wide default registry.
pub fn default_registry() -> &'static VerifierRegistry {
    &DEFAULT_REGISTRY
}

/// Look up a verifier in the default registry.
pub fn lookup_verifier(name: &str) -> Option<VerifierFn> {
    DEFAULT_REGISTRY.lookup(name)
}

/// Register a verifier in the default registry.
pub fn register_verifier(name: impl Into<String>, f: impl Fn(&str) -> bool + Send + Sync + 'static) {
    DEFAULT_REGISTRY.register(name, f);
}

/// Unregister a verifier from the default registry. Returns whether it existed.
pub fn unregister_verifier(name: &str) -> bool {
    DEFAULT_REGISTRY.unregister(name)
}
