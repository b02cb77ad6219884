//! Authentication gate for guarded routes

use super::table::LOGIN_PATH;
use std::sync::Arc;

/// Source of the current authentication status
#[cfg_attr(test, mockall::automock)]
pub trait AuthProvider: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

/// Fixed authentication status, set from configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAuth {
    authenticated: bool,
}

impl StaticAuth {
    pub fn new(authenticated: bool) -> Self {
        Self { authenticated }
    }
}

impl AuthProvider for StaticAuth {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the guarded page unchanged
    Allow,
    /// Replace the navigation target; the requested path is not remembered
    Redirect(&'static str),
}

/// Decide a guarded navigation from an authentication status
pub fn check(is_authenticated: bool) -> GuardDecision {
    if is_authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Gate backed by an injected [`AuthProvider`]
#[derive(Clone)]
pub struct AccessGuard {
    provider: Arc<dyn AuthProvider>,
}

impl AccessGuard {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    pub fn check(&self) -> GuardDecision {
        check(self.provider.is_authenticated())
    }
}
