//! Navigation: route table, access guard and lazy page loading

mod guard;
mod loader;
mod table;

pub use guard::{AccessGuard, AuthProvider, GuardDecision, StaticAuth};
pub use loader::{spawn_load, AssetPageLoader, PageContent, PageLoaded, PageLoader};
pub use table::{match_route, path_for, ROUTES};

#[cfg(test)]
pub use loader::builtin_content;
#[cfg(test)]
pub use guard::MockAuthProvider;
#[cfg(test)]
pub use loader::MockPageLoader;

use crate::error::RouteError;
use crate::state::Page;

/// Where a navigation request ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Path actually rendered
    pub path: &'static str,
    pub page: Page,
    /// Set when the guard replaced the requested path
    pub redirected_from: Option<String>,
}

/// Resolves paths against the route table, applying the access guard
#[derive(Clone)]
pub struct Router {
    guard: AccessGuard,
}

impl Router {
    pub fn new(guard: AccessGuard) -> Self {
        Self { guard }
    }

    pub fn resolve(&self, path: &str) -> Result<Navigation, RouteError> {
        let route = match_route(path)?;
        if !route.guarded {
            return Ok(Navigation {
                path: route.path,
                page: route.page,
                redirected_from: None,
            });
        }

        match self.guard.check() {
            GuardDecision::Allow => Ok(Navigation {
                path: route.path,
                page: route.page,
                redirected_from: None,
            }),
            GuardDecision::Redirect(target) => {
                tracing::warn!(requested = route.path, target, "guarded route, redirecting");
                let target_route = match_route(target)?;
                Ok(Navigation {
                    path: target_route.path,
                    page: target_route.page,
                    redirected_from: Some(route.path.to_string()),
                })
            }
        }
    }
}
