//! Static route table

use crate::error::RouteError;
use crate::state::Page;

/// Where unauthenticated navigation to a guarded route ends up
pub const LOGIN_PATH: &str = "/login";

/// A navigable path and the page it renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
    /// Requires an authenticated session
    pub guarded: bool,
}

/// Routes in declaration order
pub const ROUTES: [Route; 3] = [
    Route {
        path: "/",
        page: Page::Register,
        guarded: false,
    },
    Route {
        path: LOGIN_PATH,
        page: Page::Login,
        guarded: false,
    },
    Route {
        path: "/create/property",
        page: Page::CreateProperty,
        guarded: true,
    },
];

/// Strip query/fragment and a trailing slash; ensure a leading slash
pub fn normalize(path: &str) -> String {
    let path = path.trim();
    let path = path
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Find the route for a path (exact match after normalization)
pub fn match_route(path: &str) -> Result<&'static Route, RouteError> {
    let normalized = normalize(path);
    ROUTES
        .iter()
        .find(|route| route.path == normalized)
        .ok_or(RouteError::NotFound(normalized))
}

/// Canonical path of a page
pub fn path_for(page: Page) -> &'static str {
    ROUTES
        .iter()
        .find(|route| route.page == page)
        .map(|route| route.path)
        .unwrap_or("/")
}
