//! Per-page load state for lazily resolved pages

use super::app_state::Page;
use crate::error::LoadError;
use crate::routes::PageContent;
use std::collections::HashMap;
use std::time::Instant;

/// Resolution state of one page
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    NotLoaded,
    Loading { attempt: u32, started: Instant },
    Ready(PageContent),
    Failed { error: LoadError, attempt: u32 },
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}

/// Load states for every page seen this session
#[derive(Debug, Default)]
pub struct PageCache {
    states: HashMap<Page, LoadState>,
}

impl PageCache {
    pub fn get(&self, page: Page) -> &LoadState {
        self.states.get(&page).unwrap_or(&LoadState::NotLoaded)
    }

    /// Mark a page as loading if it needs a load.
    /// Returns the attempt number to start, or None when already ready or in flight.
    pub fn begin(&mut self, page: Page) -> Option<u32> {
        let attempt = match self.get(page) {
            LoadState::Ready(_) | LoadState::Loading { .. } => return None,
            LoadState::NotLoaded => 1,
            LoadState::Failed { attempt, .. } => attempt + 1,
        };
        self.states.insert(
            page,
            LoadState::Loading {
                attempt,
                started: Instant::now(),
            },
        );
        Some(attempt)
    }

    /// Record a finished attempt. Results for superseded attempts are dropped.
    pub fn complete(
        &mut self,
        page: Page,
        attempt: u32,
        result: Result<PageContent, LoadError>,
    ) -> bool {
        match self.get(page) {
            LoadState::Loading { attempt: current, .. } if *current == attempt => {}
            _ => return false,
        }
        let state = match result {
            Ok(content) => LoadState::Ready(content),
            Err(error) => LoadState::Failed { error, attempt },
        };
        self.states.insert(page, state);
        true
    }
}
