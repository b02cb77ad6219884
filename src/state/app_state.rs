//! Application state definitions

use super::forms::{FormState, StepGating};
use super::page_state::PageCache;
use serde::{Deserialize, Serialize};

/// Page rendered for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Register,
    Login,
    CreateProperty,
}

impl Page {
    /// File stem used for page assets
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Login => "login",
            Self::CreateProperty => "create-property",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Login => "Sign In",
            Self::CreateProperty => "List Property",
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    // Navigation
    pub current_path: &'static str,
    pub current_page: Page,
    pub history: Vec<&'static str>,

    // Pages
    pub pages: PageCache,

    // Registration
    pub form: FormState,

    // Go-to-path prompt; Some while open
    pub path_prompt: Option<String>,

    // Errors waiting to be dismissed, oldest first
    pub error_queue: Vec<String>,
}

impl AppState {
    pub fn new(gating: StepGating) -> Self {
        Self {
            current_path: "/",
            current_page: Page::Register,
            history: Vec::new(),
            pages: PageCache::default(),
            form: FormState::new(gating),
            path_prompt: None,
            error_queue: Vec::new(),
        }
    }

    /// Discard the registration form and start a fresh one
    pub fn reset_form(&mut self) {
        self.form = FormState::new(self.form.gating());
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StepGating::default())
    }
}
