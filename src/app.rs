//! Application state and core logic

use crate::config::TuiConfig;
use crate::routes::{
    path_for, spawn_load, AccessGuard, AssetPageLoader, AuthProvider, PageLoaded, PageLoader,
    Router, StaticAuth,
};
use crate::state::{
    AppState, Form, FormAction, LoadState, Page, StepChange, StepGating, SubmissionOutcome,
    SubmitOutcome,
};
use crate::submission::{spawn_submit, LoggingSubmitter, SubmissionFinished, SubmissionHandler};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Longest path accepted by the go-to prompt
const MAX_PROMPT_LEN: usize = 256;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Resolves paths and applies the access guard
    router: Router,
    /// Resolves page content on first visit
    loader: Arc<dyn PageLoader>,
    /// Receives the final registration
    submitter: Arc<dyn SubmissionHandler>,
    /// Bound on a single page load
    load_timeout: Duration,
    load_tx: UnboundedSender<PageLoaded>,
    load_rx: UnboundedReceiver<PageLoaded>,
    submit_tx: UnboundedSender<SubmissionFinished>,
    submit_rx: UnboundedReceiver<SubmissionFinished>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App from user configuration
    pub fn new(config: &TuiConfig) -> Self {
        let auth: Arc<dyn AuthProvider> = Arc::new(StaticAuth::new(config.is_authenticated()));
        let loader: Arc<dyn PageLoader> = Arc::new(AssetPageLoader::new(config.pages_dir.clone()));
        Self::with_collaborators(
            auth,
            loader,
            Arc::new(LoggingSubmitter),
            config.step_gating(),
            config.page_load_timeout(),
        )
    }

    /// Create an App with explicit collaborators
    pub fn with_collaborators(
        auth: Arc<dyn AuthProvider>,
        loader: Arc<dyn PageLoader>,
        submitter: Arc<dyn SubmissionHandler>,
        gating: StepGating,
        load_timeout: Duration,
    ) -> Self {
        let (load_tx, load_rx) = mpsc::unbounded_channel();
        let (submit_tx, submit_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(gating),
            router: Router::new(AccessGuard::new(auth)),
            loader,
            submitter,
            load_timeout,
            load_tx,
            load_rx,
            submit_tx,
            submit_rx,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Show the initial page without recording history.
    /// Falls back to the registration page when `path` does not resolve.
    pub fn open(&mut self, path: &str) {
        match self.router.resolve(path) {
            Ok(nav) => self.show(nav.path, nav.page),
            Err(err) => {
                self.push_error(err.to_string());
                self.show(path_for(Page::Register), Page::Register);
            }
        }
    }

    /// Navigate to a path, recording the current path in history.
    /// Returns false if the path matched no route.
    pub fn navigate(&mut self, path: &str) -> bool {
        let nav = match self.router.resolve(path) {
            Ok(nav) => nav,
            Err(err) => {
                tracing::info!("navigation failed: {err}");
                self.push_error(err.to_string());
                return false;
            }
        };

        if let Some(requested) = &nav.redirected_from {
            self.status_message = Some(format!("Sign in to open {requested}"));
        }
        if nav.path == self.state.current_path {
            return true;
        }

        tracing::info!(from = self.state.current_path, to = nav.path, "navigate");
        self.state.history.push(self.state.current_path);
        self.show(nav.path, nav.page);
        true
    }

    /// Go back to previous path
    pub fn go_back(&mut self) {
        if let Some(path) = self.state.history.pop() {
            // Re-resolve so the guard is consulted again
            match self.router.resolve(path) {
                Ok(nav) => self.show(nav.path, nav.page),
                Err(err) => self.push_error(err.to_string()),
            }
        }
    }

    fn show(&mut self, path: &'static str, page: Page) {
        self.state.current_path = path;
        self.state.current_page = page;
        self.ensure_page_loading(page);
    }

    /// Start resolving a page's content if it is not ready or in flight
    fn ensure_page_loading(&mut self, page: Page) {
        if let Some(attempt) = self.state.pages.begin(page) {
            tracing::info!(?page, attempt, "loading page");
            spawn_load(
                Arc::clone(&self.loader),
                page,
                attempt,
                self.load_timeout,
                self.load_tx.clone(),
            );
        }
    }

    /// Retry a failed load of the current page
    pub fn retry_page_load(&mut self) {
        let page = self.state.current_page;
        if matches!(self.state.pages.get(page), LoadState::Failed { .. }) {
            self.ensure_page_loading(page);
        }
    }

    /// Apply every finished page load without blocking
    pub fn poll_page_loads(&mut self) {
        while let Ok(loaded) = self.load_rx.try_recv() {
            self.apply_page_load(loaded);
        }
    }

    /// Apply a submitter answer if one has arrived
    pub fn poll_submissions(&mut self) {
        while let Ok(finished) = self.submit_rx.try_recv() {
            self.apply_submission(finished);
        }
    }

    /// Whether background work is running that the UI animates or waits on
    pub fn is_busy(&self) -> bool {
        let page = self.state.current_page;
        self.state.form.is_submitting()
            || matches!(self.state.pages.get(page), LoadState::Loading { .. })
    }

    fn apply_page_load(&mut self, loaded: PageLoaded) {
        let PageLoaded {
            page,
            attempt,
            result,
        } = loaded;
        if self.state.pages.complete(page, attempt, result) {
            tracing::debug!(?page, attempt, "page load applied");
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        // Go-to-path prompt (modal)
        if self.state.path_prompt.is_some() {
            self.handle_path_prompt_key(key);
            return;
        }

        // Clear any status messages on key press
        self.status_message = None;

        if key.code == KeyCode::Char('g') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.path_prompt = Some(String::new());
            return;
        }

        // Sidebar shortcuts
        let sidebar_target = match key.code {
            KeyCode::F(1) => Some(Page::Register),
            KeyCode::F(2) => Some(Page::Login),
            KeyCode::F(3) => Some(Page::CreateProperty),
            _ => None,
        };
        if let Some(page) = sidebar_target {
            self.navigate(path_for(page));
            return;
        }

        let page = self.state.current_page;
        let load = self.state.pages.get(page);
        let failed = matches!(load, LoadState::Failed { .. });
        if !load.is_ready() {
            if failed {
                match key.code {
                    KeyCode::Char('r') => self.retry_page_load(),
                    KeyCode::Esc => self.go_back(),
                    _ => {}
                }
            }
            // Nothing else to interact with until the page resolves
            return;
        }

        match page {
            Page::Register => self.handle_register_key(key),
            Page::Login => self.handle_login_key(key),
            Page::CreateProperty => self.handle_create_property_key(key),
        }
    }

    fn handle_path_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.state.path_prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.state.path_prompt = None,
            KeyCode::Enter => {
                let path = std::mem::take(prompt);
                self.state.path_prompt = None;
                self.navigate(&path);
            }
            KeyCode::Backspace => {
                prompt.pop();
            }
            KeyCode::Char(c) if prompt.len() < MAX_PROMPT_LEN => prompt.push(c),
            _ => {}
        }
    }

    /// Handle keys on the registration page
    fn handle_register_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        let on_buttons = form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            // Left/Right for buttons row navigation
            KeyCode::Left if on_buttons => form.prev_button(),
            KeyCode::Right if on_buttons => form.next_button(),
            KeyCode::Enter if on_buttons => {
                if let Some(action) = form.selected_action() {
                    self.run_form_action(action);
                }
            }
            // Enter in a field submits the form, like pressing Enter in a browser form
            KeyCode::Enter => self.submit_form(),
            // Ctrl+S on every platform, plus Cmd+S on macOS
            KeyCode::Char('s')
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | crate::platform::SHORTCUT_MODIFIER) =>
            {
                self.submit_form();
            }
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER) => {
                self.paste_from_clipboard();
            }
            KeyCode::Esc => {
                self.state.form.prev_step();
            }
            KeyCode::Char(c)
                if !on_buttons
                    && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.input_char(c)
            }
            KeyCode::Backspace if !on_buttons => form.backspace(),
            _ => {}
        }
    }

    fn run_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::Previous => {
                self.state.form.prev_step();
            }
            FormAction::Next => {
                if let StepChange::Blocked(count) = self.state.form.next_step() {
                    let noun = if count == 1 { "field needs" } else { "fields need" };
                    self.status_message = Some(format!("{count} {noun} attention"));
                }
            }
            FormAction::SignUp => {
                if self.state.form.can_submit() {
                    self.submit_form();
                } else {
                    self.status_message = Some("Complete every field to sign up".to_string());
                }
            }
            FormAction::SignIn => {
                self.navigate(path_for(Page::Login));
            }
        }
    }

    /// Validate and submit; advances instead when not on the last step
    fn submit_form(&mut self) {
        match self.state.form.submit() {
            SubmitOutcome::Invalid(count) => {
                let noun = if count == 1 { "field needs" } else { "fields need" };
                self.status_message = Some(format!("{count} {noun} attention"));
            }
            SubmitOutcome::Advanced(_) => {}
            SubmitOutcome::Dispatch(values) => {
                tracing::info!("submitting registration");
                spawn_submit(Arc::clone(&self.submitter), values, self.submit_tx.clone());
            }
            SubmitOutcome::Busy => {
                self.status_message = Some("Submission in progress".to_string());
            }
        }
    }

    fn apply_submission(&mut self, finished: SubmissionFinished) {
        match self.state.form.finish_submission(finished.result) {
            SubmissionOutcome::Submitted(receipt) => {
                self.state.reset_form();
                self.status_message = Some(format!("Registration submitted ({})", receipt.id));
            }
            SubmissionOutcome::Failed(message) => {
                self.push_error(format!("Registration failed: {message}"));
            }
        }
    }

    fn paste_from_clipboard(&mut self) {
        match Self::read_clipboard() {
            Ok(text) => self.state.form.paste(&text),
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err:#}");
                self.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    fn read_clipboard() -> Result<String> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        Ok(clipboard.get_text()?)
    }

    /// Handle keys on the sign-in page
    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => {
                self.navigate(path_for(Page::Register));
            }
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    /// Handle keys on the create-property page
    fn handle_create_property_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.go_back();
        }
    }

    /// Request exit
    pub fn quit(&mut self) {
        self.quit = true;
    }
}
