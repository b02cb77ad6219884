//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod loading;
mod pages;

use crate::app::App;
use crate::state::{LoadState, Page};
use components::{render_error_dialog, render_prompt_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on the current page and its load state
    let page = app.state.current_page;
    match app.state.pages.get(page) {
        LoadState::NotLoaded => loading::draw_loading(
            frame,
            main_area,
            page.label(),
            std::time::Duration::ZERO,
        ),
        LoadState::Loading { started, .. } => {
            loading::draw_loading(frame, main_area, page.label(), started.elapsed())
        }
        LoadState::Failed { error, attempt } => {
            loading::draw_failed(frame, main_area, page.label(), error, *attempt)
        }
        LoadState::Ready(content) => match page {
            Page::Register => forms::draw_register(frame, main_area, content, &app.state.form),
            Page::Login => pages::draw_content_page(
                frame,
                main_area,
                content,
                "Enter: register instead  Esc: back",
            ),
            Page::CreateProperty => {
                pages::draw_content_page(frame, main_area, content, "Esc: back")
            }
        },
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    if let Some(input) = &app.state.path_prompt {
        render_prompt_dialog(frame, input);
    }

    // Error dialog sits above everything else
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, app.state.error_queue.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::routes::builtin_content;
    use crate::state::{FieldName, FormState, StepGating, SubmitOutcome};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn ready_app(page: Page) -> App {
        let mut app = App::new(&TuiConfig::default());
        app.state.current_page = page;
        app.state.pages.begin(page);
        app.state
            .pages
            .complete(page, 1, Ok(builtin_content(page)));
        app
    }

    #[test]
    fn test_register_page_shows_first_step() {
        let screen = render(&ready_app(Page::Register));
        assert!(screen.contains("Step 1 of 3: Personal Information"));
        assert!(screen.contains("Name"));
        assert!(screen.contains("Next"));
        assert!(!screen.contains("Sign Up"));
    }

    #[test]
    fn test_failed_page_offers_retry() {
        let mut app = ready_app(Page::Register);
        app.state.current_page = Page::Login;
        app.state.pages.begin(Page::Login);
        app.state.pages.complete(
            Page::Login,
            1,
            Err(crate::error::LoadError::Timeout(5000)),
        );
        let screen = render(&app);
        assert!(screen.contains("This page could not be loaded"));
        assert!(screen.contains("Loading timed out after 5000 ms"));
    }

    #[test]
    fn test_error_dialog_overlays_page() {
        let mut app = ready_app(Page::Login);
        app.push_error("No page found at /admin");
        let screen = render(&app);
        assert!(screen.contains("No page found at /admin"));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_short_error_shows_whole_hint() {
        let mut app = ready_app(Page::Login);
        app.push_error("Oops");
        let screen = render(&app);
        assert!(screen.contains("Press Enter or Esc to dismiss"));
    }

    #[test]
    fn test_long_path_prompt_keeps_end_visible() {
        let mut app = ready_app(Page::Register);
        app.state.path_prompt =
            Some("/create/property/with/a/really/long/path/segment/xyz".to_string());
        let screen = render(&app);
        assert!(screen.contains("segment/xyz▌"));
    }

    #[test]
    fn test_submitting_form_shows_progress() {
        let mut app = ready_app(Page::Register);
        app.state.form = FormState::new(StepGating::Permissive);
        let valid = [
            (FieldName::Name, "Ada Obi"),
            (FieldName::Email, "ada@example.com"),
            (FieldName::Password, "abc123"),
            (FieldName::ConfirmPassword, "abc123"),
            (FieldName::Location, "Lagos"),
            (FieldName::Address, "12 Marina Road"),
            (FieldName::PhoneNumber, "07012345678"),
            (FieldName::NinNumber, "12345678901"),
        ];
        for (field, value) in valid {
            app.state.form.set_field(field, value);
        }
        app.state.form.next_step();
        app.state.form.next_step();
        assert!(matches!(app.state.form.submit(), SubmitOutcome::Dispatch(_)));

        let screen = render(&app);
        assert!(screen.contains("Submitting…"));
        assert!(!screen.contains("Already have an account?"));
    }

    #[test]
    fn test_last_step_counts_remaining_fields() {
        let mut app = ready_app(Page::Register);
        app.state.form = FormState::new(StepGating::Permissive);
        app.state.form.next_step();
        app.state.form.next_step();
        let screen = render(&app);
        assert!(screen.contains("8 fields left to complete"));
        assert!(screen.contains("Already have an account?"));
    }
}
