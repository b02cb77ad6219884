//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::GOTO_SHORTCUT;
use crate::routes::ROUTES;
use crate::state::{LoadState, Page};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with one boxed button per route
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(ROUTES.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, route) in ROUTES.iter().enumerate() {
        let key = format!("F{}", idx + 1);
        let label = if route.guarded {
            format!("{} 🔒", route.page.label())
        } else {
            route.page.label().to_string()
        };
        let is_selected = app.state.current_page == route.page;
        render_sidebar_button(frame, chunks[idx + 1], &key, &label, is_selected, true);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_path),
        Style::default().fg(Color::Cyan),
    )];

    let page = app.state.current_page;
    let hints = get_page_hints(page, app.state.pages.get(page));
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current page
fn get_page_hints(page: Page, load: &LoadState) -> String {
    match load {
        LoadState::Failed { .. } => return "r:retry  Esc:back".to_string(),
        LoadState::NotLoaded | LoadState::Loading { .. } => {
            return format!("F1-F3:pages  {GOTO_SHORTCUT}:go to");
        }
        LoadState::Ready(_) => {}
    }
    match page {
        Page::Register => format!("Tab:field  ←/→:button  F1-F3:pages  {GOTO_SHORTCUT}:go to"),
        Page::Login => format!("Enter:register  Esc:back  {GOTO_SHORTCUT}:go to"),
        Page::CreateProperty => format!("Esc:back  {GOTO_SHORTCUT}:go to"),
    }
}
