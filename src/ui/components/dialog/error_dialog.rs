//! Error dialog component

use super::base::{render_modal, Modal};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render an error dialog overlay centered on the screen.
/// `queued` counts errors still waiting behind this one.
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, queued: usize) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut footer = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];
    if queued > 0 {
        footer.push(Span::styled(
            format!("  ({queued} more)"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    render_modal(
        frame,
        Modal {
            heading: "Error",
            accent: Color::Red,
            body: error_message,
            footer,
            width_cap: 60,
        },
    );
}
