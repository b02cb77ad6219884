//! Go-to-path prompt

use super::base::{render_modal, text_capacity, Modal};
use crate::platform::GOTO_SHORTCUT;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

const WIDTH_CAP: u16 = 50;

/// Render the path prompt with the text typed so far
pub fn render_prompt_dialog(frame: &mut Frame, input: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let capacity = text_capacity(frame.area(), WIDTH_CAP);
    let body = prompt_line(input, capacity);
    let footer = vec![
        Span::styled("Enter", key_style),
        Span::raw(" to open, "),
        Span::styled("Esc", key_style),
        Span::raw(" to cancel"),
    ];

    render_modal(
        frame,
        Modal {
            heading: &format!("Go to path ({GOTO_SHORTCUT})"),
            accent: Color::Cyan,
            body: &body,
            footer,
            width_cap: WIDTH_CAP,
        },
    );
}

/// One row of prompt text; the start of a long path is elided so the cursor stays in view
fn prompt_line(input: &str, capacity: usize) -> String {
    // "> " and the cursor
    let room = capacity.saturating_sub(3);
    let len = input.chars().count();
    if len <= room {
        return format!("> {input}▌");
    }
    let tail: String = input.chars().skip(len - room + 1).collect();
    format!("> …{tail}▌")
}
