//! Field rendering utilities for forms

use crate::state::{FieldBinding, FormValues};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the error line under it
pub const FIELD_HEIGHT: u16 = 4;

/// How a field should look this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldView<'a> {
    pub is_active: bool,
    pub is_disabled: bool,
    pub error: Option<&'a str>,
}

/// Draw a bound form field with its inline error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    binding: &FieldBinding,
    values: &FormValues,
    view: FieldView,
) {
    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };

    let border_style = if view.error.is_some() {
        Style::default().fg(Color::Red)
    } else if view.is_active && !view.is_disabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if view.is_disabled {
        Style::default().fg(Color::DarkGray)
    } else if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let display_value = binding.display_value(values);
    let show_cursor = view.is_active && !view.is_disabled;
    let mut spans = if display_value.is_empty() {
        vec![Span::styled(
            binding.placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        vec![Span::styled(display_value, value_style)]
    };
    if show_cursor {
        // cursor sits before the placeholder, after typed text
        let at = if (binding.get)(values).is_empty() { 0 } else { spans.len() };
        spans.insert(at, Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {} ", binding.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);

    if let Some(message) = view.error {
        if area.height > input_area.height {
            let error_area = Rect {
                x: area.x + 1,
                y: input_area.y + input_area.height,
                width: area.width.saturating_sub(1),
                height: 1,
            };
            let line = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)));
            frame.render_widget(line, error_area);
        }
    }
}

/// Draw a help text line
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
