//! Placeholders for pages that are not ready yet

use crate::error::LoadError;
use crate::state::LoadingIndicator;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

const BAR_WIDTH: u16 = 30;

/// Draw the sweeping bar shown while a page resolves
pub fn draw_loading(frame: &mut Frame, area: Rect, title: &str, elapsed: Duration) {
    let indicator = LoadingIndicator::at(elapsed);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // short loads render an empty frame rather than flashing the placeholder
    if !indicator.is_visible() {
        return;
    }

    let width = BAR_WIDTH.min(inner.width);
    let head = indicator.head_column(width);
    let bar: String = (0..width)
        .map(|col| if col.abs_diff(head) <= 1 { '█' } else { '░' })
        .collect();

    let lines = vec![
        Line::from(Span::styled("Loading…", Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(bar, Style::default().fg(Color::Cyan))),
    ];
    frame.render_widget(Paragraph::new(lines), centered(inner, width, 3));
}

/// Draw the failure state with the retry hint
pub fn draw_failed(frame: &mut Frame, area: Rect, title: &str, error: &LoadError, attempt: u32) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let attempts = if attempt == 1 {
        "1 attempt".to_string()
    } else {
        format!("{attempt} attempts")
    };
    let lines = vec![
        Line::from(Span::styled(
            "This page could not be loaded",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error.to_string()),
        Line::from(Span::styled(attempts, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("r", key_style),
            Span::raw(" to retry or "),
            Span::styled("Esc", key_style),
            Span::raw(" to go back"),
        ]),
    ];
    let width = 44u16.min(inner.width);
    frame.render_widget(Paragraph::new(lines), centered(inner, width, 6));
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        width,
        ..rows[1]
    }
}
