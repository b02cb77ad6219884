//! Content-only pages (sign in, create property)

use super::forms::draw_help_text;
use crate::routes::PageContent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a page made only of its loaded content
pub fn draw_content_page(frame: &mut Frame, area: Rect, content: &PageContent, hints: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", content.title))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // subtitle
            Constraint::Min(0),    // body
            Constraint::Length(1), // help
        ])
        .split(inner);

    if let Some(subtitle) = &content.subtitle {
        frame.render_widget(
            Paragraph::new(subtitle.as_str()).style(Style::default().fg(Color::Gray)),
            chunks[0],
        );
    }

    let body: Vec<Line> = content.help.iter().map(|l| Line::from(l.as_str())).collect();
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), chunks[1]);

    draw_help_text(frame, chunks[2], hints);
}
