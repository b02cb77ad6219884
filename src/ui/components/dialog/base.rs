//! Centered modal box shared by the error dialog and the path prompt

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

/// Border plus one column of padding on each side
const CHROME: u16 = 4;

/// What goes into a modal box
pub struct Modal<'a> {
    pub heading: &'a str,
    /// Used for the heading and the border
    pub accent: Color,
    /// Body text; `\n` starts a new line
    pub body: &'a str,
    /// Key hints on the last row
    pub footer: Vec<Span<'a>>,
    pub width_cap: u16,
}

/// Columns available to body text for a modal capped at `width_cap` inside `area`
pub fn text_capacity(area: Rect, width_cap: u16) -> usize {
    usize::from(width_cap.min(area.width).saturating_sub(CHROME).max(1))
}

/// Draw `modal` centered over whatever is already on screen
pub fn render_modal(frame: &mut Frame, modal: Modal) {
    let area = frame.area();
    let capacity = text_capacity(area, modal.width_cap);
    let body = fit_lines(modal.body, capacity);

    let footer_width: usize = modal.footer.iter().map(Span::width).sum();
    let widest = body
        .iter()
        .map(|line| line.chars().count())
        .chain([modal.heading.chars().count(), footer_width])
        .max()
        .unwrap_or(0);
    let width = (widest.min(capacity) as u16 + CHROME).min(area.width);

    // heading, gap, body, gap, footer, plus the border
    let rows = body.len() as u16 + if modal.footer.is_empty() { 2 } else { 4 };
    let height = (rows + 2).min(area.height);

    let bounds = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let mut text = Vec::with_capacity(body.len() + 4);
    text.push(Line::from(Span::styled(
        modal.heading,
        Style::default()
            .fg(modal.accent)
            .add_modifier(Modifier::BOLD),
    )));
    text.push(Line::default());
    text.extend(body.into_iter().map(Line::from));
    if !modal.footer.is_empty() {
        text.push(Line::default());
        text.push(Line::from(modal.footer));
    }

    let frame_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(modal.accent))
        .padding(Padding::horizontal(1));

    frame.render_widget(Clear, bounds);
    frame.render_widget(
        Paragraph::new(text)
            .block(frame_block)
            .style(Style::default().bg(Color::Black)),
        bounds,
    );
}

/// Break `text` into rows of at most `width` characters.
/// Words longer than a row are split across rows.
fn fit_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut used = 0;

        for word in paragraph.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();
            let gap = usize::from(used > 0);
            if used + gap + chars.len() <= width {
                if gap == 1 {
                    row.push(' ');
                }
                row.extend(chars.iter());
                used += gap + chars.len();
                continue;
            }

            if used > 0 {
                rows.push(std::mem::take(&mut row));
            }
            while chars.len() > width {
                rows.push(chars.drain(..width).collect());
            }
            used = chars.len();
            row = chars.into_iter().collect();
        }

        if used > 0 || paragraph.trim().is_empty() {
            rows.push(row);
        }
    }

    rows
}
