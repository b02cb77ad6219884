//! Multi-step registration form

use super::field_renderer::{draw_field, draw_help_text, FieldView, FIELD_HEIGHT};
use crate::platform::{PASTE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::routes::PageContent;
use crate::state::{FormAction, FormState};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const ACTION_BUTTON_WIDTH: u16 = 14;

/// Draw the registration page
pub fn draw_register(frame: &mut Frame, area: Rect, content: &PageContent, form: &FormState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", content.title))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let step = form.step();
    let mut constraints = vec![
        Constraint::Length(1), // subtitle
        Constraint::Length(2), // step header
    ];
    constraints.extend(step.fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // actions
    constraints.push(Constraint::Length(1)); // sign-in line / submitting
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // help

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    if let Some(subtitle) = &content.subtitle {
        frame.render_widget(
            Paragraph::new(subtitle.as_str()).style(Style::default().fg(Color::Gray)),
            chunks[0],
        );
    }

    draw_step_header(frame, chunks[1], form);

    for (i, field) in step.fields.iter().enumerate() {
        let view = FieldView {
            is_active: form.active_field_index == i,
            is_disabled: form.is_submitting(),
            error: form.visible_error(*field),
        };
        draw_field(frame, chunks[2 + i], field.binding(), form.values(), view);
    }

    let buttons_idx = 2 + step.fields.len();
    draw_actions(frame, chunks[buttons_idx], form);

    let footer = if form.is_submitting() {
        Some(Line::from(Span::styled(
            "Submitting…",
            Style::default().fg(Color::Yellow),
        )))
    } else if form.is_last_step() {
        let remaining = form.errors().len();
        let mut spans = Vec::with_capacity(3);
        if remaining > 0 {
            let noun = if remaining == 1 { "field" } else { "fields" };
            spans.push(Span::styled(
                format!("{remaining} {noun} left to complete  "),
                Style::default().fg(Color::Yellow),
            ));
        }
        spans.extend([
            Span::styled("Already have an account? ", Style::default().fg(Color::Gray)),
            Span::styled(
                FormAction::SignIn.label(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]);
        Some(Line::from(spans))
    } else {
        None
    };
    if let Some(line) = footer {
        frame.render_widget(Paragraph::new(line), chunks[buttons_idx + 1]);
    }

    let help = format!(
        "Tab:next field  Enter:submit  {SUBMIT_SHORTCUT}:submit  \
         {PASTE_SHORTCUT}:paste  Esc:previous step"
    );
    draw_help_text(frame, chunks[buttons_idx + 3], &help);
}

fn draw_step_header(frame: &mut Frame, area: Rect, form: &FormState) {
    let current = form.current_step();
    let mut progress = Vec::with_capacity(form.step_count() * 2);
    for i in 0..form.step_count() {
        let (glyph, color) = if i < current {
            ("●", Color::Green)
        } else if i == current {
            ("●", Color::Cyan)
        } else {
            ("○", Color::DarkGray)
        };
        progress.push(Span::styled(glyph, Style::default().fg(color)));
        progress.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Step {} of {}: ", current + 1, form.step_count()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                form.step().label,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(progress),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_actions(frame: &mut Frame, area: Rect, form: &FormState) {
    let actions = form.actions();
    let mut constraints: Vec<Constraint> = actions
        .iter()
        .map(|_| Constraint::Length(ACTION_BUTTON_WIDTH))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let row_active = form.is_buttons_row_active();
    for (i, action) in actions.iter().enumerate() {
        let is_enabled = match action {
            FormAction::SignUp => form.can_submit(),
            _ => !form.is_submitting(),
        };
        let is_selected = row_active && form.selected_button == i;
        render_action_button(frame, chunks[i], action.label(), is_selected, is_enabled);
    }
}
