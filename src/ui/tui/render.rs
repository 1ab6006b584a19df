use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::view::{Focus, FormView};
use crate::core::Application;
use crate::core::application::APP_TITLE;
use crate::form::{FieldGroup, LabeledField};
use crate::models::ControlKind;

const HELP: &str =
    "[Tab] Next  [Shift+Tab] Prev  [↑/↓] Spin/Choose  [Space] Toggle  [Ctrl+S] Save  [Esc] Quit";

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    }
}

pub fn draw(frame: &mut Frame, app: &Application, view: &FormView) {
    let form = app.form();

    let mut constraints = vec![Constraint::Length(1)];
    for group in form.groups() {
        constraints.push(match group.title {
            Some(_) => Constraint::Length(4),
            None => Constraint::Min(5),
        });
    }
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ]);
    let chunks = Layout::vertical(constraints).split(frame.area());

    let title = Paragraph::new(APP_TITLE)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    for (gi, group) in form.groups().iter().enumerate() {
        draw_group(frame, chunks[gi + 1], app, group, view);
    }

    let n = chunks.len();
    let save_focused = view.focus() == Focus::Save;
    let save_style = if save_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    frame.render_widget(
        Paragraph::new(Span::styled("[ Save ]", save_style)).alignment(Alignment::Right),
        chunks[n - 3],
    );
    frame.render_widget(
        Paragraph::new(app.status()).style(Style::default().fg(Color::Cyan)),
        chunks[n - 2],
    );
    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        chunks[n - 1],
    );
}

fn draw_group(frame: &mut Frame, area: Rect, app: &Application, group: &FieldGroup, view: &FormView) {
    let form = app.form();

    let Some(title) = &group.title else {
        // Ungrouped fields stack vertically, each in its own box.
        let rows = Layout::vertical(vec![
            Constraint::Ratio(1, group.fields.len().max(1) as u32);
            group.fields.len()
        ])
        .split(area);
        for (slot, index) in group.fields.iter().enumerate() {
            if let Some(field) = form.field_at(*index) {
                draw_boxed(frame, rows[slot], field, view.focus() == Focus::Field(*index));
            }
        }
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::horizontal(vec![
        Constraint::Ratio(1, group.fields.len().max(1) as u32);
        group.fields.len()
    ])
    .split(inner);

    for (slot, index) in group.fields.iter().enumerate() {
        if let Some(field) = form.field_at(*index) {
            draw_cell(frame, cols[slot], field, view.focus() == Focus::Field(*index));
        }
    }
}

/// Label above value, no border.
fn draw_cell(frame: &mut Frame, area: Rect, field: &LabeledField, focused: bool) {
    let mut label_style = focus_style(focused);
    if focused {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    let text = Text::from(vec![
        Line::from(Span::styled(field.label().to_string(), label_style)),
        Line::from(Span::styled(value_text(field, focused), focus_style(focused))),
    ]);
    frame.render_widget(Paragraph::new(text), area);
}

/// Multi-line controls get a titled box.
fn draw_boxed(frame: &mut Frame, area: Rect, field: &LabeledField, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", field.label()))
        .border_style(focus_style(focused));
    let body = Paragraph::new(value_text(field, focused))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}

fn value_text(field: &LabeledField, focused: bool) -> String {
    let cursor = if focused && field.kind().accepts_typing() {
        "_"
    } else {
        ""
    };
    let shown = field.display_text();

    match field.kind() {
        ControlKind::Toggle => {
            if field.is_checked() {
                "[x]".to_string()
            } else {
                "[ ]".to_string()
            }
        }
        ControlKind::ChoiceList => {
            if shown.is_empty() {
                "-- ▾".to_string()
            } else {
                format!("{shown} ▾")
            }
        }
        ControlKind::Spinner => format!("{shown}{cursor} ↕"),
        ControlKind::Entry | ControlKind::MultiLine => format!("{shown}{cursor}"),
    }
}
