//! Field rendering utilities for forms
//!
//! Each field draws a bordered box three rows high (four for multiline
//! fields). When a validation error is present the caller allocates one
//! extra row and the message renders in red beneath the box.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::super::components::BUTTON_HEIGHT;

/// Draw a single-value text field
#[allow(clippy::too_many_arguments)]
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    show_cursor: bool,
    is_multiline: bool,
    error: Option<&str>,
) {
    let (field_area, error_area) = split_error_area(area, is_multiline);

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active && show_cursor { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = field_block(label, is_active, error.is_some());
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), field_area);
    draw_error_line(frame, error_area, error);
}

/// Draw a cycling single-choice field
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    selection: Option<&str>,
    prompt: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let (field_area, error_area) = split_error_area(area, false);

    let line = match selection {
        Some(choice) => {
            let style = if is_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            if is_active {
                Line::from(vec![
                    Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(choice.to_string(), style),
                    Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
                ])
            } else {
                Line::from(Span::styled(choice.to_string(), style))
            }
        }
        None => Line::from(Span::styled(
            prompt.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    };

    let block = field_block(label, is_active, error.is_some());
    frame.render_widget(Paragraph::new(line).block(block), field_area);
    draw_error_line(frame, error_area, error);
}

/// Draw a multi-choice field as a row of toggles
pub fn draw_multi_select_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    entries: &[(&str, bool)],
    cursor: usize,
    is_active: bool,
) {
    let mut spans = Vec::new();
    for (idx, (name, chosen)) in entries.iter().enumerate() {
        let mark = if *chosen { "[x]" } else { "[ ]" };
        let mut style = if *chosen {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        if is_active && idx == cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("{mark} {name}"), style));
        spans.push(Span::raw("  "));
    }

    let block = field_block(label, is_active, false);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a checkbox field; the label doubles as the agreement text
pub fn draw_checkbox_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    is_active: bool,
    error: Option<&str>,
) {
    let (field_area, error_area) = split_error_area(area, false);

    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let line = Line::from(vec![
        Span::styled(mark, style),
        Span::raw(" "),
        Span::styled(label.to_string(), style),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));
    frame.render_widget(Paragraph::new(line).block(block), field_area);
    draw_error_line(frame, error_area, error);
}

fn field_block(label: &str, is_active: bool, has_error: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error))
}

fn border_style(is_active: bool, has_error: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Reserve the trailing row of `area` for the error message when present
fn split_error_area(area: Rect, is_multiline: bool) -> (Rect, Option<Rect>) {
    let base_height = if is_multiline {
        BUTTON_HEIGHT + 1
    } else {
        BUTTON_HEIGHT
    };
    if area.height <= base_height {
        return (area, None);
    }
    let field_area = Rect {
        height: base_height,
        ..area
    };
    let error_area = Rect {
        y: area.y + base_height,
        height: 1,
        ..area
    };
    (field_area, Some(error_area))
}

fn draw_error_line(frame: &mut Frame, error_area: Option<Rect>, error: Option<&str>) {
    if let (Some(area), Some(message)) = (error_area, error) {
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" ✗ {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, area);
    }
}
