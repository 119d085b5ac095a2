//! Toast notification overlay

use crate::state::{Toast, ToastKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum toast width including borders
const TOAST_MAX_WIDTH: u16 = 44;

/// Render a toast anchored to the top-right corner
pub fn render_toast(frame: &mut Frame, toast: &Toast) {
    let area = frame.area();
    let width = TOAST_MAX_WIDTH.min(area.width.saturating_sub(2));
    if width < 8 || area.height < 4 {
        return;
    }

    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = (width - padding) as usize;
    let wrapped_lines = wrap_text(&toast.description, max_line_width);
    let height = (wrapped_lines.len() as u16 + 3).min(area.height.saturating_sub(2));

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height,
    };

    let accent = match toast.kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    };

    let mut content = vec![Line::from(Span::styled(
        toast.title.clone(),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ))];
    for line in wrapped_lines {
        content.push(Line::from(line));
    }

    frame.render_widget(Clear, toast_area);
    let widget = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));
    frame.render_widget(widget, toast_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.len() + word.len() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
