//! Layout components (header, admin tab bar, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Admin tabs in display order with their function-key shortcuts
const ADMIN_TABS: [(View, &str, &str); 3] = [
    (View::CsvImport, "F1", "CSV Import"),
    (View::OuManagement, "F2", "OU Management"),
    (View::AuthTest, "F3", "Authentication Test"),
];

/// Split the screen into header and content, reserving the status line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the app name, page title, and (in the admin area) the tab bar
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.state.current_view;

    let page_title = if view.is_admin_tab() {
        "AD User Administration"
    } else {
        view.title()
    };
    let title_line = Line::from(vec![
        Span::styled(
            " AdUserRegistry",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(page_title, Style::default().add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(title_line), Rect { height: 1, ..area });

    if area.height < 2 {
        return;
    }
    let second_row = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };

    if view.is_admin_tab() && app.state.admin_authenticated {
        frame.render_widget(Paragraph::new(tab_line(view)), second_row);
    } else if view == View::Register {
        let description = Paragraph::new(Line::from(Span::styled(
            " Complete the form below to register for a new advertising account.",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(description, second_row);
    }
}

fn tab_line(current: View) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (idx, (view, key, label)) in ADMIN_TABS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("{key} "),
            Style::default().fg(Color::DarkGray),
        ));
        let style = if *view == current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(*label, style));
    }
    Line::from(spans)
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.base_url),
        Style::default().fg(Color::Blue),
    )];

    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Center a fixed-size rectangle within `area`, clamping to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Register => format!(
            "Tab:next  Space:toggle  ←/→:cycle  {}:submit  {}:admin",
            crate::platform::SUBMIT_SHORTCUT,
            crate::platform::ADMIN_SHORTCUT,
        ),
        View::AdminLogin => "Tab:next  Enter:login  Esc:back".to_string(),
        View::CsvImport => "Tab:next  ←/→:target OU  Enter:run  F1-F3:tabs  Esc:back".to_string(),
        View::OuManagement => {
            "j/k:rows  Space:select  y:copy  Enter:move  F1-F3:tabs  Esc:back".to_string()
        }
        View::AuthTest => "Tab:next  Enter:test  F1-F3:tabs  Esc:back".to_string(),
    }
}
