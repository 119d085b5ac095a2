//! OU management panel (admin)

use crate::app::App;
use crate::state::{DirectoryUser, OuPanelState};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::forms::draw_select_field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the OU management tab
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let panel = &app.state.ou_panel;

    let block = Block::default()
        .title(" Manage Organizational Units ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Description
            Constraint::Length(BUTTON_HEIGHT), // Source / target selects
            Constraint::Min(4),                // User table
            Constraint::Length(BUTTON_HEIGHT), // Selection count + move button
        ])
        .split(inner);

    let description = Paragraph::new(Line::from(Span::styled(
        "Select users from a source OU and move them to a target OU.",
        Style::default().fg(Color::DarkGray),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(description, chunks[0]);

    draw_selectors(frame, chunks[1], panel);
    draw_user_table(frame, chunks[2], panel);
    draw_footer(frame, chunks[3], app, panel);
}

fn draw_selectors(frame: &mut Frame, area: Rect, panel: &OuPanelState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_select_field(
        frame,
        chunks[0],
        "Source OU",
        Some(panel.source_ou.dn()),
        "Select source OU",
        panel.active_field_index == 0,
        None,
    );
    draw_select_field(
        frame,
        chunks[1],
        "Target OU",
        Some(panel.target_ou.dn()),
        "Select target OU",
        panel.active_field_index == 1,
        None,
    );
}

fn draw_user_table(frame: &mut Frame, area: Rect, panel: &OuPanelState) {
    let is_active = panel.is_table_active();
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" Users in {} ", panel.source_ou.dn()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let filtered = panel.filtered_users();
    if filtered.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No users found in this OU",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let mut items = vec![ListItem::new(Line::from(Span::styled(
        format!(
            "    {:<14} {:<22} {:<26} {}",
            "Username", "Full Name", "Email", "Department"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )))];

    for (idx, user) in filtered.iter().enumerate() {
        let mut style = Style::default();
        if is_active && idx == panel.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        items.push(ListItem::new(Line::from(Span::styled(
            table_row(user, panel.selected.contains(&user.username)),
            style,
        ))));
    }

    frame.render_widget(List::new(items).block(block), area);
}

fn table_row(user: &DirectoryUser, selected: bool) -> String {
    let mark = if selected { "[x]" } else { "[ ]" };
    format!(
        "{mark} {:<14} {:<22} {:<26} {}",
        user.username, user.full_name, user.email, user.department
    )
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, panel: &OuPanelState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(area);

    let count_area = Rect {
        y: area.y + 1,
        height: 1,
        ..chunks[0]
    };
    let count = Paragraph::new(Line::from(Span::raw(format!(
        "{} user(s) selected",
        panel.selected.len()
    ))));
    frame.render_widget(count, count_area);

    let moving = app.is_moving();
    let label = if moving {
        "Moving...".to_string()
    } else {
        format!("Move to {}", panel.target_ou.short_name())
    };
    render_button(
        frame,
        chunks[1],
        &label,
        panel.is_move_button_active(),
        panel.can_move(moving),
    );
}
