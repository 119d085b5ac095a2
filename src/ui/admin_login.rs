//! Admin login screen

use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::forms::draw_text_field;
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the centered login card gating the admin tabs
pub fn draw(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let form = &app.state.login;

    let username_height = BUTTON_HEIGHT + u16::from(form.username_error.is_some());
    let password_height = BUTTON_HEIGHT + u16::from(form.password_error.is_some());
    let card_height = 2 + 2 + username_height + password_height + BUTTON_HEIGHT;
    let card = centered_rect(area, 52, card_height);

    let block = Block::default()
        .title(" Admin Authentication ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),               // Description
            Constraint::Length(username_height), // Username
            Constraint::Length(password_height), // Password
            Constraint::Length(BUTTON_HEIGHT),   // Login button
            Constraint::Min(0),
        ])
        .split(inner);

    let description = Paragraph::new(Line::from(Span::styled(
        "Please authenticate to access admin features.",
        Style::default().fg(Color::DarkGray),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(description, chunks[0]);

    draw_text_field(
        frame,
        chunks[1],
        "Username",
        &form.username,
        form.active_field_index == 0,
        true,
        false,
        form.username_error,
    );

    let masked = "•".repeat(form.password.chars().count());
    draw_text_field(
        frame,
        chunks[2],
        "Password",
        &masked,
        form.active_field_index == 1,
        true,
        false,
        form.password_error,
    );

    render_button(
        frame,
        chunks[3],
        "Login",
        form.is_button_active(),
        !app.is_logging_in(),
    );
}
