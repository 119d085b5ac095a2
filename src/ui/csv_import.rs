//! CSV import panel (admin)

use crate::app::App;
use crate::state::{CsvImportState, ImportedUser};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::forms::{draw_select_field, draw_text_field};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Rows of the preview table shown before the full count trails off
const PREVIEW_ROWS: usize = 5;

/// Draw the CSV import tab
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let panel = &app.state.csv_import;

    let block = Block::default()
        .title(" Import Users from CSV ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Description
            Constraint::Length(BUTTON_HEIGHT), // Target OU
            Constraint::Length(BUTTON_HEIGHT), // File path
            Constraint::Length(1),             // File format hint
            Constraint::Length(BUTTON_HEIGHT), // Load / import buttons
            Constraint::Min(0),                // Preview
        ])
        .split(inner);

    let description = Paragraph::new(Line::from(Span::styled(
        "Upload a CSV file containing user information to bulk create AD users.",
        Style::default().fg(Color::DarkGray),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(description, chunks[0]);

    draw_select_field(
        frame,
        chunks[1],
        "Target Organizational Unit",
        Some(panel.target_ou.dn()),
        "Select an OU",
        panel.active_field_index == 0,
        None,
    );

    draw_text_field(
        frame,
        chunks[2],
        "CSV File",
        &panel.file_path,
        panel.active_field_index == 1,
        true,
        false,
        None,
    );

    let hint = Paragraph::new(Line::from(Span::styled(
        "File should be a CSV with headers matching required AD attributes",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hint, chunks[3]);

    draw_buttons(frame, chunks[4], app, panel);
    draw_preview(frame, chunks[5], panel);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App, panel: &CsvImportState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_button(
        frame,
        chunks[0],
        "Load File",
        panel.is_load_button_active(),
        !panel.file_path.trim().is_empty(),
    );

    let importing = app.is_importing();
    let import_label = if importing {
        "Importing...".to_string()
    } else if panel.users.is_empty() {
        "Import Users".to_string()
    } else {
        format!("Import {} Users", panel.users.len())
    };
    render_button(
        frame,
        chunks[1],
        &import_label,
        panel.is_import_button_active(),
        panel.can_import(importing),
    );
}

fn draw_preview(frame: &mut Frame, area: Rect, panel: &CsvImportState) {
    if area.height < 3 {
        return;
    }

    if panel.users.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No users loaded",
            Style::default().fg(Color::DarkGray),
        )))
        .block(Block::default().borders(Borders::ALL).border_style(
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(placeholder, area);
        return;
    }

    let mut items = vec![ListItem::new(Line::from(Span::styled(
        format!(
            "{:<14} {:<22} {:<26} {:<14} {}",
            "Username", "Full Name", "Email", "Department", "Job Title"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )))];

    for user in panel.users.iter().take(PREVIEW_ROWS) {
        items.push(ListItem::new(Line::from(preview_row(user))));
    }
    if panel.users.len() > PREVIEW_ROWS {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("... and {} more users", panel.users.len() - PREVIEW_ROWS),
            Style::default().fg(Color::DarkGray),
        ))));
    }

    let title = match &panel.loaded_file {
        Some(name) => format!(" Preview ({} users from {name}) ", panel.users.len()),
        None => format!(" Preview ({} users) ", panel.users.len()),
    };
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

fn preview_row(user: &ImportedUser) -> String {
    format!(
        "{:<14} {:<22} {:<26} {:<14} {}",
        user.username, user.full_name, user.email, user.department, user.job_title
    )
}
