//! Registration form rendering
//!
//! The form is far taller than a terminal, so it renders as a window of
//! rows (section headers, fields, the button row) scrolled to keep the
//! active row visible.

use super::field_renderer::{
    draw_checkbox_field, draw_multi_select_field, draw_select_field, draw_text_field,
};
use crate::app::App;
use crate::state::{
    AdPlatform, FieldId, FieldKind, FormSection, RegistrationForm, REGISTRATION_BUTTONS,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One vertical slice of the scrolling form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormRow {
    SectionHeader(FormSection),
    Field(FieldId),
    Buttons,
}

/// Draw the registration view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.registration;

    let block = Block::default()
        .title(" Create Advertising User Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height <= 1 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Backend hint
            Constraint::Min(0),    // Form rows
        ])
        .split(inner);

    let hint = Paragraph::new(Line::from(Span::styled(
        format!(
            "Make sure your Flask server is running at {}",
            app.base_url
        ),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hint, chunks[0]);

    draw_rows(frame, chunks[1], app, form);
}

fn draw_rows(frame: &mut Frame, area: Rect, app: &App, form: &RegistrationForm) {
    let rows = build_rows();
    let active = active_row_index(&rows, form);
    let start = first_visible_row(&rows, form, active, area.height);

    let mut y = area.y;
    for row in &rows[start..] {
        let height = row_height(row, form);
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        if y + height > area.y + area.height {
            // Partial fit only matters when nothing was drawn yet
            if y == area.y {
                draw_row(frame, row_area.intersection(area), app, form, row);
            }
            break;
        }
        draw_row(frame, row_area, app, form, row);
        y += height;
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, form: &RegistrationForm, row: &FormRow) {
    match row {
        FormRow::SectionHeader(section) => draw_section_header(frame, area, *section),
        FormRow::Field(field) => draw_form_field(frame, area, form, *field),
        FormRow::Buttons => draw_buttons(frame, area, app, form),
    }
}

fn draw_section_header(frame: &mut Frame, area: Rect, section: FormSection) {
    let Some(title) = section.title() else {
        return;
    };
    let title_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };
    let line = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(line, title_area);
}

fn draw_form_field(frame: &mut Frame, area: Rect, form: &RegistrationForm, field: FieldId) {
    let is_active = form.active_field_id() == Some(field);
    let error = form.error_for(field);
    let label = field_label(field);

    match field.kind() {
        FieldKind::Text => {
            let raw = form.text_value(field).unwrap_or_default();
            let masked;
            let value = if field.is_secret() {
                masked = "•".repeat(raw.chars().count());
                masked.as_str()
            } else {
                raw
            };
            draw_text_field(
                frame,
                area,
                &label,
                value,
                is_active,
                field.is_editable(),
                is_multiline(field),
                error,
            );
        }
        FieldKind::Select => {
            draw_select_field(
                frame,
                area,
                &label,
                select_label(form, field),
                field.select_prompt(),
                is_active,
                error,
            );
        }
        FieldKind::MultiSelect => {
            let entries: Vec<(&str, bool)> = AdPlatform::ALL
                .iter()
                .map(|platform| {
                    (
                        platform.label(),
                        form.values.preferred_platforms.contains(platform),
                    )
                })
                .collect();
            draw_multi_select_field(
                frame,
                area,
                &label,
                &entries,
                form.platform_cursor,
                is_active,
            );
        }
        FieldKind::Checkbox => {
            draw_checkbox_field(
                frame,
                area,
                field.label(),
                form.values.terms_accepted,
                is_active,
                error,
            );
        }
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App, form: &RegistrationForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let on_buttons = form.is_buttons_row_active();
    let submitting = app.is_submitting();
    let submit_label = if submitting {
        "Creating Account..."
    } else {
        REGISTRATION_BUTTONS[0]
    };

    render_button(
        frame,
        chunks[0],
        submit_label,
        on_buttons && form.selected_button == 0,
        !submitting,
    );
    render_button(
        frame,
        chunks[1],
        REGISTRATION_BUTTONS[1],
        on_buttons && form.selected_button == 1,
        true,
    );
}

fn field_label(field: FieldId) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

fn is_multiline(field: FieldId) -> bool {
    matches!(field, FieldId::Description | FieldId::AdObjectives)
}

fn select_label(form: &RegistrationForm, field: FieldId) -> Option<&'static str> {
    match field {
        FieldId::Ou => form.values.ou.map(|v| v.label()),
        FieldId::Industry => form.values.industry.map(|v| v.label()),
        FieldId::CompanySize => form.values.company_size.map(|v| v.label()),
        FieldId::Budget => form.values.budget.map(|v| v.label()),
        FieldId::PreferredContact => Some(form.values.preferred_contact.label()),
        _ => None,
    }
}

fn build_rows() -> Vec<FormRow> {
    let mut rows = Vec::new();
    let mut last_section = None;
    for field in FieldId::ALL {
        let section = field.section();
        if last_section != Some(section) {
            if section.title().is_some() {
                rows.push(FormRow::SectionHeader(section));
            }
            last_section = Some(section);
        }
        rows.push(FormRow::Field(field));
    }
    rows.push(FormRow::Buttons);
    rows
}

fn row_height(row: &FormRow, form: &RegistrationForm) -> u16 {
    match row {
        FormRow::SectionHeader(_) => 2,
        FormRow::Field(field) => {
            let base = if is_multiline(*field) {
                BUTTON_HEIGHT + 1
            } else {
                BUTTON_HEIGHT
            };
            if form.error_for(*field).is_some() {
                base + 1
            } else {
                base
            }
        }
        FormRow::Buttons => BUTTON_HEIGHT,
    }
}

fn active_row_index(rows: &[FormRow], form: &RegistrationForm) -> usize {
    match form.active_field_id() {
        Some(active) => rows
            .iter()
            .position(|row| matches!(row, FormRow::Field(field) if *field == active))
            .unwrap_or(rows.len() - 1),
        None => rows.len() - 1,
    }
}

/// First row to render so that the active row fits in the viewport
fn first_visible_row(
    rows: &[FormRow],
    form: &RegistrationForm,
    active: usize,
    viewport: u16,
) -> usize {
    let mut start = 0;
    while start < active {
        let used: u16 = rows[start..=active]
            .iter()
            .map(|row| row_height(row, form))
            .sum();
        if used <= viewport {
            break;
        }
        start += 1;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{validate, Form};

    fn row_span_height(rows: &[FormRow], form: &RegistrationForm, range: std::ops::RangeInclusive<usize>) -> u16 {
        rows[range].iter().map(|row| row_height(row, form)).sum()
    }

    #[test]
    fn test_build_rows_starts_with_personal_header() {
        let rows = build_rows();
        assert_eq!(rows[0], FormRow::SectionHeader(FormSection::Personal));
        assert_eq!(rows[1], FormRow::Field(FieldId::FirstName));
    }

    #[test]
    fn test_build_rows_has_five_headers_and_all_fields() {
        let rows = build_rows();
        let headers = rows
            .iter()
            .filter(|row| matches!(row, FormRow::SectionHeader(_)))
            .count();
        let fields = rows
            .iter()
            .filter(|row| matches!(row, FormRow::Field(_)))
            .count();

        assert_eq!(headers, 5);
        assert_eq!(fields, FieldId::ALL.len());
        assert_eq!(rows.last(), Some(&FormRow::Buttons));
    }

    #[test]
    fn test_buttons_row_is_active_row_past_last_field() {
        let rows = build_rows();
        let mut form = RegistrationForm::new();
        form.set_active_field(FieldId::ALL.len());

        assert_eq!(active_row_index(&rows, &form), rows.len() - 1);
    }

    #[test]
    fn test_no_scroll_when_everything_fits() {
        let rows = build_rows();
        let form = RegistrationForm::new();
        let active = active_row_index(&rows, &form);

        assert_eq!(first_visible_row(&rows, &form, active, 500), 0);
    }

    #[test]
    fn test_scroll_keeps_active_row_in_viewport() {
        let rows = build_rows();
        let mut form = RegistrationForm::new();
        form.set_active_field(FieldId::ALL.len()); // buttons row
        let active = active_row_index(&rows, &form);
        let viewport = 20;

        let start = first_visible_row(&rows, &form, active, viewport);

        assert!(start > 0);
        assert!(row_span_height(&rows, &form, start..=active) <= viewport);
    }

    #[test]
    fn test_error_rows_grow_and_shift_scroll() {
        let rows = build_rows();
        let mut form = RegistrationForm::new();
        form.apply_report(validate(&form.values));
        form.set_active_field(FieldId::ALL.len());
        let active = active_row_index(&rows, &form);
        let viewport = 20;

        let plain = first_visible_row(&rows, &RegistrationForm::new(), active, viewport);
        let with_errors = first_visible_row(&rows, &form, active, viewport);

        assert!(with_errors >= plain);
        assert!(row_span_height(&rows, &form, with_errors..=active) <= viewport);
    }
}
