//! UI module for rendering the TUI

mod admin_login;
mod components;
mod csv_import;
mod forms;
mod layout;
mod ou_management;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, content_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Register => forms::draw_registration(frame, content_area, app),
        View::AdminLogin => admin_login::draw(frame, content_area, app),
        View::CsvImport => csv_import::draw(frame, content_area, app),
        View::OuManagement => ou_management::draw(frame, content_area, app),
        View::AuthTest => auth_test::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Toasts overlay whatever view is active
    if let Some(toast) = &app.toast {
        components::render_toast(frame, toast);
    }
}
