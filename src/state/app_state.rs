//! Application state definitions

use std::collections::BTreeSet;

use super::csv::ImportedUser;
use super::forms::{
    cycle_required, AdminLoginForm, AuthTestForm, Form, OrganizationalUnit, RegistrationForm,
};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Register,
    AdminLogin,
    CsvImport,
    OuManagement,
    AuthTest,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Register => "Register",
            View::AdminLogin => "Admin Login",
            View::CsvImport => "CSV Import",
            View::OuManagement => "OU Management",
            View::AuthTest => "Authentication Test",
        }
    }

    /// Admin tabs sit behind the login gate
    pub fn is_admin_tab(&self) -> bool {
        matches!(self, View::CsvImport | View::OuManagement | View::AuthTest)
    }
}

/// A user row shown in the OU management table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryUser {
    pub username: String,
    pub full_name: String,
    pub ou: OrganizationalUnit,
    pub email: String,
    pub department: String,
}

/// The canned directory rows the OU panel starts with
pub fn sample_users() -> Vec<DirectoryUser> {
    vec![
        DirectoryUser {
            username: "jsmith".to_string(),
            full_name: "John Smith".to_string(),
            ou: OrganizationalUnit::Marketing,
            email: "jsmith@example.com".to_string(),
            department: "Marketing".to_string(),
        },
        DirectoryUser {
            username: "ajones".to_string(),
            full_name: "Alice Jones".to_string(),
            ou: OrganizationalUnit::Marketing,
            email: "ajones@example.com".to_string(),
            department: "Marketing".to_string(),
        },
        DirectoryUser {
            username: "mwilliams".to_string(),
            full_name: "Mike Williams".to_string(),
            ou: OrganizationalUnit::Sales,
            email: "mwilliams@example.com".to_string(),
            department: "Sales".to_string(),
        },
    ]
}

/// Outcome of a credential test, rendered in the result panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTestOutcome {
    pub success: bool,
    pub message: String,
}

/// CSV import panel: target selector, file path input, load and
/// import actions
#[derive(Debug, Clone)]
pub struct CsvImportState {
    pub target_ou: OrganizationalUnit,
    pub file_path: String,
    /// Name of the file the current preview came from
    pub loaded_file: Option<String>,
    pub users: Vec<ImportedUser>,
    pub active_field_index: usize,
}

impl Default for CsvImportState {
    fn default() -> Self {
        CsvImportState {
            target_ou: OrganizationalUnit::ADMIN[0],
            file_path: String::new(),
            loaded_file: None,
            users: Vec::new(),
            active_field_index: 0,
        }
    }
}

impl CsvImportState {
    pub fn input_char(&mut self, c: char) {
        if self.active_field_index == 1 {
            self.file_path.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.active_field_index == 1 {
            self.file_path.pop();
        }
    }

    pub fn cycle_target(&mut self, forward: bool) {
        if self.active_field_index == 0 {
            self.target_ou = cycle_required(&OrganizationalUnit::ADMIN, self.target_ou, forward);
        }
    }

    pub fn is_load_button_active(&self) -> bool {
        self.active_field_index == 2
    }

    pub fn is_import_button_active(&self) -> bool {
        self.active_field_index == 3
    }

    pub fn can_import(&self, loading: bool) -> bool {
        !self.users.is_empty() && !loading
    }

    /// Users as they will be imported: every OU overridden to the
    /// selected target
    pub fn users_for_import(&self) -> Vec<ImportedUser> {
        self.users
            .iter()
            .cloned()
            .map(|mut user| {
                user.ou = self.target_ou.dn().to_string();
                user
            })
            .collect()
    }
}

impl Form for CsvImportState {
    fn field_count(&self) -> usize {
        4 // target ou, file path, load, import
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
}

/// OU management panel: source/target selectors, user table with
/// checkbox selection, move action
#[derive(Debug, Clone)]
pub struct OuPanelState {
    pub source_ou: OrganizationalUnit,
    pub target_ou: OrganizationalUnit,
    pub users: Vec<DirectoryUser>,
    /// Usernames ticked for the next move
    pub selected: BTreeSet<String>,
    /// Highlighted row within the filtered table
    pub cursor: usize,
    pub active_field_index: usize,
}

impl Default for OuPanelState {
    fn default() -> Self {
        OuPanelState {
            source_ou: OrganizationalUnit::ADMIN[0],
            target_ou: OrganizationalUnit::ADMIN[1],
            users: sample_users(),
            selected: BTreeSet::new(),
            cursor: 0,
            active_field_index: 0,
        }
    }
}

impl OuPanelState {
    /// Rows currently shown: users sitting in the source OU
    pub fn filtered_users(&self) -> Vec<&DirectoryUser> {
        self.users
            .iter()
            .filter(|user| user.ou == self.source_ou)
            .collect()
    }

    pub fn cycle_source(&mut self, forward: bool) {
        self.source_ou = cycle_required(&OrganizationalUnit::ADMIN, self.source_ou, forward);
        self.cursor = 0;
    }

    pub fn cycle_target(&mut self, forward: bool) {
        self.target_ou = cycle_required(&OrganizationalUnit::ADMIN, self.target_ou, forward);
    }

    pub fn is_table_active(&self) -> bool {
        self.active_field_index == 2
    }

    pub fn is_move_button_active(&self) -> bool {
        self.active_field_index == 3
    }

    pub fn cursor_down(&mut self) {
        let count = self.filtered_users().len();
        if count > 0 && self.cursor < count - 1 {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// The row under the cursor, if the filtered table has one
    pub fn highlighted_user(&self) -> Option<&DirectoryUser> {
        self.filtered_users().get(self.cursor).copied()
    }

    /// Tick or untick the highlighted row
    pub fn toggle_highlighted(&mut self) {
        let Some(username) = self.highlighted_user().map(|user| user.username.clone()) else {
            return;
        };
        if !self.selected.remove(&username) {
            self.selected.insert(username);
        }
    }

    pub fn can_move(&self, loading: bool) -> bool {
        !self.selected.is_empty() && !loading && self.source_ou != self.target_ou
    }

    /// Apply a completed move locally: the named users land in the
    /// target OU and the selection clears
    pub fn apply_move(&mut self, usernames: &[String], target: OrganizationalUnit) {
        for user in &mut self.users {
            if usernames.contains(&user.username) {
                user.ou = target;
            }
        }
        self.selected.clear();
        self.cursor = 0;
    }

    /// Usernames for the move request, in selection order
    pub fn selected_usernames(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }
}

impl Form for OuPanelState {
    fn field_count(&self) -> usize {
        4 // source ou, target ou, table, move
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub admin_authenticated: bool,

    // Per-view state
    pub registration: RegistrationForm,
    pub login: AdminLoginForm,
    pub csv_import: CsvImportState,
    pub ou_panel: OuPanelState,
    pub auth_test: AuthTestForm,
    pub auth_result: Option<AuthTestOutcome>,
}

impl AppState {
    /// Enter the admin area, landing on the login gate until
    /// authenticated
    pub fn enter_admin(&mut self) {
        if self.admin_authenticated {
            self.current_view = View::CsvImport;
        } else {
            self.current_view = View::AdminLogin;
        }
    }

    /// Switch to an admin tab; ignored while unauthenticated
    pub fn show_admin_tab(&mut self, view: View) {
        if view.is_admin_tab() && self.admin_authenticated {
            self.current_view = view;
        }
    }

    /// Back to the registration form
    pub fn leave_admin(&mut self) {
        self.current_view = View::Register;
    }
}
