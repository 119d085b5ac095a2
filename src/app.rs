//! Application state and core logic

use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::backend::{
    BackendClientTrait, CreateUserRequest, CreateUserResponse, CsvUserPayload, TestAuthResponse,
    AUTH_TEST_FAILURE_MESSAGE, IMPORT_FAILURE_MESSAGE, LOGIN_FAILURE_MESSAGE,
    MOVE_FAILURE_MESSAGE, SUBMIT_FAILURE_MESSAGE,
};
use crate::state::{
    parse_users_csv, validate, AppState, AuthTestForm, AuthTestOutcome, CsvImportState, Form,
    OrganizationalUnit, Toast, View,
};

/// Simulated latency for admin actions while not talking to a live backend
const MOCK_IMPORT_DELAY: Duration = Duration::from_millis(1500);
const MOCK_MOVE_DELAY: Duration = Duration::from_millis(1000);
const MOCK_AUTH_TEST_DELAY: Duration = Duration::from_millis(1500);

/// Receiver for a request running on a background task. `Some` while the
/// request is in flight, which also blocks a second submission.
type Pending<T> = Option<Receiver<Result<T>>>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the registration backend
    backend: Arc<dyn BackendClientTrait>,
    /// Base URL shown in the status bar and backend hint
    pub base_url: String,
    /// Whether admin actions call the backend instead of simulating
    admin_live: bool,
    /// Active notification, if any
    pub toast: Option<Toast>,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
    pending_submission: Pending<CreateUserResponse>,
    pending_login: Pending<()>,
    pending_import: Pending<(usize, OrganizationalUnit)>,
    pending_move: Pending<(Vec<String>, OrganizationalUnit)>,
    pending_auth_test: Pending<TestAuthResponse>,
}

impl App {
    /// Create a new App instance
    #[allow(clippy::field_reassign_with_default)]
    pub fn new(
        backend: Arc<dyn BackendClientTrait>,
        base_url: String,
        default_domain: &str,
        admin_live: bool,
    ) -> Self {
        let mut state = AppState::default();
        state.auth_test = AuthTestForm::new(default_domain);

        Self {
            state,
            backend,
            base_url,
            admin_live,
            toast: None,
            copy_message: None,
            quit: false,
            pending_submission: None,
            pending_login: None,
            pending_import: None,
            pending_move: None,
            pending_auth_test: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_submission.is_some()
    }

    pub fn is_logging_in(&self) -> bool {
        self.pending_login.is_some()
    }

    pub fn is_importing(&self) -> bool {
        self.pending_import.is_some()
    }

    pub fn is_moving(&self) -> bool {
        self.pending_move.is_some()
    }

    pub fn is_testing_auth(&self) -> bool {
        self.pending_auth_test.is_some()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // Clear any status messages on key press
        self.copy_message = None;

        // Admin navigation works from every admin view
        match key.code {
            KeyCode::F(1) if self.state.current_view.is_admin_tab() => {
                self.state.show_admin_tab(View::CsvImport);
                return;
            }
            KeyCode::F(2) if self.state.current_view.is_admin_tab() => {
                self.state.show_admin_tab(View::OuManagement);
                return;
            }
            KeyCode::F(3) if self.state.current_view.is_admin_tab() => {
                self.state.show_admin_tab(View::AuthTest);
                return;
            }
            KeyCode::Esc if self.state.current_view != View::Register => {
                self.state.leave_admin();
                return;
            }
            _ => {}
        }

        match self.state.current_view {
            View::Register => self.handle_register_key(key),
            View::AdminLogin => self.handle_login_key(key),
            View::CsvImport => self.handle_csv_import_key(key),
            View::OuManagement => self.handle_ou_key(key),
            View::AuthTest => self.handle_auth_test_key(key),
        }
    }

    /// Poll in-flight requests and expire the toast. Runs every tick.
    pub fn on_tick(&mut self) {
        self.poll_submission();
        self.poll_login();
        self.poll_import();
        self.poll_move();
        self.poll_auth_test();

        if self.toast.as_ref().is_some_and(|toast| toast.is_expired()) {
            self.toast = None;
        }
    }

    // ---- Registration ----

    fn handle_register_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('a') && key.modifiers.contains(crate::platform::ADMIN_MODIFIER)
        {
            self.state.enter_admin();
            return;
        }
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit_registration();
            return;
        }

        let on_buttons = self.state.registration.is_buttons_row_active();
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.registration.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.registration.prev_field(),
            KeyCode::Left if on_buttons => self.state.registration.prev_button(),
            KeyCode::Right if on_buttons => self.state.registration.next_button(),
            KeyCode::Left => self.state.registration.handle_left(),
            KeyCode::Right => self.state.registration.handle_right(),
            KeyCode::Enter if on_buttons => {
                if self.state.registration.selected_button == 0 {
                    self.submit_registration();
                } else {
                    self.state.registration.clear();
                }
            }
            KeyCode::Enter => self.state.registration.next_field(),
            KeyCode::Char(' ') => self.state.registration.handle_space(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.registration.input_char(c);
            }
            KeyCode::Backspace => self.state.registration.backspace(),
            _ => {}
        }
    }

    /// Validate and, if clean, send the registration to the backend
    fn submit_registration(&mut self) {
        if self.pending_submission.is_some() {
            return;
        }

        let report = validate(&self.state.registration.values);
        let valid = report.is_valid();
        self.state.registration.apply_report(report);
        if !valid {
            return;
        }

        let request = CreateUserRequest::from(&self.state.registration.values);
        tracing::info!("Submitting registration for {}", request.username);

        let backend = Arc::clone(&self.backend);
        let (tx, rx) = std::sync::mpsc::sync_channel(1);
        tokio::spawn(async move {
            let result = backend.create_ad_user(request).await;
            let _ = tx.send(result);
        });
        self.pending_submission = Some(rx);
    }

    fn poll_submission(&mut self) {
        let Some(outcome) = take_finished(&mut self.pending_submission, SUBMIT_FAILURE_MESSAGE)
        else {
            return;
        };
        match outcome {
            Ok(response) => {
                if let Some(user_id) = &response.user_id {
                    tracing::info!("Backend created user {user_id}");
                }
                self.state.registration.clear();
                self.toast = Some(Toast::success(
                    "Success!",
                    "Your ad user account has been created successfully.",
                ));
            }
            Err(error) => {
                tracing::error!("Registration failed: {error:#}");
                self.toast = Some(Toast::error("Error", error.to_string()));
            }
        }
    }

    // ---- Admin login ----

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.login.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.login.prev_field(),
            KeyCode::Enter if self.state.login.is_button_active() => self.submit_login(),
            KeyCode::Enter => self.state.login.next_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.login.input_char(c);
            }
            KeyCode::Backspace => self.state.login.backspace(),
            _ => {}
        }
    }

    fn submit_login(&mut self) {
        if self.pending_login.is_some() {
            return;
        }
        if !self.state.login.check_required() {
            return;
        }

        let username = self.state.login.username.clone();
        let password = self.state.login.password.clone();

        if self.admin_live {
            let backend = Arc::clone(&self.backend);
            let (tx, rx) = std::sync::mpsc::sync_channel(1);
            tokio::spawn(async move {
                let result = backend.admin_login(&username, &password).await;
                let _ = tx.send(result);
            });
            self.pending_login = Some(rx);
        } else {
            // Demo credentials, checked locally
            let result = if username == "admin" && password == "password" {
                Ok(())
            } else {
                Err(anyhow!("Invalid credentials"))
            };
            self.finish_login(result);
        }
    }

    fn poll_login(&mut self) {
        if let Some(outcome) = take_finished(&mut self.pending_login, LOGIN_FAILURE_MESSAGE) {
            self.finish_login(outcome);
        }
    }

    fn finish_login(&mut self, result: Result<()>) {
        match result {
            Ok(()) => {
                tracing::info!("Admin authenticated");
                self.state.admin_authenticated = true;
                self.state.login.clear();
                self.state.enter_admin();
                self.toast = Some(Toast::success(
                    "Authentication Successful",
                    "Welcome to the admin dashboard",
                ));
            }
            Err(error) => {
                tracing::warn!("Admin login failed: {error:#}");
                self.toast = Some(Toast::error("Authentication Failed", error.to_string()));
            }
        }
    }

    // ---- CSV import ----

    fn handle_csv_import_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.csv_import.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.csv_import.prev_field(),
            KeyCode::Left => self.state.csv_import.cycle_target(false),
            KeyCode::Right => self.state.csv_import.cycle_target(true),
            KeyCode::Enter if self.state.csv_import.is_load_button_active() => {
                self.load_csv_file();
            }
            KeyCode::Enter if self.state.csv_import.is_import_button_active() => {
                self.submit_import();
            }
            KeyCode::Enter => self.state.csv_import.next_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.csv_import.input_char(c);
            }
            KeyCode::Backspace => self.state.csv_import.backspace(),
            _ => {}
        }
    }

    /// Read and parse the CSV file named in the path field
    fn load_csv_file(&mut self) {
        let path = self.state.csv_import.file_path.trim().to_string();
        if path.is_empty() {
            self.toast = Some(Toast::error(
                "Load Failed",
                "Enter the path of a CSV file first",
            ));
            return;
        }

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                let users = parse_users_csv(&text, self.state.csv_import.target_ou.dn());
                let count = users.len();
                tracing::debug!("Parsed {count} users from {path}");
                self.state.csv_import.users = users;
                self.state.csv_import.loaded_file = Some(file_name(&path));
                self.copy_message = Some(format!("Loaded {count} users from {path}"));
            }
            Err(error) => {
                tracing::warn!("Could not read {path}: {error}");
                self.toast = Some(Toast::error(
                    "Load Failed",
                    format!("Could not read {path}: {error}"),
                ));
            }
        }
    }

    fn submit_import(&mut self) {
        if self.pending_import.is_some() {
            return;
        }
        if !self.state.csv_import.can_import(false) {
            return;
        }

        let users = self.state.csv_import.users_for_import();
        let count = users.len();
        let target = self.state.csv_import.target_ou;
        tracing::info!("Importing {count} users into {}", target.dn());

        let (tx, rx) = std::sync::mpsc::sync_channel(1);
        if self.admin_live {
            let backend = Arc::clone(&self.backend);
            let payload: Vec<CsvUserPayload> = users.iter().map(CsvUserPayload::from).collect();
            tokio::spawn(async move {
                let result = backend.import_users(payload).await.map(|()| (count, target));
                let _ = tx.send(result);
            });
        } else {
            tokio::spawn(async move {
                tokio::time::sleep(MOCK_IMPORT_DELAY).await;
                let _ = tx.send(Ok((count, target)));
            });
        }
        self.pending_import = Some(rx);
    }

    fn poll_import(&mut self) {
        let Some(outcome) = take_finished(&mut self.pending_import, IMPORT_FAILURE_MESSAGE)
        else {
            return;
        };
        match outcome {
            Ok((count, target)) => {
                // Keep the chosen target for the next batch
                self.state.csv_import = CsvImportState {
                    target_ou: self.state.csv_import.target_ou,
                    ..Default::default()
                };
                self.toast = Some(Toast::success(
                    "Users Imported Successfully",
                    format!("{count} users were imported to {}", target.dn()),
                ));
            }
            Err(error) => {
                tracing::error!("Import failed: {error:#}");
                self.toast = Some(Toast::error("Import Failed", error.to_string()));
            }
        }
    }

    // ---- OU management ----

    fn handle_ou_key(&mut self, key: KeyEvent) {
        let on_table = self.state.ou_panel.is_table_active();
        match key.code {
            KeyCode::Tab => self.state.ou_panel.next_field(),
            KeyCode::BackTab => self.state.ou_panel.prev_field(),
            KeyCode::Down | KeyCode::Char('j') if on_table => self.state.ou_panel.cursor_down(),
            KeyCode::Up | KeyCode::Char('k') if on_table => self.state.ou_panel.cursor_up(),
            KeyCode::Down => self.state.ou_panel.next_field(),
            KeyCode::Up => self.state.ou_panel.prev_field(),
            KeyCode::Left => self.cycle_ou_selector(false),
            KeyCode::Right => self.cycle_ou_selector(true),
            KeyCode::Char(' ') if on_table => self.state.ou_panel.toggle_highlighted(),
            KeyCode::Char('y') if on_table => self.copy_highlighted_username(),
            KeyCode::Enter if self.state.ou_panel.is_move_button_active() => self.submit_move(),
            KeyCode::Enter if on_table => self.state.ou_panel.toggle_highlighted(),
            KeyCode::Enter => self.state.ou_panel.next_field(),
            _ => {}
        }
    }

    fn cycle_ou_selector(&mut self, forward: bool) {
        match self.state.ou_panel.active_field() {
            0 => self.state.ou_panel.cycle_source(forward),
            1 => self.state.ou_panel.cycle_target(forward),
            _ => {}
        }
    }

    fn copy_highlighted_username(&mut self) {
        let Some(username) = self
            .state
            .ou_panel
            .highlighted_user()
            .map(|user| user.username.clone())
        else {
            return;
        };
        match self.copy_to_clipboard(&username) {
            Ok(()) => self.copy_message = Some(format!("Copied {username}")),
            Err(error) => tracing::warn!("Clipboard unavailable: {error:#}"),
        }
    }

    fn submit_move(&mut self) {
        if self.pending_move.is_some() {
            return;
        }
        if self.state.ou_panel.selected.is_empty() {
            self.toast = Some(Toast::error(
                "No Users Selected",
                "Please select at least one user to move",
            ));
            return;
        }
        if !self.state.ou_panel.can_move(false) {
            return;
        }

        let usernames = self.state.ou_panel.selected_usernames();
        let target = self.state.ou_panel.target_ou;
        tracing::info!("Moving {} users to {}", usernames.len(), target.dn());

        let (tx, rx) = std::sync::mpsc::sync_channel(1);
        if self.admin_live {
            let backend = Arc::clone(&self.backend);
            tokio::spawn(async move {
                let result = backend
                    .move_users(usernames.clone(), target.dn())
                    .await
                    .map(|()| (usernames, target));
                let _ = tx.send(result);
            });
        } else {
            tokio::spawn(async move {
                tokio::time::sleep(MOCK_MOVE_DELAY).await;
                let _ = tx.send(Ok((usernames, target)));
            });
        }
        self.pending_move = Some(rx);
    }

    fn poll_move(&mut self) {
        let Some(outcome) = take_finished(&mut self.pending_move, MOVE_FAILURE_MESSAGE) else {
            return;
        };
        match outcome {
            Ok((usernames, target)) => {
                self.state.ou_panel.apply_move(&usernames, target);
                self.toast = Some(Toast::success(
                    "Users Moved Successfully",
                    format!("{} users were moved to {}", usernames.len(), target.dn()),
                ));
            }
            Err(error) => {
                tracing::error!("Move failed: {error:#}");
                self.toast = Some(Toast::error("Move Failed", error.to_string()));
            }
        }
    }

    // ---- Authentication test ----

    fn handle_auth_test_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.auth_test.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.auth_test.prev_field(),
            KeyCode::Enter if self.state.auth_test.is_button_active() => self.submit_auth_test(),
            KeyCode::Enter => self.state.auth_test.next_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.auth_test.input_char(c);
            }
            KeyCode::Backspace => self.state.auth_test.backspace(),
            _ => {}
        }
    }

    fn submit_auth_test(&mut self) {
        if self.pending_auth_test.is_some() {
            return;
        }
        if !self.state.auth_test.check_required() {
            return;
        }

        self.state.auth_result = None;
        let username = self.state.auth_test.username.clone();
        let password = self.state.auth_test.password.clone();
        let domain = self.state.auth_test.domain.clone();
        tracing::info!("Testing credentials for {username}");

        let (tx, rx) = std::sync::mpsc::sync_channel(1);
        if self.admin_live {
            let backend = Arc::clone(&self.backend);
            tokio::spawn(async move {
                let result = backend.test_auth(&username, &password, &domain).await;
                let _ = tx.send(result);
            });
        } else {
            tokio::spawn(async move {
                tokio::time::sleep(MOCK_AUTH_TEST_DELAY).await;
                let authenticated = username.to_lowercase() != "invalid";
                let message = if authenticated {
                    "Authentication successful. User credentials are valid."
                } else {
                    "Authentication failed. Invalid username or password."
                };
                let _ = tx.send(Ok(TestAuthResponse {
                    authenticated,
                    message: Some(message.to_string()),
                }));
            });
        }
        self.pending_auth_test = Some(rx);
    }

    fn poll_auth_test(&mut self) {
        let Some(outcome) = take_finished(&mut self.pending_auth_test, AUTH_TEST_FAILURE_MESSAGE)
        else {
            return;
        };
        let result = match outcome {
            Ok(response) => AuthTestOutcome {
                success: response.authenticated,
                message: response.message.unwrap_or_default(),
            },
            Err(error) => {
                tracing::error!("Auth test failed: {error:#}");
                AuthTestOutcome {
                    success: false,
                    message: error.to_string(),
                }
            }
        };
        self.state.auth_result = Some(result);
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Take the result of a finished background request, if any. A dropped
/// sender counts as a failure with the given fallback message.
fn take_finished<T>(pending: &mut Pending<T>, fallback: &'static str) -> Option<Result<T>> {
    let rx = pending.as_ref()?;
    let outcome = match rx.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return None,
        Err(TryRecvError::Disconnected) => Err(anyhow!(fallback)),
    };
    *pending = None;
    Some(outcome)
}

fn file_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackendClientTrait;
    use crate::state::{BudgetRange, CompanySize, Industry};

    fn create_test_app(backend: MockBackendClientTrait, admin_live: bool) -> App {
        App::new(
            Arc::new(backend),
            "http://localhost:5000".to_string(),
            "example.com",
            admin_live,
        )
    }

    fn fill_valid_registration(app: &mut App) {
        let values = &mut app.state.registration.values;
        values.first_name = "Jane".to_string();
        values.last_name = "Doe".to_string();
        values.username = "jdoe".to_string();
        values.password = "hunter22".to_string();
        values.email = "jane@example.com".to_string();
        values.zip_code = "90210".to_string();
        values.job_title = "Analyst".to_string();
        values.department = "Research".to_string();
        values.company_name = "Example Corp".to_string();
        values.ou = Some(OrganizationalUnit::Marketing);
        values.industry = Some(Industry::Technology);
        values.company_size = Some(CompanySize::Size11To50);
        values.budget = Some(BudgetRange::FiveToTenK);
        values.ad_objectives = "Brand awareness in Q3".to_string();
        values.terms_accepted = true;
        values.refresh_full_name();
    }

    async fn wait_until(app: &mut App, mut done: impl FnMut(&App) -> bool) {
        for _ in 0..200 {
            app.on_tick();
            if done(app) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        panic!("operation never completed");
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    mod registration_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_successful_submission_resets_form_and_toasts() {
            let mut backend = MockBackendClientTrait::new();
            backend
                .expect_create_ad_user()
                .times(1)
                .returning(|request| {
                    assert_eq!(request.username, "jdoe");
                    assert_eq!(request.full_name, "Jane Doe");
                    Ok(CreateUserResponse {
                        success: true,
                        message: None,
                        user_id: Some("abc123".to_string()),
                    })
                });
            let mut app = create_test_app(backend, false);
            fill_valid_registration(&mut app);

            app.submit_registration();
            assert!(app.is_submitting());

            wait_until(&mut app, |app| !app.is_submitting()).await;

            let toast = app.toast.expect("success toast");
            assert_eq!(toast.title, "Success!");
            assert_eq!(
                toast.description,
                "Your ad user account has been created successfully."
            );
            assert!(app.state.registration.values.first_name.is_empty());
            assert!(app.state.registration.errors.is_empty());
        }

        #[tokio::test]
        async fn test_server_failure_keeps_values_and_shows_message() {
            let mut backend = MockBackendClientTrait::new();
            backend
                .expect_create_ad_user()
                .times(1)
                .returning(|_| Err(anyhow!("Username already exists")));
            let mut app = create_test_app(backend, false);
            fill_valid_registration(&mut app);

            app.submit_registration();
            wait_until(&mut app, |app| !app.is_submitting()).await;

            let toast = app.toast.expect("error toast");
            assert_eq!(toast.title, "Error");
            assert_eq!(toast.description, "Username already exists");
            assert_eq!(app.state.registration.values.first_name, "Jane");
        }

        #[tokio::test]
        async fn test_invalid_form_never_reaches_backend() {
            // No expectations set: any call would panic the task
            let mut app = create_test_app(MockBackendClientTrait::new(), false);

            app.submit_registration();

            assert!(!app.is_submitting());
            assert!(!app.state.registration.errors.is_empty());
            assert!(app.toast.is_none());
        }

        #[tokio::test]
        async fn test_second_submit_while_pending_is_ignored() {
            let mut backend = MockBackendClientTrait::new();
            backend.expect_create_ad_user().times(1).returning(|_| {
                Ok(CreateUserResponse {
                    success: true,
                    message: None,
                    user_id: None,
                })
            });
            let mut app = create_test_app(backend, false);
            fill_valid_registration(&mut app);

            app.submit_registration();
            app.submit_registration();

            wait_until(&mut app, |app| !app.is_submitting()).await;
            assert!(app.toast.is_some());
        }

        #[tokio::test]
        async fn test_dropped_task_falls_back_to_generic_failure() {
            let mut app = create_test_app(MockBackendClientTrait::new(), false);
            let (tx, rx) = std::sync::mpsc::sync_channel::<Result<CreateUserResponse>>(1);
            drop(tx);
            app.pending_submission = Some(rx);

            app.on_tick();

            let toast = app.toast.expect("fallback toast");
            assert_eq!(toast.description, SUBMIT_FAILURE_MESSAGE);
        }
    }

    mod login_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_demo_credentials_unlock_admin_tabs() {
            let mut app = create_test_app(MockBackendClientTrait::new(), false);
            app.state.enter_admin();
            app.state.login.username = "admin".to_string();
            app.state.login.password = "password".to_string();

            app.submit_login();

            assert!(app.state.admin_authenticated);
            assert_eq!(app.state.current_view, View::CsvImport);
            let toast = app.toast.expect("login toast");
            assert_eq!(toast.title, "Authentication Successful");
            assert_eq!(toast.description, "Welcome to the admin dashboard");
        }

        #[test]
        fn test_wrong_credentials_stay_on_login() {
            let mut app = create_test_app(MockBackendClientTrait::new(), false);
            app.state.enter_admin();
            app.state.login.username = "admin".to_string();
            app.state.login.password = "hunter2".to_string();

            app.submit_login();

            assert!(!app.state.admin_authenticated);
            assert_eq!(app.state.current_view, View::AdminLogin);
            let toast = app.toast.expect("failure toast");
            assert_eq!(toast.title, "Authentication Failed");
            assert_eq!(toast.description, "Invalid credentials");
        }

        #[test]
        fn test_blank_fields_show_inline_errors() {
            let mut app = create_test_app(MockBackendClientTrait::new(), false);
            app.state.enter_admin();

            app.submit_login();

            assert!(app.toast.is_none());
            assert_eq!(app.state.login.username_error, Some("Username is required"));
            assert_eq!(app.state.login.password_error, Some("Password is required"));
        }

        #[tokio::test]
        async fn test_live_login_calls_backend() {
            let mut backend = MockBackendClientTrait::new();
            backend
                .expect_admin_login()
                .times(1)
                .withf(|username, password| username == "root" && password == "s3cret")
                .returning(|_, _| Ok(()));
            let mut app = create_test_app(backend, true);
            app.state.enter_admin();
            app.state.login.username = "root".to_string();
            app.state.login.password = "s3cret".to_string();

            app.submit_login();
            assert!(app.is_logging_in());

            wait_until(&mut app, |app| app.state.admin_authenticated).await;
            assert_eq!(app.state.current_view, View::CsvImport);
        }
    }

    mod import_tests {
        use super::*;
        use crate::state::ImportedUser;
        use pretty_assertions::assert_eq;

        fn loaded_user(username: &str) -> ImportedUser {
            ImportedUser {
                username: username.to_string(),
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                full_name: "Test User".to_string(),
                ou: "OU=Marketing,DC=example,DC=com".to_string(),
                ..Default::default()
            }
        }

        #[tokio::test]
        async fn test_import_overrides_ou_and_clears_preview() {
            let mut backend = MockBackendClientTrait::new();
            backend
                .expect_import_users()
                .times(1)
                .withf(|users| {
                    users.len() == 2
                        && users
                            .iter()
                            .all(|user| user.ou == "OU=Sales,DC=example,DC=com")
                })
                .returning(|_| Ok(()));
            let mut app = create_test_app(backend, true);
            app.state.csv_import.users = vec![loaded_user("a"), loaded_user("b")];
            app.state.csv_import.target_ou = OrganizationalUnit::Sales;

            app.submit_import();
            assert!(app.is_importing());

            wait_until(&mut app, |app| !app.is_importing()).await;

            let toast = app.toast.expect("import toast");
            assert_eq!(toast.title, "Users Imported Successfully");
            assert_eq!(
                toast.description,
                "2 users were imported to OU=Sales,DC=example,DC=com"
            );
            assert!(app.state.csv_import.users.is_empty());
            assert_eq!(app.state.csv_import.target_ou, OrganizationalUnit::Sales);
        }

        #[tokio::test]
        async fn test_import_failure_keeps_preview() {
            let mut backend = MockBackendClientTrait::new();
            backend
                .expect_import_users()
                .times(1)
                .returning(|_| Err(anyhow!("Import failed")));
            let mut app = create_test_app(backend, true);
            app.state.csv_import.users = vec![loaded_user("a")];

            app.submit_import();
            wait_until(&mut app, |app| !app.is_importing()).await;

            let toast = app.toast.expect("failure toast");
            assert_eq!(toast.title, "Import Failed");
            assert_eq!(toast.description, "Import failed");
            assert_eq!(app.state.csv_import.users.len(), 1);
        }

        #[test]
        fn test_empty_preview_cannot_import() {
            let mut app = create_test_app(MockBackendClientTrait::new(), true);

            app.submit_import();

            assert!(!app.is_importing());
            assert!(app.toast.is_none());
        }
    }

    mod move_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_move_updates_local_rows_and_toasts_target_dn() {
            let mut backend = MockBackendClientTrait::new();
            backend
                .expect_move_users()
                .times(1)
                .withf(|usernames, target| {
                    *usernames == ["jsmith".to_string()]
                        && target == "OU=Sales,DC=example,DC=com"
                })
                .returning(|_, _| Ok(()));
            let mut app = create_test_app(backend, true);
            app.state.ou_panel.toggle_highlighted(); // jsmith in Marketing

            app.submit_move();
            assert!(app.is_moving());

            wait_until(&mut app, |app| !app.is_moving()).await;

            let toast = app.toast.expect("move toast");
            assert_eq!(toast.title, "Users Moved Successfully");
            assert_eq!(
                toast.description,
                "1 users were moved to OU=Sales,DC=example,DC=com"
            );
            assert!(app.state.ou_panel.selected.is_empty());
            let jsmith = app
                .state
                .ou_panel
                .users
                .iter()
                .find(|user| user.username == "jsmith")
                .map(|user| user.ou);
            assert_eq!(jsmith, Some(OrganizationalUnit::Sales));
        }

        #[test]
        fn test_move_with_no_selection_warns() {
            let mut app = create_test_app(MockBackendClientTrait::new(), true);

            app.submit_move();

            assert!(!app.is_moving());
            let toast = app.toast.expect("warning toast");
            assert_eq!(toast.title, "No Users Selected");
            assert_eq!(toast.description, "Please select at least one user to move");
        }

        #[test]
        fn test_move_into_same_ou_is_ignored() {
            let mut app = create_test_app(MockBackendClientTrait::new(), true);
            app.state.ou_panel.toggle_highlighted();
            app.state.ou_panel.target_ou = app.state.ou_panel.source_ou;

            app.submit_move();

            assert!(!app.is_moving());
            assert!(app.toast.is_none());
        }
    }

    mod auth_test_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_live_result_lands_in_result_panel() {
            let mut backend = MockBackendClientTrait::new();
            backend
                .expect_test_auth()
                .times(1)
                .withf(|username, _, domain| username == "jdoe" && domain == "example.com")
                .returning(|_, _, _| {
                    Ok(TestAuthResponse {
                        authenticated: false,
                        message: Some("Bad password".to_string()),
                    })
                });
            let mut app = create_test_app(backend, true);
            app.state.auth_test.username = "jdoe".to_string();
            app.state.auth_test.password = "nope".to_string();

            app.submit_auth_test();
            assert!(app.is_testing_auth());
            assert!(app.state.auth_result.is_none());

            wait_until(&mut app, |app| app.state.auth_result.is_some()).await;

            let result = app.state.auth_result.expect("result");
            assert!(!result.success);
            assert_eq!(result.message, "Bad password");
            assert!(app.toast.is_none());
        }

        #[tokio::test]
        async fn test_mock_mode_rejects_the_invalid_username() {
            let mut app = create_test_app(MockBackendClientTrait::new(), false);
            app.state.auth_test.username = "Invalid".to_string();
            app.state.auth_test.password = "anything".to_string();

            app.submit_auth_test();
            wait_until(&mut app, |app| app.state.auth_result.is_some()).await;

            let result = app.state.auth_result.expect("result");
            assert!(!result.success);
            assert_eq!(
                result.message,
                "Authentication failed. Invalid username or password."
            );
        }

        #[test]
        fn test_missing_credentials_block_the_test() {
            let mut app = create_test_app(MockBackendClientTrait::new(), true);

            app.submit_auth_test();

            assert!(!app.is_testing_auth());
            assert_eq!(
                app.state.auth_test.username_error,
                Some("Username is required")
            );
        }
    }

    mod navigation_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_admin_shortcut_opens_the_login_gate() {
            let mut app = create_test_app(MockBackendClientTrait::new(), false);

            app.handle_key(KeyEvent::new(
                KeyCode::Char('a'),
                crate::platform::ADMIN_MODIFIER,
            ));

            assert_eq!(app.state.current_view, View::AdminLogin);
        }

        #[test]
        fn test_function_keys_switch_admin_tabs() {
            let mut app = create_test_app(MockBackendClientTrait::new(), false);
            app.state.admin_authenticated = true;
            app.state.current_view = View::CsvImport;

            app.handle_key(key(KeyCode::F(2)));
            assert_eq!(app.state.current_view, View::OuManagement);

            app.handle_key(key(KeyCode::F(3)));
            assert_eq!(app.state.current_view, View::AuthTest);

            app.handle_key(key(KeyCode::F(1)));
            assert_eq!(app.state.current_view, View::CsvImport);
        }

        #[test]
        fn test_escape_returns_to_registration() {
            let mut app = create_test_app(MockBackendClientTrait::new(), false);
            app.state.admin_authenticated = true;
            app.state.current_view = View::OuManagement;

            app.handle_key(key(KeyCode::Esc));

            assert_eq!(app.state.current_view, View::Register);
        }

        #[test]
        fn test_typing_flows_into_the_active_field() {
            let mut app = create_test_app(MockBackendClientTrait::new(), false);

            for c in "Jane".chars() {
                app.handle_key(key(KeyCode::Char(c)));
            }
            app.handle_key(key(KeyCode::Tab));
            for c in "Doe".chars() {
                app.handle_key(key(KeyCode::Char(c)));
            }

            assert_eq!(app.state.registration.values.first_name, "Jane");
            assert_eq!(app.state.registration.values.last_name, "Doe");
            assert_eq!(app.state.registration.values.full_name, "Jane Doe");
        }

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = create_test_app(MockBackendClientTrait::new(), false);

            app.handle_key(ctrl('c'));

            assert!(app.should_quit());
        }
    }
}
