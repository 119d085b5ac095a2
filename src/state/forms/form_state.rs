//! Form state management and form structs

use std::collections::BTreeMap;

use super::options::{
    cycle_required, cycle_selection, AdPlatform, BudgetRange, CompanySize, ContactMethod,
    Industry, OrganizationalUnit,
};
use super::schema::{FieldId, FieldKind};
use super::validation::{validate, ValidationReport};
use super::values::FormValues;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons on the registration form's final row
pub const REGISTRATION_BUTTONS: [&str; 2] = ["Create Ad Account", "Clear Form"];

/// The registration form: 21 schema fields plus a buttons row
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub values: FormValues,
    pub errors: BTreeMap<FieldId, String>,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Create, 1=Clear)
    pub selected_button: usize,
    /// Highlighted entry within the platform multi-select
    pub platform_cursor: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schema id of the active field; `None` on the buttons row
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == FieldId::ALL.len()
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % REGISTRATION_BUTTONS.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = REGISTRATION_BUTTONS.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Type a character into the active text field. The derived full
    /// name ignores input; selectors and the checkbox ignore it too.
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_field_id() else {
            return;
        };
        if !field.is_editable() || field.kind() != FieldKind::Text {
            return;
        }
        if let Some(text) = self.text_value_mut(field) {
            text.push(c);
        }
        self.after_edit(field);
    }

    /// Delete the last character of the active text field
    pub fn backspace(&mut self) {
        let Some(field) = self.active_field_id() else {
            return;
        };
        if !field.is_editable() || field.kind() != FieldKind::Text {
            return;
        }
        if let Some(text) = self.text_value_mut(field) {
            text.pop();
        }
        self.after_edit(field);
    }

    /// Left arrow: step a selector back, or move the platform cursor
    pub fn handle_left(&mut self) {
        match self.active_field_id() {
            Some(FieldId::PreferredPlatforms) => {
                if self.platform_cursor == 0 {
                    self.platform_cursor = AdPlatform::ALL.len() - 1;
                } else {
                    self.platform_cursor -= 1;
                }
            }
            Some(field) if field.kind() == FieldKind::Select => self.cycle_select(field, false),
            _ => {}
        }
    }

    /// Right arrow: step a selector forward, or move the platform cursor
    pub fn handle_right(&mut self) {
        match self.active_field_id() {
            Some(FieldId::PreferredPlatforms) => {
                self.platform_cursor = (self.platform_cursor + 1) % AdPlatform::ALL.len();
            }
            Some(field) if field.kind() == FieldKind::Select => self.cycle_select(field, true),
            _ => {}
        }
    }

    /// Space: toggle the checkbox or highlighted platform, step a
    /// selector forward, or type a space into a text field
    pub fn handle_space(&mut self) {
        match self.active_field_id() {
            Some(FieldId::TermsAccepted) => {
                self.values.terms_accepted = !self.values.terms_accepted;
                self.revalidate_if_errored();
            }
            Some(FieldId::PreferredPlatforms) => {
                let platform = AdPlatform::ALL[self.platform_cursor % AdPlatform::ALL.len()];
                self.values.toggle_platform(platform);
            }
            Some(field) if field.kind() == FieldKind::Select => self.cycle_select(field, true),
            _ => self.input_char(' '),
        }
    }

    /// Run a validation pass and keep its errors for inline display
    pub fn apply_report(&mut self, report: ValidationReport) {
        self.errors = report.into_errors();
    }

    pub fn error_for(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Reset values, errors, and cursors to a fresh form
    pub fn clear(&mut self) {
        *self = RegistrationForm::default();
    }

    fn cycle_select(&mut self, field: FieldId, forward: bool) {
        match field {
            FieldId::Ou => {
                self.values.ou =
                    cycle_selection(&OrganizationalUnit::REGISTRATION, self.values.ou, forward);
            }
            FieldId::Industry => {
                self.values.industry = cycle_selection(&Industry::ALL, self.values.industry, forward);
            }
            FieldId::CompanySize => {
                self.values.company_size =
                    cycle_selection(&CompanySize::ALL, self.values.company_size, forward);
            }
            FieldId::Budget => {
                self.values.budget = cycle_selection(&BudgetRange::ALL, self.values.budget, forward);
            }
            FieldId::PreferredContact => {
                self.values.preferred_contact =
                    cycle_required(&ContactMethod::ALL, self.values.preferred_contact, forward);
            }
            _ => {}
        }
        self.revalidate_if_errored();
    }

    fn after_edit(&mut self, field: FieldId) {
        if matches!(field, FieldId::FirstName | FieldId::LastName) {
            self.values.refresh_full_name();
        }
        self.revalidate_if_errored();
    }

    // Once a submit has surfaced errors, later edits revalidate live
    // so corrected fields drop their messages immediately.
    fn revalidate_if_errored(&mut self) {
        if !self.errors.is_empty() {
            self.errors = validate(&self.values).into_errors();
        }
    }

    /// Current text for a field, including the derived full name
    pub fn text_value(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::FirstName => Some(&self.values.first_name),
            FieldId::LastName => Some(&self.values.last_name),
            FieldId::FullName => Some(&self.values.full_name),
            FieldId::Username => Some(&self.values.username),
            FieldId::Password => Some(&self.values.password),
            FieldId::Email => Some(&self.values.email),
            FieldId::Telephone => Some(&self.values.telephone),
            FieldId::ZipCode => Some(&self.values.zip_code),
            FieldId::JobTitle => Some(&self.values.job_title),
            FieldId::Department => Some(&self.values.department),
            FieldId::Description => Some(&self.values.description),
            FieldId::CompanyName => Some(&self.values.company_name),
            FieldId::Website => Some(&self.values.website),
            FieldId::AdObjectives => Some(&self.values.ad_objectives),
            _ => None,
        }
    }

    fn text_value_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::FirstName => Some(&mut self.values.first_name),
            FieldId::LastName => Some(&mut self.values.last_name),
            FieldId::Username => Some(&mut self.values.username),
            FieldId::Password => Some(&mut self.values.password),
            FieldId::Email => Some(&mut self.values.email),
            FieldId::Telephone => Some(&mut self.values.telephone),
            FieldId::ZipCode => Some(&mut self.values.zip_code),
            FieldId::JobTitle => Some(&mut self.values.job_title),
            FieldId::Department => Some(&mut self.values.department),
            FieldId::Description => Some(&mut self.values.description),
            FieldId::CompanyName => Some(&mut self.values.company_name),
            FieldId::Website => Some(&mut self.values.website),
            FieldId::AdObjectives => Some(&mut self.values.ad_objectives),
            _ => None,
        }
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        FieldId::ALL.len() + 1 // fields + buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FieldId::ALL.len());
    }
}

/// Admin login gate: username, password, login button
#[derive(Debug, Clone, Default)]
pub struct AdminLoginForm {
    pub username: String,
    pub password: String,
    pub username_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
    pub active_field_index: usize,
}

impl AdminLoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_char(&mut self, c: char) {
        match self.active_field_index {
            0 => self.username.push(c),
            1 => self.password.push(c),
            _ => return,
        }
        self.refresh_errors();
    }

    pub fn backspace(&mut self) {
        match self.active_field_index {
            0 => {
                self.username.pop();
            }
            1 => {
                self.password.pop();
            }
            _ => return,
        }
        self.refresh_errors();
    }

    pub fn is_button_active(&self) -> bool {
        self.active_field_index == 2
    }

    /// Both fields are required; returns false and records the
    /// messages when either is empty
    pub fn check_required(&mut self) -> bool {
        self.username_error = self.username.is_empty().then_some("Username is required");
        self.password_error = self.password.is_empty().then_some("Password is required");
        self.username_error.is_none() && self.password_error.is_none()
    }

    pub fn clear(&mut self) {
        *self = AdminLoginForm::default();
    }

    fn refresh_errors(&mut self) {
        if self.username_error.is_some() || self.password_error.is_some() {
            self.username_error = self.username.is_empty().then_some("Username is required");
            self.password_error = self.password.is_empty().then_some("Password is required");
        }
    }
}

impl Form for AdminLoginForm {
    fn field_count(&self) -> usize {
        3 // username, password, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
}

/// Credential test form: username, password, domain, test button
#[derive(Debug, Clone, Default)]
pub struct AuthTestForm {
    pub username: String,
    pub password: String,
    pub domain: String,
    pub username_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
    pub active_field_index: usize,
}

impl AuthTestForm {
    /// `domain` starts at the configured default
    pub fn new(default_domain: &str) -> Self {
        Self {
            domain: default_domain.to_string(),
            ..Self::default()
        }
    }

    pub fn input_char(&mut self, c: char) {
        match self.active_field_index {
            0 => self.username.push(c),
            1 => self.password.push(c),
            2 => self.domain.push(c),
            _ => return,
        }
        self.refresh_errors();
    }

    pub fn backspace(&mut self) {
        match self.active_field_index {
            0 => {
                self.username.pop();
            }
            1 => {
                self.password.pop();
            }
            2 => {
                self.domain.pop();
            }
            _ => return,
        }
        self.refresh_errors();
    }

    pub fn is_button_active(&self) -> bool {
        self.active_field_index == 3
    }

    pub fn check_required(&mut self) -> bool {
        self.username_error = self.username.is_empty().then_some("Username is required");
        self.password_error = self.password.is_empty().then_some("Password is required");
        self.username_error.is_none() && self.password_error.is_none()
    }

    fn refresh_errors(&mut self) {
        if self.username_error.is_some() || self.password_error.is_some() {
            self.username_error = self.username.is_empty().then_some("Username is required");
            self.password_error = self.password.is_empty().then_some("Password is required");
        }
    }
}

impl Form for AuthTestForm {
    fn field_count(&self) -> usize {
        4 // username, password, domain, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod form_trait_tests {
        use super::*;

        #[test]
        fn test_next_field_cycles_through_whole_form() {
            let mut form = RegistrationForm::new();
            for _ in 0..form.field_count() {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // Wrapped back
        }

        #[test]
        fn test_prev_field_wraps_to_buttons_row() {
            let mut form = RegistrationForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, FieldId::ALL.len());
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = RegistrationForm::new();
            form.set_active_field(500);
            assert_eq!(form.active_field_index, FieldId::ALL.len());
        }
    }

    mod registration_form_tests {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = RegistrationForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected_button, 0); // Create button
            assert_eq!(form.active_field_id(), Some(FieldId::FirstName));
            assert!(form.errors.is_empty());
            assert_eq!(form.values, FormValues::default());
        }

        #[test]
        fn test_field_count_includes_buttons_row() {
            let form = RegistrationForm::new();
            assert_eq!(form.field_count(), 22);
        }

        #[test]
        fn test_input_char_writes_to_active_field() {
            let mut form = RegistrationForm::new();
            form.input_char('J');
            form.input_char('o');
            assert_eq!(form.values.first_name, "Jo");
        }

        #[test]
        fn test_typing_first_and_last_derives_full_name() {
            let mut form = RegistrationForm::new();
            for c in "John".chars() {
                form.input_char(c);
            }
            form.next_field();
            for c in "Doe".chars() {
                form.input_char(c);
            }
            assert_eq!(form.values.full_name, "John Doe");
        }

        #[test]
        fn test_full_name_rejects_direct_input() {
            let mut form = RegistrationForm::new();
            form.set_active_field(2);
            assert_eq!(form.active_field_id(), Some(FieldId::FullName));
            form.input_char('X');
            form.backspace();
            assert_eq!(form.values.full_name, "");
        }

        #[test]
        fn test_backspace_tracks_derivation() {
            let mut form = RegistrationForm::new();
            for c in "Jon".chars() {
                form.input_char(c);
            }
            form.next_field();
            for c in "Doe".chars() {
                form.input_char(c);
            }
            form.set_active_field(0);
            form.backspace();
            assert_eq!(form.values.first_name, "Jo");
            assert_eq!(form.values.full_name, "Jo Doe");
        }

        #[test]
        fn test_space_toggles_terms() {
            let mut form = RegistrationForm::new();
            form.set_active_field(20);
            assert_eq!(form.active_field_id(), Some(FieldId::TermsAccepted));
            form.handle_space();
            assert!(form.values.terms_accepted);
            form.handle_space();
            assert!(!form.values.terms_accepted);
        }

        #[test]
        fn test_right_cycles_industry_selector() {
            let mut form = RegistrationForm::new();
            form.set_active_field(14);
            assert_eq!(form.active_field_id(), Some(FieldId::Industry));
            form.handle_right();
            assert_eq!(form.values.industry, Some(Industry::Technology));
            form.handle_right();
            assert_eq!(form.values.industry, Some(Industry::Healthcare));
            form.handle_left();
            assert_eq!(form.values.industry, Some(Industry::Technology));
        }

        #[test]
        fn test_ou_selector_uses_registration_subset() {
            let mut form = RegistrationForm::new();
            form.set_active_field(13);
            assert_eq!(form.active_field_id(), Some(FieldId::Ou));
            for _ in 0..OrganizationalUnit::REGISTRATION.len() {
                form.handle_right();
            }
            // One full cycle lands back on the first entry
            assert_eq!(form.values.ou, Some(OrganizationalUnit::Marketing));
        }

        #[test]
        fn test_platform_cursor_and_toggle() {
            let mut form = RegistrationForm::new();
            form.set_active_field(18);
            assert_eq!(form.active_field_id(), Some(FieldId::PreferredPlatforms));
            form.handle_right();
            form.handle_space();
            assert_eq!(form.values.preferred_platforms, vec![AdPlatform::Social]);
            form.handle_space();
            assert!(form.values.preferred_platforms.is_empty());
        }

        #[test]
        fn test_platform_cursor_wraps_left() {
            let mut form = RegistrationForm::new();
            form.set_active_field(18);
            form.handle_left();
            assert_eq!(form.platform_cursor, AdPlatform::ALL.len() - 1);
        }

        #[test]
        fn test_buttons_row_navigation() {
            let mut form = RegistrationForm::new();
            form.set_active_field(FieldId::ALL.len());
            assert!(form.is_buttons_row_active());
            assert_eq!(form.active_field_id(), None);
            form.next_button();
            assert_eq!(form.selected_button, 1);
            form.next_button();
            assert_eq!(form.selected_button, 0); // Wrapped
            form.prev_button();
            assert_eq!(form.selected_button, 1);
        }

        #[test]
        fn test_errors_revalidate_after_edit() {
            let mut form = RegistrationForm::new();
            form.apply_report(validate(&form.values));
            assert!(form.error_for(FieldId::FirstName).is_some());

            form.set_active_field(0);
            form.input_char('J');
            form.input_char('o');
            assert!(form.error_for(FieldId::FirstName).is_none());
            // Untouched fields keep their messages
            assert!(form.error_for(FieldId::Username).is_some());
        }

        #[test]
        fn test_no_live_validation_before_first_report() {
            let mut form = RegistrationForm::new();
            form.input_char('J');
            assert!(form.errors.is_empty());
        }

        #[test]
        fn test_clear_resets_everything() {
            let mut form = RegistrationForm::new();
            form.input_char('J');
            form.apply_report(validate(&form.values));
            form.set_active_field(5);
            form.clear();
            assert_eq!(form.values, FormValues::default());
            assert!(form.errors.is_empty());
            assert_eq!(form.active_field_index, 0);
        }
    }

    mod admin_login_form_tests {
        use super::*;

        #[test]
        fn test_requires_both_fields() {
            let mut form = AdminLoginForm::new();
            assert!(!form.check_required());
            assert_eq!(form.username_error, Some("Username is required"));
            assert_eq!(form.password_error, Some("Password is required"));
        }

        #[test]
        fn test_check_passes_with_both_fields() {
            let mut form = AdminLoginForm::new();
            for c in "admin".chars() {
                form.input_char(c);
            }
            form.next_field();
            for c in "password".chars() {
                form.input_char(c);
            }
            assert!(form.check_required());
            assert_eq!(form.username_error, None);
        }

        #[test]
        fn test_errors_clear_as_user_types() {
            let mut form = AdminLoginForm::new();
            form.check_required();
            form.input_char('a');
            assert_eq!(form.username_error, None);
            assert_eq!(form.password_error, Some("Password is required"));
        }

        #[test]
        fn test_button_row_ignores_typing() {
            let mut form = AdminLoginForm::new();
            form.set_active_field(2);
            assert!(form.is_button_active());
            form.input_char('x');
            assert_eq!(form.username, "");
            assert_eq!(form.password, "");
        }

        #[test]
        fn test_clear_wipes_credentials() {
            let mut form = AdminLoginForm::new();
            form.input_char('a');
            form.clear();
            assert_eq!(form.username, "");
            assert_eq!(form.active_field_index, 0);
        }
    }

    mod auth_test_form_tests {
        use super::*;

        #[test]
        fn test_new_prefills_domain() {
            let form = AuthTestForm::new("example.com");
            assert_eq!(form.domain, "example.com");
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_domain_is_editable() {
            let mut form = AuthTestForm::new("example.com");
            form.set_active_field(2);
            form.backspace();
            form.backspace();
            form.backspace();
            form.input_char('o');
            form.input_char('r');
            form.input_char('g');
            assert_eq!(form.domain, "example.org");
        }

        #[test]
        fn test_requires_username_and_password_only() {
            let mut form = AuthTestForm::new("");
            assert!(!form.check_required());
            for c in "user".chars() {
                form.input_char(c);
            }
            form.next_field();
            for c in "pass".chars() {
                form.input_char(c);
            }
            assert!(form.check_required());
        }

        #[test]
        fn test_field_count_includes_button() {
            let form = AuthTestForm::new("example.com");
            assert_eq!(form.field_count(), 4);
            let mut form = form;
            form.set_active_field(3);
            assert!(form.is_button_active());
        }
    }
}
