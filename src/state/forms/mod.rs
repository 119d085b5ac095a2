//! Form domain layer
//!
//! Type-safe handling of the registration form and the small admin
//! forms: field schema, typed values, pure validation, and the
//! per-form navigation/input state.

mod form_state;
mod options;
mod schema;
mod validation;
mod values;

pub use form_state::{
    AdminLoginForm, AuthTestForm, Form, RegistrationForm, REGISTRATION_BUTTONS,
};
pub use options::{
    cycle_required, cycle_selection, AdPlatform, BudgetRange, CompanySize, ContactMethod,
    Industry, OrganizationalUnit,
};
pub use schema::{FieldId, FieldKind, FormSection};
pub use validation::{validate, ValidationReport};
pub use values::{derive_full_name, FormValues};
