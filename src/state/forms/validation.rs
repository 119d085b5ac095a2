//! Pure, synchronous validation of the registration form
//!
//! `validate` maps a `FormValues` snapshot to a per-field error report.
//! No side effects and no I/O: identical input produces an identical
//! report, which is what lets submission short-circuit before any
//! request is built.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::schema::FieldId;
use super::values::FormValues;

// WHATWG HTML email grammar
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// Result of one validation pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    errors: BTreeMap<FieldId, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn message_for(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<FieldId, String> {
        &self.errors
    }

    pub fn into_errors(self) -> BTreeMap<FieldId, String> {
        self.errors
    }
}

/// Validate every field, collecting one message per offending field
pub fn validate(values: &FormValues) -> ValidationReport {
    let mut errors = BTreeMap::new();
    for field in FieldId::ALL {
        if let Some(message) = field_error(field, values) {
            errors.insert(field, message.to_string());
        }
    }
    ValidationReport { errors }
}

fn field_error(field: FieldId, values: &FormValues) -> Option<&'static str> {
    match field {
        FieldId::FirstName => below_min(&values.first_name, 2)
            .then_some("First name must be at least 2 characters."),
        FieldId::LastName => {
            below_min(&values.last_name, 2).then_some("Last name must be at least 2 characters.")
        }
        FieldId::FullName => {
            below_min(&values.full_name, 4).then_some("Full name must be at least 4 characters.")
        }
        FieldId::Username => {
            below_min(&values.username, 3).then_some("Username must be at least 3 characters.")
        }
        FieldId::Password => {
            below_min(&values.password, 8).then_some("Password must be at least 8 characters.")
        }
        FieldId::Email => {
            (!EMAIL_RE.is_match(&values.email)).then_some("Please enter a valid email address.")
        }
        FieldId::Telephone => optional_below_min(&values.telephone, 10)
            .then_some("Please enter a valid phone number."),
        FieldId::ZipCode => {
            optional_below_min(&values.zip_code, 5).then_some("Please enter a valid zip code.")
        }
        FieldId::JobTitle => optional_below_min(&values.job_title, 2)
            .then_some("Job title must be at least 2 characters."),
        FieldId::Department => optional_below_min(&values.department, 2)
            .then_some("Department must be at least 2 characters."),
        FieldId::Description => None,
        FieldId::CompanyName => below_min(&values.company_name, 2)
            .then_some("Company name must be at least 2 characters."),
        FieldId::Website => {
            let website = values.website.trim();
            (!website.is_empty() && Url::parse(website).is_err())
                .then_some("Please enter a valid URL.")
        }
        FieldId::Ou => values
            .ou
            .is_none()
            .then_some("Please select an organizational unit."),
        FieldId::Industry => values.industry.is_none().then_some("Please select an industry."),
        FieldId::CompanySize => None,
        FieldId::Budget => values
            .budget
            .is_none()
            .then_some("Please enter your monthly budget."),
        FieldId::AdObjectives => below_min(&values.ad_objectives, 1)
            .then_some("Please describe your advertising objectives."),
        FieldId::PreferredPlatforms => None,
        FieldId::PreferredContact => None,
        FieldId::TermsAccepted => (!values.terms_accepted)
            .then_some("You must accept the terms and conditions."),
    }
}

/// Trimmed character count below the threshold
fn below_min(value: &str, min: usize) -> bool {
    value.trim().chars().count() < min
}

/// Empty is allowed; present values must meet the threshold
fn optional_below_min(value: &str, min: usize) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().count() < min
}
