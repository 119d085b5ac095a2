//! Declarative schema for the registration form
//!
//! `FieldId` enumerates every field in tab order; the methods on it are
//! lookup tables for label, section, input kind, and required marking.
//! Validation rules live in `validation.rs` and key off the same ids.

/// Form sections in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    Personal,
    Job,
    Company,
    AdAccount,
    Preferences,
    Terms,
}

impl FormSection {
    /// Section heading; the terms checkbox stands alone without one
    pub fn title(&self) -> Option<&'static str> {
        match self {
            FormSection::Personal => Some("Personal Information"),
            FormSection::Job => Some("Job Information"),
            FormSection::Company => Some("Company Details"),
            FormSection::AdAccount => Some("Ad Account Information"),
            FormSection::Preferences => Some("Preferences"),
            FormSection::Terms => None,
        }
    }
}

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    MultiSelect,
    Checkbox,
}

/// Identifier for each registration form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    FullName,
    Username,
    Password,
    Email,
    Telephone,
    ZipCode,
    JobTitle,
    Department,
    Description,
    CompanyName,
    Website,
    Ou,
    Industry,
    CompanySize,
    Budget,
    AdObjectives,
    PreferredPlatforms,
    PreferredContact,
    TermsAccepted,
}

impl FieldId {
    /// All fields in tab order (section order, top to bottom)
    pub const ALL: [FieldId; 21] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::FullName,
        FieldId::Username,
        FieldId::Password,
        FieldId::Email,
        FieldId::Telephone,
        FieldId::ZipCode,
        FieldId::JobTitle,
        FieldId::Department,
        FieldId::Description,
        FieldId::CompanyName,
        FieldId::Website,
        FieldId::Ou,
        FieldId::Industry,
        FieldId::CompanySize,
        FieldId::Budget,
        FieldId::AdObjectives,
        FieldId::PreferredPlatforms,
        FieldId::PreferredContact,
        FieldId::TermsAccepted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::FullName => "Full Name",
            FieldId::Username => "Username",
            FieldId::Password => "Password",
            FieldId::Email => "Email Address",
            FieldId::Telephone => "Phone Number",
            FieldId::ZipCode => "Zip Code",
            FieldId::JobTitle => "Job Title",
            FieldId::Department => "Department",
            FieldId::Description => "Description",
            FieldId::CompanyName => "Company Name",
            FieldId::Website => "Website URL",
            FieldId::Ou => "Organizational Unit",
            FieldId::Industry => "Industry",
            FieldId::CompanySize => "Company Size",
            FieldId::Budget => "Monthly Ad Budget",
            FieldId::AdObjectives => "Advertising Objectives",
            FieldId::PreferredPlatforms => "Preferred Platforms",
            FieldId::PreferredContact => "Preferred Contact Method",
            FieldId::TermsAccepted => "I agree to the Terms of Service and Privacy Policy",
        }
    }

    pub fn section(&self) -> FormSection {
        match self {
            FieldId::FirstName
            | FieldId::LastName
            | FieldId::FullName
            | FieldId::Username
            | FieldId::Password
            | FieldId::Email
            | FieldId::Telephone
            | FieldId::ZipCode => FormSection::Personal,
            FieldId::JobTitle | FieldId::Department | FieldId::Description => FormSection::Job,
            FieldId::CompanyName
            | FieldId::Website
            | FieldId::Ou
            | FieldId::Industry
            | FieldId::CompanySize => FormSection::Company,
            FieldId::Budget | FieldId::AdObjectives | FieldId::PreferredPlatforms => {
                FormSection::AdAccount
            }
            FieldId::PreferredContact => FormSection::Preferences,
            FieldId::TermsAccepted => FormSection::Terms,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldId::Ou
            | FieldId::Industry
            | FieldId::CompanySize
            | FieldId::Budget
            | FieldId::PreferredContact => FieldKind::Select,
            FieldId::PreferredPlatforms => FieldKind::MultiSelect,
            FieldId::TermsAccepted => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    /// Marked with `*` in the form; the validator is the authority on
    /// what failing the mark means
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FieldId::FirstName
                | FieldId::LastName
                | FieldId::FullName
                | FieldId::Username
                | FieldId::Password
                | FieldId::Email
                | FieldId::CompanyName
                | FieldId::Ou
                | FieldId::Industry
                | FieldId::Budget
                | FieldId::AdObjectives
        )
    }

    /// Full name is derived from first/last and never typed directly
    pub fn is_editable(&self) -> bool {
        !matches!(self, FieldId::FullName)
    }

    /// Rendered masked
    pub fn is_secret(&self) -> bool {
        matches!(self, FieldId::Password)
    }

    /// Prompt shown while a selector has no selection yet
    pub fn select_prompt(&self) -> &'static str {
        match self {
            FieldId::Ou => "Select an organizational unit",
            FieldId::Industry => "Select an industry",
            FieldId::CompanySize => "Select company size",
            FieldId::Budget => "Select budget range",
            FieldId::PreferredContact => "Select contact method",
            _ => "",
        }
    }
}
