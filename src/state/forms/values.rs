//! In-progress registration form values

use super::options::{
    AdPlatform, BudgetRange, CompanySize, ContactMethod, Industry, OrganizationalUnit,
};

/// One in-progress submission. Text fields are free-form strings,
/// selectors are closed enum values (`None` until the user picks one),
/// and the contact method always holds its default.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub telephone: String,
    pub zip_code: String,
    pub job_title: String,
    pub department: String,
    pub description: String,
    pub company_name: String,
    pub website: String,
    pub ou: Option<OrganizationalUnit>,
    pub industry: Option<Industry>,
    pub company_size: Option<CompanySize>,
    pub budget: Option<BudgetRange>,
    pub ad_objectives: String,
    pub preferred_platforms: Vec<AdPlatform>,
    pub preferred_contact: ContactMethod,
    pub terms_accepted: bool,
}

impl Default for FormValues {
    fn default() -> Self {
        FormValues {
            first_name: String::new(),
            last_name: String::new(),
            full_name: String::new(),
            username: String::new(),
            password: String::new(),
            email: String::new(),
            telephone: String::new(),
            zip_code: String::new(),
            job_title: String::new(),
            department: String::new(),
            description: String::new(),
            company_name: String::new(),
            website: String::new(),
            ou: None,
            industry: None,
            company_size: None,
            budget: None,
            ad_objectives: String::new(),
            preferred_platforms: Vec::new(),
            preferred_contact: ContactMethod::Email,
            terms_accepted: false,
        }
    }
}

impl FormValues {
    /// Re-run the full-name derivation after an edit to either source
    /// field. Leaves the field untouched while either source is empty.
    pub fn refresh_full_name(&mut self) {
        if let Some(full_name) = derive_full_name(&self.first_name, &self.last_name) {
            self.full_name = full_name;
        }
    }

    /// Toggle a platform in or out of the preferred set
    pub fn toggle_platform(&mut self, platform: AdPlatform) {
        if let Some(index) = self.preferred_platforms.iter().position(|p| *p == platform) {
            self.preferred_platforms.remove(index);
        } else {
            self.preferred_platforms.push(platform);
        }
    }

    pub fn reset(&mut self) {
        *self = FormValues::default();
    }
}

/// Derivation rule for the full name: defined only when both sources
/// are non-empty, in which case it is first and last joined by one
/// space. Depends on nothing but its two arguments.
pub fn derive_full_name(first_name: &str, last_name: &str) -> Option<String> {
    if first_name.is_empty() || last_name.is_empty() {
        None
    } else {
        Some(format!("{first_name} {last_name}"))
    }
}
