//! Wire types for the registration backend API

use serde::{Deserialize, Serialize};

use crate::state::{FormValues, ImportedUser};

/// Payload for `POST /api/create-ad-user`. Field names follow the
/// backend's camelCase contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
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
    pub ou: String,
    pub industry: String,
    pub company_size: String,
    pub budget: String,
    pub ad_objectives: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_platforms: Vec<String>,
    pub preferred_contact: String,
    pub terms_accepted: bool,
}

impl From<&FormValues> for CreateUserRequest {
    fn from(values: &FormValues) -> Self {
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            full_name: values.full_name.clone(),
            username: values.username.clone(),
            password: values.password.clone(),
            email: values.email.clone(),
            telephone: values.telephone.clone(),
            zip_code: values.zip_code.clone(),
            job_title: values.job_title.clone(),
            department: values.department.clone(),
            description: values.description.clone(),
            company_name: values.company_name.clone(),
            website: values.website.clone(),
            ou: values.ou.map(|ou| ou.dn().to_string()).unwrap_or_default(),
            industry: values
                .industry
                .map(|industry| industry.value().to_string())
                .unwrap_or_default(),
            company_size: values
                .company_size
                .map(|size| size.value().to_string())
                .unwrap_or_default(),
            budget: values
                .budget
                .map(|budget| budget.value().to_string())
                .unwrap_or_default(),
            ad_objectives: values.ad_objectives.clone(),
            preferred_platforms: values
                .preferred_platforms
                .iter()
                .map(|platform| platform.value().to_string())
                .collect(),
            preferred_contact: values.preferred_contact.value().to_string(),
            terms_accepted: values.terms_accepted,
        }
    }
}

/// Response from `POST /api/create-ad-user`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// One user record in an import batch. The backend accepts the
/// lowercase column names of the CSV format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CsvUserPayload {
    pub username: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
    pub fullname: String,
    pub ou: String,
    pub email: String,
    pub zipcode: String,
    pub description: String,
    pub telephone: String,
    pub jobtitle: String,
    pub department: String,
}

impl From<&ImportedUser> for CsvUserPayload {
    fn from(user: &ImportedUser) -> Self {
        Self {
            username: user.username.clone(),
            password: user.password.clone(),
            firstname: user.first_name.clone(),
            lastname: user.last_name.clone(),
            fullname: user.full_name.clone(),
            ou: user.ou.clone(),
            email: user.email.clone(),
            zipcode: user.zip_code.clone(),
            description: user.description.clone(),
            telephone: user.telephone.clone(),
            jobtitle: user.job_title.clone(),
            department: user.department.clone(),
        }
    }
}

/// Payload for `POST /api/admin/import-users`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportUsersRequest {
    pub users: Vec<CsvUserPayload>,
}

/// Payload for `POST /api/admin/move-users`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoveUsersRequest {
    pub users: Vec<String>,
    #[serde(rename = "targetOu")]
    pub target_ou: String,
}

/// Payload for `POST /api/admin/login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for `POST /api/admin/test-auth`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestAuthRequest {
    pub username: String,
    pub password: String,
    pub domain: String,
}

/// Response from `POST /api/admin/test-auth`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestAuthResponse {
    pub authenticated: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error envelope the backend returns with non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
