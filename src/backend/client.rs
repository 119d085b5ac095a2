//! HTTP client for the Flask registration backend

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use super::traits::BackendClientTrait;
use super::types::{
    ApiErrorBody, CreateUserRequest, CreateUserResponse, CsvUserPayload, ImportUsersRequest,
    LoginRequest, MoveUsersRequest, TestAuthRequest, TestAuthResponse,
};

/// Shown when a submission cannot reach the backend or its reply cannot be read
pub const SUBMIT_FAILURE_MESSAGE: &str =
    "There was a problem creating your account. Please try again.";
/// Shown when an admin login fails without a server-provided message
pub const LOGIN_FAILURE_MESSAGE: &str = "Please check your credentials and try again.";
/// Shown when a CSV import fails without a server-provided message
pub const IMPORT_FAILURE_MESSAGE: &str = "An error occurred during import";
/// Shown when a move operation fails without a server-provided message
pub const MOVE_FAILURE_MESSAGE: &str = "An error occurred while moving users";
/// Shown when an authentication test fails without a server-provided message
pub const AUTH_TEST_FAILURE_MESSAGE: &str = "An error occurred during authentication test";

/// Client for the registration backend API
pub struct BackendClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid backend URL: {base_url}"))?;
        Ok(Self {
            http_client: reqwest::Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Invalid backend endpoint: {path}"))
    }

    async fn post_json<T: serde::Serialize>(
        &self,
        path: &str,
        body: &T,
        failure_message: &'static str,
    ) -> Result<(StatusCode, String)> {
        let url = self.endpoint(path)?;
        let response = self
            .http_client
            .post(url)
            .json(body)
            .send()
            .await
            .context(failure_message)?;
        let status = response.status();
        let body = response.text().await.context(failure_message)?;
        Ok((status, body))
    }
}

#[async_trait]
impl BackendClientTrait for BackendClient {
    async fn create_ad_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse> {
        tracing::debug!("Submitting registration for {}", request.username);
        let (status, body) = self
            .post_json("/api/create-ad-user", &request, SUBMIT_FAILURE_MESSAGE)
            .await?;
        let response = interpret_create_response(status, &body)?;
        if let Some(user_id) = &response.user_id {
            tracing::info!("Created ad user {} ({user_id})", request.username);
        }
        Ok(response)
    }

    async fn admin_login(&self, username: &str, password: &str) -> Result<()> {
        tracing::debug!("Logging in admin {username}");
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let (status, body) = self
            .post_json("/api/admin/login", &request, LOGIN_FAILURE_MESSAGE)
            .await?;
        interpret_admin_response(status, &body, "Authentication failed")
    }

    async fn import_users(&self, users: Vec<CsvUserPayload>) -> Result<()> {
        tracing::debug!("Importing {} users", users.len());
        let request = ImportUsersRequest { users };
        let (status, body) = self
            .post_json("/api/admin/import-users", &request, IMPORT_FAILURE_MESSAGE)
            .await?;
        interpret_admin_response(status, &body, "Import failed")
    }

    async fn move_users(&self, usernames: Vec<String>, target_ou: &str) -> Result<()> {
        tracing::debug!("Moving {} users to {target_ou}", usernames.len());
        let request = MoveUsersRequest {
            users: usernames,
            target_ou: target_ou.to_string(),
        };
        let (status, body) = self
            .post_json("/api/admin/move-users", &request, MOVE_FAILURE_MESSAGE)
            .await?;
        interpret_admin_response(status, &body, "Move operation failed")
    }

    async fn test_auth(
        &self,
        username: &str,
        password: &str,
        domain: &str,
    ) -> Result<TestAuthResponse> {
        tracing::debug!("Testing credentials for {username}@{domain}");
        let request = TestAuthRequest {
            username: username.to_string(),
            password: password.to_string(),
            domain: domain.to_string(),
        };
        let (status, body) = self
            .post_json("/api/admin/test-auth", &request, AUTH_TEST_FAILURE_MESSAGE)
            .await?;
        interpret_admin_response(status, &body, "Authentication test failed")?;
        serde_json::from_str(&body).context(AUTH_TEST_FAILURE_MESSAGE)
    }
}

/// Turn a create-user reply into a result. Non-success statuses and
/// `success: false` bodies become errors carrying the server's message.
fn interpret_create_response(status: StatusCode, body: &str) -> Result<CreateUserResponse> {
    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|error| error.message)
            .unwrap_or_else(|| "Failed to create user".to_string());
        anyhow::bail!(message);
    }
    let response: CreateUserResponse =
        serde_json::from_str(body).context(SUBMIT_FAILURE_MESSAGE)?;
    if !response.success {
        let message = response
            .message
            .unwrap_or_else(|| "Failed to create user".to_string());
        anyhow::bail!(message);
    }
    Ok(response)
}

/// Shared non-success handling for the admin endpoints
fn interpret_admin_response(status: StatusCode, body: &str, fallback: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|error| error.message)
        .unwrap_or_else(|| fallback.to_string());
    anyhow::bail!(message)
}
