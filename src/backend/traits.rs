//! Trait abstraction for the backend client to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;

use super::types::{CreateUserRequest, CreateUserResponse, CsvUserPayload, TestAuthResponse};

/// Trait for backend API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendClientTrait: Send + Sync {
    /// Submit a registration form to create an AD user
    async fn create_ad_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse>;

    /// Authenticate an administrator
    async fn admin_login(&self, username: &str, password: &str) -> Result<()>;

    /// Import a batch of users parsed from CSV
    async fn import_users(&self, users: Vec<CsvUserPayload>) -> Result<()>;

    /// Move users to another organizational unit
    async fn move_users(&self, usernames: Vec<String>, target_ou: &str) -> Result<()>;

    /// Test a user's credentials against the directory
    async fn test_auth(&self, username: &str, password: &str, domain: &str)
        -> Result<TestAuthResponse>;
}
