//! Backend client module for HTTP communication with the Flask API

mod client;
mod traits;
mod types;

pub use client::{
    BackendClient, AUTH_TEST_FAILURE_MESSAGE, IMPORT_FAILURE_MESSAGE, LOGIN_FAILURE_MESSAGE,
    MOVE_FAILURE_MESSAGE, SUBMIT_FAILURE_MESSAGE,
};
pub use traits::BackendClientTrait;
pub use types::{
    CreateUserRequest, CreateUserResponse, CsvUserPayload, TestAuthResponse,
};

#[cfg(test)]
pub use traits::MockBackendClientTrait;
