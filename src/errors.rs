//! Centralized error handling.
//!
//! Every handler returns an `AppResult`; the error kind is mapped to a
//! status and a plain-text message exactly once, in `IntoResponse`.
//! Internal details are logged and never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::{
    MSG_INTERNAL_ERROR, MSG_INVALID_CREDENTIALS, MSG_LOGIN_FAILED, MSG_REGISTRATION_FAILED,
};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("{0}")]
    Validation(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username already exists")]
    UsernameTaken,

    // Use-case wrappers: the source is logged, the client gets a fixed message
    #[error("Registration failed")]
    RegistrationFailed(#[source] Box<AppError>),

    #[error("Login failed")]
    LoginFailed(#[source] Box<AppError>),

    // External service errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    // Startup
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::RegistrationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::LoginFailed(_)
            | AppError::UsernameTaken
            | AppError::Database(_)
            | AppError::Session(_)
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidCredentials => MSG_INVALID_CREDENTIALS.to_string(),
            AppError::RegistrationFailed(source) => {
                match source.as_ref() {
                    AppError::UsernameTaken => {
                        tracing::warn!("Registration rejected: {}", source)
                    }
                    _ => tracing::error!("Registration failed: {}", source),
                }
                MSG_REGISTRATION_FAILED.to_string()
            }
            AppError::LoginFailed(source) => {
                tracing::error!("Login failed: {}", source);
                MSG_LOGIN_FAILED.to_string()
            }
            other => {
                tracing::error!("Request failed: {}", other);
                MSG_INTERNAL_ERROR.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, self.user_message()).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Attribute a failure to registration. Validation errors pass through.
    pub fn during_registration(self) -> Self {
        match self {
            AppError::Validation(_) | AppError::RegistrationFailed(_) => self,
            other => AppError::RegistrationFailed(Box::new(other)),
        }
    }

    /// Attribute a failure to login. Bad credentials pass through so that
    /// unknown users and wrong passwords keep producing the same response.
    pub fn during_login(self) -> Self {
        match self {
            AppError::InvalidCredentials | AppError::LoginFailed(_) => self,
            other => AppError::LoginFailed(Box::new(other)),
        }
    }
}
