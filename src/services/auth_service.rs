//! Authentication service - Registration and credential verification.
//!
//! Password hashing lives in the domain `Password` value object; this
//! service only orchestrates it with the user repository.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::MSG_MISSING_CREDENTIALS;
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user with a freshly hashed password
    async fn register(&self, username: String, password: String) -> AppResult<User>;

    /// Check a username/password pair.
    ///
    /// Unknown users and wrong passwords both yield `InvalidCredentials`.
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<User>;

    /// Load a user by ID (e.g. from a session claim)
    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>>;
}

/// Concrete implementation of AuthService over a user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, username: String, password: String) -> AppResult<User> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::validation(MSG_MISSING_CREDENTIALS));
        }

        let password_hash = Password::hash_blocking(password).await?.into_string();
        let user = self.users.create(username, password_hash).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self.users.find_by_username(username).await?;

        // Unknown users are checked against a dummy hash so both failure
        // paths take the same time.
        let stored = user.as_ref().map(|u| u.password.clone());
        let valid = Password::verify_blocking(stored, password.to_string()).await?;

        match user {
            Some(user) if valid => {
                tracing::info!(user_id = %user.id, username = %user.username, "Login succeeded");
                Ok(user)
            }
            _ => {
                tracing::warn!(username = %username, "Login rejected");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }
}
