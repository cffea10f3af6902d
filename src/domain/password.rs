//! Password value object - Domain layer password handling.
//!
//! Wraps Argon2id hashing with a fixed work factor. Hashing and
//! verification are CPU-bound; async callers go through
//! [`Password::hash_blocking`] and [`Password::verify_blocking`], which run
//! on tokio's blocking pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use once_cell::sync::Lazy;

use crate::config::{ARGON2_ITERATIONS, ARGON2_MEMORY_KIB, ARGON2_PARALLELISM};
use crate::errors::{AppError, AppResult};

/// Hash of a throwaway password, verified against when the username is
/// unknown so both login failure paths cost the same.
static DUMMY_HASH: Lazy<Option<Password>> =
    Lazy::new(|| Password::new("painel-dummy-password").ok());

/// Password value object holding an Argon2 PHC hash string.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text with a random salt.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored hash never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        match Self::verify_hash(plain_text, &self.hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!("Stored password hash is unusable: {}", e);
                false
            }
        }
    }

    /// Verify against the shared dummy hash. Always false.
    pub fn verify_dummy(plain_text: &str) -> bool {
        match DUMMY_HASH.as_ref() {
            Some(dummy) => {
                dummy.verify(plain_text);
                false
            }
            None => false,
        }
    }

    /// Hash on the blocking thread pool.
    pub async fn hash_blocking(plain_text: String) -> AppResult<Self> {
        tokio::task::spawn_blocking(move || Self::new(&plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Password hash task failed: {}", e)))?
    }

    /// Verify on the blocking thread pool. `None` checks the dummy hash.
    pub async fn verify_blocking(stored: Option<Password>, plain_text: String) -> AppResult<bool> {
        tokio::task::spawn_blocking(move || match stored {
            Some(password) => password.verify(&plain_text),
            None => Self::verify_dummy(&plain_text),
        })
        .await
        .map_err(|e| AppError::internal(format!("Password verify task failed: {}", e)))
    }

    fn hash(plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()?
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()?
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }

    /// Argon2id with the fixed work factor from configuration.
    fn argon2() -> AppResult<Argon2<'static>> {
        let params = Params::new(
            ARGON2_MEMORY_KIB,
            ARGON2_ITERATIONS,
            ARGON2_PARALLELISM,
            None,
        )
        .map_err(|e| AppError::internal(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}
