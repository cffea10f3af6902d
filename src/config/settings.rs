//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use tower_sessions::cookie::Key;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_STATIC_DIR,
    MIN_SESSION_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Deployment environment, selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> AppResult<Self> {
        match value.map(str::trim) {
            None | Some("") | Some("production") => Ok(Environment::Production),
            Some("development") => Ok(Environment::Development),
            Some(other) => Err(AppError::config(format!(
                "APP_ENV must be 'development' or 'production', got '{}'",
                other
            ))),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub environment: Environment,
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub cookie_secure: bool,
    pub static_dir: PathBuf,
    session_key: Key,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cookie_secure", &self.cookie_secure)
            .field("static_dir", &self.static_dir)
            .field("session_key", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// # Errors
    /// Fails when production settings are missing or malformed, so the
    /// server refuses to start instead of running with a weak secret.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::parse(lookup("APP_ENV").as_deref())?;
        let is_dev = environment == Environment::Development;

        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => url,
            _ if is_dev => DEFAULT_DATABASE_URL.to_string(),
            _ => return Err(AppError::config("DATABASE_URL must be set in production")),
        };

        let session_key = match lookup("SESSION_SECRET") {
            Some(secret) if !secret.trim().is_empty() => Self::session_key_from(&secret)?,
            _ if is_dev => {
                tracing::warn!(
                    "SESSION_SECRET not set, using a random key; sessions will not survive restarts"
                );
                Key::generate()
            }
            _ => {
                return Err(AppError::config(
                    "SESSION_SECRET environment variable must be set in production",
                ))
            }
        };

        let server_port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| AppError::config(format!("PORT is not a valid port: '{}'", port)))?,
            None => DEFAULT_SERVER_PORT,
        };

        let cookie_secure = match lookup("SESSION_COOKIE_SECURE") {
            Some(flag) => parse_flag(&flag).ok_or_else(|| {
                AppError::config(format!("SESSION_COOKIE_SECURE must be a boolean, got '{}'", flag))
            })?,
            None => !is_dev,
        };

        Ok(Self {
            environment,
            database_url,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port,
            cookie_secure,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            session_key,
        })
    }

    fn session_key_from(secret: &str) -> AppResult<Key> {
        if secret.len() < MIN_SESSION_SECRET_LENGTH {
            return Err(AppError::config(format!(
                "SESSION_SECRET must be at least {} bytes long",
                MIN_SESSION_SECRET_LENGTH
            )));
        }

        Key::try_from(secret.as_bytes())
            .map_err(|e| AppError::config(format!("SESSION_SECRET is unusable: {}", e)))
    }

    /// Key used to sign session cookies.
    pub fn session_key(&self) -> Key {
        self.session_key.clone()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
