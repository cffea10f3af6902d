//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, UserStore};
use crate::services::{AuthService, Authenticator};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Startup configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the default services over a database connection.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let auth_service = Arc::new(Authenticator::new(users));

        Self::new(auth_service, database, config)
    }

    /// Create new application state with manually injected services.
    pub fn new(auth_service: Arc<dyn AuthService>, database: Arc<Database>, config: Config) -> Self {
        Self {
            auth_service,
            database,
            config: Arc::new(config),
        }
    }
}
