//! User domain entity and session identity claim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Password;

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: Password,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record
    pub fn new(id: Uuid, username: String, password: Password) -> Self {
        Self {
            id,
            username,
            password,
            created_at: Utc::now(),
        }
    }
}

/// Identity claim kept in the session.
///
/// Only the identifier is stored; anything else is fetched on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self { id: user.id }
    }
}
