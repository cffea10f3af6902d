//! Domain layer - Core business entities and logic
//!
//! Contains the user entity, the password value object and the identity
//! claim carried by sessions.

pub mod password;
pub mod user;

pub use password::Password;
pub use user::{SessionUser, User};
