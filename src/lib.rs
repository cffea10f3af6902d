//! Painel - session-authenticated web application
//!
//! Registers users, authenticates them against Argon2 password hashes and
//! gates a private panel behind a server-side session.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Startup configuration and constants
//! - **domain**: User entity, password value object, session claim
//! - **services**: Registration and login use cases
//! - **infra**: Database connection, migrations and repositories
//! - **api**: HTTP handlers, session wiring, login gate and routes
//! - **views**: HTML page templates
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod views;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, SessionUser, User};
pub use errors::{AppError, AppResult};
