//! HTTP request handlers.

pub mod auth_handler;
pub mod pages;

pub use auth_handler::{login, logout, painel, register, LoginForm, RegisterForm};
pub use pages::{home, login_page, register_page};
