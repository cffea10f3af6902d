//! Shared fixtures for integration tests.
//!
//! Each test gets its own in-memory SQLite database, migrated with the
//! application's `Migrator`, and a router wired exactly like production.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Request, Response,
    },
    Router,
};
use sea_orm::{ColumnTrait, ConnectOptions, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use tower::ServiceExt;

use painel::api::{create_router, AppState};
use painel::config::{Config, SESSION_COOKIE_NAME};
use painel::infra::repositories::entities::user::{self, Entity as UserEntity};
use painel::infra::Database;

/// Fresh migrated in-memory database.
pub async fn test_database() -> Arc<Database> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Arc::new(Database::connect_with(options).await.unwrap())
}

/// Development configuration with a fixed signing secret.
pub fn test_config() -> Config {
    let static_dir = format!("{}/public", env!("CARGO_MANIFEST_DIR"));
    Config::from_vars(move |name| match name {
        "APP_ENV" => Some("development".to_string()),
        "SESSION_SECRET" => Some("t".repeat(64)),
        "STATIC_DIR" => Some(static_dir.clone()),
        _ => None,
    })
    .unwrap()
}

/// Router plus a handle on its database.
pub async fn test_app() -> (Router, DatabaseConnection) {
    let db = test_database().await;
    let connection = db.get_connection();
    let app = create_router(AppState::from_config(db, test_config()));
    (app, connection)
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn location(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// `name=value` pair of the session cookie set by the response, if any.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    let prefix = format!("{}=", SESSION_COOKIE_NAME);
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|c| c.starts_with(&prefix))
        .and_then(|c| c.split(';').next())
        .map(str::to_string)
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn count_users(db: &DatabaseConnection, username: &str) -> u64 {
    UserEntity::find()
        .filter(user::Column::Username.eq(username))
        .count(db)
        .await
        .unwrap()
}

/// Register then log in, returning the session cookie.
pub async fn register_and_login(app: &Router, username: &str, password: &str) -> String {
    let credentials = format!("username={}&password={}", username, password);

    let registered = send(app, post_form("/register", &credentials, None)).await;
    assert_eq!(location(&registered).as_deref(), Some("/login"));

    let logged_in = send(app, post_form("/login", &credentials, None)).await;
    assert_eq!(location(&logged_in).as_deref(), Some("/painel"));

    session_cookie(&logged_in).expect("login sets a session cookie")
}
