//! End-to-end tests of the HTTP surface: pages, registration, login,
//! logout and the login gate on the panel.

mod common;

use axum::http::{header::CONTENT_TYPE, StatusCode};
use sea_orm::EntityTrait;

use common::*;
use painel::config::{MSG_INVALID_CREDENTIALS, MSG_MISSING_CREDENTIALS, MSG_REGISTRATION_FAILED};
use painel::infra::repositories::entities::user::Entity as UserEntity;

// =============================================================================
// Public pages
// =============================================================================

#[tokio::test]
async fn test_public_pages_render() {
    let (app, _db) = test_app().await;

    for (path, marker) in [
        ("/", "Bem-vindo"),
        ("/register", r#"action="/register""#),
        ("/login", r#"action="/login""#),
    ] {
        let response = send(&app, get(path, None)).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {}", path);

        let content_type = response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let body = body_text(response).await;
        assert!(body.contains(marker), "GET {} missing {}", path, marker);
    }
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let (app, _db) = test_app().await;

    let response = send(&app, get("/css/style.css", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let missing = send(&app, get("/css/missing.css", None)).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_reports_database() {
    let (app, _db) = test_app().await;

    let response = send(&app, get("/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"]["status"], "healthy");
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_creates_one_hashed_row() {
    let (app, db) = test_app().await;

    let response = send(&app, post_form("/register", "username=alice&password=secret1", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/login"));

    assert_eq!(count_users(&db, "alice").await, 1);
    let stored = UserEntity::find().one(&db).await.unwrap().unwrap();
    assert_eq!(stored.username, "alice");
    assert_ne!(stored.password, "secret1");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let (app, db) = test_app().await;

    let first = send(&app, post_form("/register", "username=alice&password=secret1", None)).await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);

    let second = send(&app, post_form("/register", "username=alice&password=other", None)).await;
    assert_eq!(second.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(location(&second).is_none());
    assert_eq!(body_text(second).await, MSG_REGISTRATION_FAILED);

    assert_eq!(count_users(&db, "alice").await, 1);
}

#[tokio::test]
async fn test_register_requires_both_fields() {
    let (app, db) = test_app().await;

    for body in [
        "username=&password=secret1",
        "username=alice&password=",
        "username=alice",
        "password=secret1",
        "",
    ] {
        let response = send(&app, post_form("/register", body, None)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {:?}", body);
        assert_eq!(body_text(response).await, MSG_MISSING_CREDENTIALS);
    }

    let total = UserEntity::find().all(&db).await.unwrap().len();
    assert_eq!(total, 0);
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_scenario() {
    let (app, _db) = test_app().await;

    let registered = send(&app, post_form("/register", "username=alice&password=secret1", None)).await;
    assert_eq!(location(&registered).as_deref(), Some("/login"));

    let ok = send(&app, post_form("/login", "username=alice&password=secret1", None)).await;
    assert_eq!(ok.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&ok).as_deref(), Some("/painel"));
    assert!(session_cookie(&ok).is_some());

    let wrong = send(&app, post_form("/login", "username=alice&password=wrong", None)).await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&wrong).is_none());
    assert_eq!(body_text(wrong).await, MSG_INVALID_CREDENTIALS);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (app, _db) = test_app().await;
    send(&app, post_form("/register", "username=alice&password=secret1", None)).await;

    let wrong_password = send(&app, post_form("/login", "username=alice&password=wrong", None)).await;
    let unknown_user = send(&app, post_form("/login", "username=bob&password=secret1", None)).await;

    assert_eq!(wrong_password.status(), unknown_user.status());
    assert_eq!(
        wrong_password.headers().get(CONTENT_TYPE),
        unknown_user.headers().get(CONTENT_TYPE)
    );
    assert_eq!(body_text(wrong_password).await, body_text(unknown_user).await);
}

#[tokio::test]
async fn test_login_with_missing_fields_is_invalid() {
    let (app, _db) = test_app().await;

    let response = send(&app, post_form("/login", "", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(response).await, MSG_INVALID_CREDENTIALS);
}

// =============================================================================
// Panel and login gate
// =============================================================================

#[tokio::test]
async fn test_painel_requires_login() {
    let (app, _db) = test_app().await;

    let response = send(&app, get("/painel", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/login"));
}

#[tokio::test]
async fn test_painel_renders_for_session_user() {
    let (app, _db) = test_app().await;
    let cookie = register_and_login(&app, "alice", "secret1").await;

    let response = send(&app, get("/painel", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Painel"));
    assert!(body.contains("alice"));
}

#[tokio::test]
async fn test_public_pages_reflect_session() {
    let (app, _db) = test_app().await;
    let cookie = register_and_login(&app, "alice", "secret1").await;

    let body = body_text(send(&app, get("/", Some(&cookie))).await).await;
    assert!(body.contains(r#"href="/logout""#));

    let anonymous = body_text(send(&app, get("/", None)).await).await;
    assert!(!anonymous.contains(r#"href="/logout""#));
}

#[tokio::test]
async fn test_tampered_cookie_is_rejected() {
    let (app, _db) = test_app().await;
    let cookie = register_and_login(&app, "alice", "secret1").await;

    let tampered = format!("{}x", cookie);
    let response = send(&app, get("/painel", Some(&tampered))).await;
    assert_eq!(location(&response).as_deref(), Some("/login"));
}

// =============================================================================
// Logout
// =============================================================================

#[tokio::test]
async fn test_logout_ends_session() {
    let (app, _db) = test_app().await;
    let cookie = register_and_login(&app, "alice", "secret1").await;

    let response = send(&app, get("/logout", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/"));

    // Replaying the old cookie must not grant access
    let after = send(&app, get("/painel", Some(&cookie))).await;
    assert_eq!(after.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&after).as_deref(), Some("/login"));
}

#[tokio::test]
async fn test_logout_without_session_redirects_home() {
    let (app, _db) = test_app().await;

    let response = send(&app, get("/logout", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/"));
}
