//! Public page handlers.

use axum::response::Html;
use tower_sessions::Session;

use crate::api::session;
use crate::views;

/// GET /
pub async fn home(session: Session) -> Html<String> {
    Html(views::home(session::is_signed_in(&session).await))
}

/// GET /register
pub async fn register_page(session: Session) -> Html<String> {
    Html(views::register(session::is_signed_in(&session).await))
}

/// GET /login
pub async fn login_page(session: Session) -> Html<String> {
    Html(views::login(session::is_signed_in(&session).await))
}
