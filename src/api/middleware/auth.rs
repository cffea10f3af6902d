//! Session authentication gate.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::api::session;
use crate::config::LOGIN_PATH;

/// Authenticated user taken from the session claim
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Uuid,
}

/// Login gate for protected routes.
///
/// Continues with a `CurrentUser` in the request extensions when the
/// session holds an identity claim, otherwise redirects to the login page.
pub async fn require_login(session: Session, mut request: Request, next: Next) -> Response {
    match session::current_user(&session).await {
        Ok(Some(claim)) => {
            request
                .extensions_mut()
                .insert(CurrentUser { id: claim.id });
            next.run(request).await
        }
        Ok(None) => Redirect::to(LOGIN_PATH).into_response(),
        Err(e) => {
            tracing::warn!("Unreadable session treated as anonymous: {}", e);
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}
