//! Session management on top of `tower-sessions`.
//!
//! Sessions live in the in-memory store and are identified by a signed
//! cookie. The only value the application keeps in them is the
//! [`SessionUser`] claim under [`SESSION_USER_KEY`].

use axum::Router;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::config::{Config, SESSION_COOKIE_NAME, SESSION_USER_KEY};
use crate::domain::{SessionUser, User};
use crate::errors::AppResult;

/// Wrap a router with the session manager configured from `config`.
pub fn with_sessions<S>(router: Router<S>, config: &Config) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_path("/")
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(config.cookie_secure)
        .with_expiry(Expiry::OnSessionEnd)
        .with_signed(config.session_key());

    router.layer(layer)
}

/// Identity claim of the signed-in user, if any.
pub async fn current_user(session: &Session) -> AppResult<Option<SessionUser>> {
    Ok(session.get::<SessionUser>(SESSION_USER_KEY).await?)
}

/// Whether the session is signed in. Unreadable sessions count as anonymous.
pub async fn is_signed_in(session: &Session) -> bool {
    match current_user(session).await {
        Ok(claim) => claim.is_some(),
        Err(e) => {
            tracing::debug!("Ignoring unreadable session: {}", e);
            false
        }
    }
}

/// Bind the session to `user`, issuing a fresh session ID.
pub async fn sign_in(session: &Session, user: &User) -> AppResult<()> {
    session.cycle_id().await?;
    session
        .insert(SESSION_USER_KEY, SessionUser::from(user))
        .await?;
    Ok(())
}

/// Destroy the session and its store record.
///
/// The data is cleared before the store delete, so the cookie is removed even
/// when the delete fails.
pub async fn sign_out(session: &Session) -> AppResult<()> {
    session.flush().await?;
    Ok(())
}
