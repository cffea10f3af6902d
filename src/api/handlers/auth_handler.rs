//! Authentication handlers: registration, login, logout and the panel.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use serde::Deserialize;
use tower_sessions::Session;
use validator::Validate;

use crate::api::extractors::ValidatedForm;
use crate::api::middleware::CurrentUser;
use crate::api::session;
use crate::api::AppState;
use crate::config::{HOME_PATH, LOGIN_PATH, PAINEL_PATH};
use crate::errors::{AppError, AppResult};
use crate::views;

/// Registration form. Missing fields decode as empty strings.
#[derive(Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "Usuário e senha são obrigatórios."))]
    pub username: String,
    #[validate(length(min = 1, message = "Usuário e senha são obrigatórios."))]
    pub password: String,
}

/// Login form. Missing fields decode as empty strings.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<RegisterForm>,
) -> AppResult<Redirect> {
    state
        .auth_service
        .register(form.username, form.password)
        .await
        .map_err(AppError::during_registration)?;

    Ok(Redirect::to(LOGIN_PATH))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> AppResult<Redirect> {
    let user = state
        .auth_service
        .authenticate(&form.username, &form.password)
        .await
        .map_err(AppError::during_login)?;

    session::sign_in(&session, &user)
        .await
        .map_err(AppError::during_login)?;

    Ok(Redirect::to(PAINEL_PATH))
}

/// GET /logout
///
/// Teardown failures are logged and the client is redirected anyway.
pub async fn logout(session: Session) -> Redirect {
    match session::sign_out(&session).await {
        Ok(()) => tracing::info!("Session destroyed"),
        Err(e) => tracing::warn!("Failed to destroy session: {}", e),
    }

    Redirect::to(HOME_PATH)
}

/// GET /painel (behind `require_login`)
pub async fn painel(
    State(state): State<AppState>,
    session: Session,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Response> {
    match state.auth_service.find_user(current.id).await? {
        Some(user) => Ok(Html(views::painel(&user.username)).into_response()),
        None => {
            tracing::warn!(user_id = %current.id, "Session refers to a missing user");
            if let Err(e) = session::sign_out(&session).await {
                tracing::warn!("Failed to destroy session: {}", e);
            }
            Ok(Redirect::to(LOGIN_PATH).into_response())
        }
    }
}
