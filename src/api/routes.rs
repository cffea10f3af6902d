//! Application route configuration.

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::Json,
    routing::get,
    Router,
};
use sea_orm::DbErr;
use serde::Serialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::handlers::{home, login, login_page, logout, painel, register, register_page};
use super::middleware::require_login;
use super::session::with_sessions;
use super::AppState;
use crate::config::{
    HEALTH_PATH, HOME_PATH, LOGIN_PATH, LOGOUT_PATH, PAINEL_PATH, REGISTER_PATH,
};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    // Private routes (require a signed-in session)
    let protected = Router::new()
        .route(PAINEL_PATH, get(painel))
        .route_layer(middleware::from_fn(require_login));

    let router = Router::new()
        // Public pages and form handlers
        .route(HOME_PATH, get(home))
        .route(REGISTER_PATH, get(register_page).post(register))
        .route(LOGIN_PATH, get(login_page).post(login))
        .route(LOGOUT_PATH, get(logout))
        .route(HEALTH_PATH, get(health))
        .merge(protected)
        // Anything else is looked up in the static asset directory
        .fallback_service(ServeDir::new(&config.static_dir));

    with_sessions(router, &config)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: ServiceStatus,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    health_response(state.database.ping().await)
}

/// Store failures are logged; the client only sees the status.
fn health_response(ping: Result<(), DbErr>) -> (StatusCode, Json<HealthResponse>) {
    match ping {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: ServiceStatus { status: "healthy" },
            }),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    database: ServiceStatus {
                        status: "unhealthy",
                    },
                }),
            )
        }
    }
}
