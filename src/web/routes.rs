//! Dashboard host route configuration.

use crate::state::AppState;
use crate::web::handlers::{health_handler, login_handler, logout_handler, navigate_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Navigation routes handed to the route table.
///
/// # Endpoints
///
/// - `GET /` - Entry navigation (root redirect)
/// - `GET /{*path}` - Any other navigation
pub fn navigation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(navigate_handler))
        .route("/{*path}", get(navigate_handler))
}

/// Session and service routes that bypass the route table.
///
/// # Endpoints
///
/// - `POST /session` - Log in with an access token
/// - `POST /logout` - End the session
/// - `GET /health` - Health check
///
/// `GET /session` and `GET /logout` are still navigations and go through
/// the route table like any other path.
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/session", post(login_handler).get(navigate_handler))
        .route("/logout", post(logout_handler).get(navigate_handler))
        .route("/health", get(health_handler))
}
