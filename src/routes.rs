//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Health check (JSON)
//! - `POST /session`  - Log in, sets the session cookie
//! - `POST /logout`   - Log out, clears the session cookie
//! - `GET  /{*path}`  - Navigation resolved by the route table
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::middleware::tracing as trace;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with state and tracing, without path normalization.
///
/// Integration tests drive this directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::service_routes())
        .merge(web::routes::navigation_routes())
        .with_state(state)
        .layer(trace::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
