//! Health check handler.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub routes: usize,
    pub sessions: usize,
}

/// Reports liveness with the route count and stored session count.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the session store cannot be read.
pub async fn health_handler(State(st): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    Ok(Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        routes: st.route_table.entries().len(),
        sessions: st.sessions.active_sessions().await?,
    }))
}
