//! HTTP server initialization and runtime setup.
//!
//! Wires the session store, auth guard and route table into [`AppState`],
//! spawns the session sweeper and runs the Axum server until a shutdown signal.

use crate::application::route_config::{LOGIN_PATH, dashboard_routes_with_guard};
use crate::application::services::{AuthGuard, SessionService};
use crate::config::Config;
use crate::domain::guard::Guard;
use crate::infrastructure::persistence::InMemorySessionRepository;
use crate::routes::app_router;
use crate::state::{AppState, Sessions, WebSettings};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the shared state from configuration.
///
/// # Errors
///
/// Returns an error if the route table fails validation or
/// `NOT_FOUND_REDIRECT` names a path that is not in the table.
pub fn build_state(config: &Config) -> Result<AppState> {
    let ttl_seconds = i64::try_from(config.session_ttl_seconds)
        .context("SESSION_TTL_SECONDS is too large")?;
    let ttl = chrono::Duration::try_seconds(ttl_seconds)
        .context("SESSION_TTL_SECONDS is out of range")?;

    let sessions: Arc<Sessions> = Arc::new(SessionService::new(
        Arc::new(InMemorySessionRepository::new()),
        config.session_signing_secret.clone(),
        config.access_token_hashes.clone(),
        ttl,
    ));

    let auth_guard: Arc<dyn Guard> = Arc::new(AuthGuard::new(sessions.clone(), LOGIN_PATH));
    let route_table = dashboard_routes_with_guard(auth_guard)
        .and_then(|table| table.with_redirect_limit(config.max_redirects))
        .context("Invalid route table")?;

    if let Some(path) = &config.not_found_redirect
        && !route_table.entries().iter().any(|e| e.path() == path)
    {
        anyhow::bail!("NOT_FOUND_REDIRECT '{}' is not a declared route", path);
    }

    Ok(AppState::new(
        Arc::new(route_table),
        sessions,
        WebSettings {
            cookie_secure: config.session_cookie_secure,
            not_found_redirect: config.not_found_redirect.clone(),
        },
    ))
}

/// Periodically drops expired sessions.
pub async fn run_session_sweeper(sessions: Arc<Sessions>, every: Duration) {
    let mut ticker = tokio::time::interval(every);
    ticker.tick().await;

    loop {
        ticker.tick().await;
        match sessions.purge_expired().await {
            Ok(0) => {}
            Ok(removed) => tracing::debug!(removed, "expired sessions purged"),
            Err(e) => tracing::warn!("Session sweep failed: {}", e),
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails (see [`build_state`])
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!(routes = state.route_table.entries().len(), "Route table loaded");

    tokio::spawn(run_session_sweeper(
        state.sessions.clone(),
        Duration::from_secs(config.session_sweep_interval_seconds),
    ));
    tracing::info!("Session sweeper started");

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            listen_addr: "127.0.0.1:0".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            session_signing_secret: "secret".to_string(),
            access_token_hashes: Vec::new(),
            session_ttl_seconds: 60,
            session_sweep_interval_seconds: 60,
            session_cookie_secure: false,
            max_redirects: 2,
            not_found_redirect: None,
        }
    }

    #[test]
    fn test_build_state_applies_config() {
        let state = build_state(&config()).unwrap();

        assert_eq!(state.route_table.entries().len(), 4);
        assert_eq!(state.route_table.redirect_limit(), 2);
        assert_eq!(state.sessions.ttl(), chrono::Duration::seconds(60));
    }

    #[test]
    fn test_build_state_rejects_unknown_not_found_redirect() {
        let mut config = config();
        config.not_found_redirect = Some("nowhere".to_string());
        assert!(build_state(&config).is_err());

        config.not_found_redirect = Some("login".to_string());
        assert!(build_state(&config).is_ok());
    }
}
