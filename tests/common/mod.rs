#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::HeaderValue;
use axum_test::TestServer;
use dashboard_router::application::services::RouteTable;
use dashboard_router::application::services::session_service::hash_secret;
use dashboard_router::config::Config;
use dashboard_router::domain::entities::{GuardVerdict, NavigationRequest};
use dashboard_router::domain::guard::Guard;
use dashboard_router::error::AppError;
use dashboard_router::routes::router;
use dashboard_router::server::build_state;
use dashboard_router::state::{AppState, WebSettings};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub const SECRET: &str = "integration-secret";
pub const ACCESS_TOKEN: &str = "integration-access-token";

/// Guard whose answer can be flipped between calls; counts consultations.
#[derive(Default)]
pub struct SwitchGuard {
    authenticated: AtomicBool,
    calls: AtomicUsize,
}

impl SwitchGuard {
    pub fn new(authenticated: bool) -> Arc<Self> {
        Arc::new(Self {
            authenticated: AtomicBool::new(authenticated),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn set(&self, authenticated: bool) {
        self.authenticated.store(authenticated, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Guard for SwitchGuard {
    async fn check(&self, _request: &NavigationRequest) -> Result<GuardVerdict, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.authenticated.load(Ordering::SeqCst) {
            Ok(GuardVerdict::Approve)
        } else {
            Ok(GuardVerdict::reject("login"))
        }
    }
}

/// Guard that always fails, as if its session store were down.
pub struct FailingGuard;

#[async_trait]
impl Guard for FailingGuard {
    async fn check(&self, _request: &NavigationRequest) -> Result<GuardVerdict, AppError> {
        Err(AppError::internal(
            "Session store unavailable",
            serde_json::json!({}),
        ))
    }
}

pub fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        session_signing_secret: SECRET.to_string(),
        access_token_hashes: vec![hash_secret(SECRET, ACCESS_TOKEN)],
        session_ttl_seconds: 3600,
        session_sweep_interval_seconds: 60,
        session_cookie_secure: false,
        max_redirects: 4,
        not_found_redirect: None,
    }
}

pub fn create_test_state(config: &Config) -> AppState {
    build_state(config).unwrap()
}

pub fn create_test_server(config: &Config) -> (TestServer, AppState) {
    let state = create_test_state(config);
    let server = TestServer::new(router(state.clone())).unwrap();
    (server, state)
}

/// Serves `table` in place of the declared one, keeping the configured sessions.
pub fn create_test_server_with_table(table: RouteTable) -> TestServer {
    let base = create_test_state(&test_config());
    let state = AppState::new(Arc::new(table), base.sessions, WebSettings::default());
    TestServer::new(router(state)).unwrap()
}

pub fn session_cookie(session_id: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("dashboard_session={session_id}")).unwrap()
}
