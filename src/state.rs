//! Shared state injected into every HTTP handler.

use std::sync::Arc;

use crate::application::services::{RouteTable, SessionService};
use crate::infrastructure::persistence::InMemorySessionRepository;

pub type Sessions = SessionService<InMemorySessionRepository>;

/// Cookie and fallback settings used by the web layer.
#[derive(Debug, Clone, Default)]
pub struct WebSettings {
    pub cookie_secure: bool,
    pub not_found_redirect: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub route_table: Arc<RouteTable>,
    pub sessions: Arc<Sessions>,
    pub web: WebSettings,
}

impl AppState {
    pub fn new(route_table: Arc<RouteTable>, sessions: Arc<Sessions>, web: WebSettings) -> Self {
        Self {
            route_table,
            sessions,
            web,
        }
    }
}
