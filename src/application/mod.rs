//! Application layer: route resolution and session handling.
//!
//! Services consume domain traits and expose a small API to the web layer
//! and the CLI.
//!
//! # Contents
//!
//! - [`services::route_table::RouteTable`] - First-match-wins resolver with guards
//! - [`services::session_service::SessionService`] - Access-token login and session checks
//! - [`services::auth_guard::AuthGuard`] - [`crate::domain::guard::Guard`] backed by sessions
//! - [`route_config`] - The declared dashboard route table

pub mod route_config;
pub mod services;
