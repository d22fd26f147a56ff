//! # Dashboard Router
//!
//! Guarded route table for a browser dashboard, and an Axum host that
//! serves it.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Route entries, views, decisions, and the guard contract
//! - **Application Layer** ([`application`]) - Route resolution, sessions, the auth guard
//! - **Infrastructure Layer** ([`infrastructure`]) - Session storage
//! - **Web Layer** ([`web`]) - Navigation dispatcher, login/logout, HTML views
//!
//! ## Route Table
//!
//! | path        | target                 | guard      |
//! |-------------|------------------------|------------|
//! | `""`        | redirect to `login`    | none       |
//! | `login`     | Login view             | none       |
//! | `dashboard` | Dashboard view         | auth guard |
//! | `accounts`  | Accounts view          | auth guard |
//!
//! Resolution is first-match-wins. A guarded view is activated only when
//! every guard approves; otherwise the navigation is denied and the browser
//! is sent to the guard's fallback (the login page).
//!
//! ```rust,ignore
//! let table = dashboard_routes_with_guard(auth_guard)?;
//! match table.resolve(&NavigationRequest::new("/dashboard")).await? {
//!     Decision::Activate(view) => render(view),
//!     Decision::Redirect(to) | Decision::Denied(to) => redirect(to),
//!     Decision::NotFound => not_found(),
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export SESSION_SIGNING_SECRET="change-me"
//! cargo run --bin admin -- token generate
//! export ACCESS_TOKEN_HASHES="<hash printed above>"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::route_config::{dashboard_routes, dashboard_routes_with_guard};
    pub use crate::application::services::{AuthGuard, Navigation, RouteTable, SessionService};
    pub use crate::domain::entities::{
        Decision, GuardVerdict, NavigationRequest, PathMatch, RouteEntry, View,
    };
    pub use crate::domain::guard::Guard;
    pub use crate::error::{AppError, NavigationError, RouteConfigError};
    pub use crate::state::AppState;
}
