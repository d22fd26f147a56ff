//! Application services for navigation and sessions.

pub mod auth_guard;
pub mod route_table;
pub mod session_service;

pub use auth_guard::AuthGuard;
pub use route_table::{DEFAULT_REDIRECT_LIMIT, Navigation, RouteTable};
pub use session_service::{IssuedSession, SessionService};
