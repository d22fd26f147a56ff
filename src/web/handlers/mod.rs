//! HTTP handlers for the dashboard host.

mod health;
mod navigate;
mod session;

pub use health::{HealthResponse, health_handler};
pub use navigate::navigate_handler;
pub use session::{LoginForm, login_handler, logout_handler};
