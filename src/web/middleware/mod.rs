//! Web-specific middleware and extractors.

pub mod session_cookie;
pub mod tracing;

pub use session_cookie::SessionCookie;
