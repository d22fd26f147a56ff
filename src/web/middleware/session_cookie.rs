//! Session cookie extraction and construction.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::COOKIE, request::Parts},
};
use std::convert::Infallible;

/// Name of the cookie carrying the raw session id.
pub const SESSION_COOKIE: &str = "dashboard_session";

/// The session id presented by the browser, if any.
///
/// Never rejects: a missing cookie is a normal, unauthenticated navigation,
/// and the route table's guards decide what that means.
///
/// # Cookie Parsing
///
/// Handles multiple `Cookie` headers and multiple pairs per header by:
/// - Splitting on semicolons
/// - Extracting the `dashboard_session` key-value pair
/// - Ignoring other cookies and empty values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookie(pub Option<String>);

impl<S> FromRequestParts<S> for SessionCookie
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(read_session_cookie(&parts.headers)))
    }
}

/// Finds the session id in the request's `Cookie` headers.
pub fn read_session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}

/// `Set-Cookie` value that stores a session id for `max_age_seconds`.
pub fn issue_cookie(session_id: &str, max_age_seconds: i64, secure: bool) -> String {
    format!(
        "{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_seconds}{}",
        if secure { "; Secure" } else { "" }
    )
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_cookie(secure: bool) -> String {
    issue_cookie("", 0, secure)
}
