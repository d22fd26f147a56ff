//! Login and logout handlers.

use axum::{
    Form,
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::application::route_config::{HOME_PATH, LOGIN_PATH};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::SessionCookie;
use crate::web::middleware::session_cookie::{clear_cookie, issue_cookie};
use crate::web::views;

use super::navigate::location;

/// Login form body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub token: String,
}

/// Exchanges an access token for a session cookie.
///
/// # Endpoint
///
/// `POST /session` with form field `token`
///
/// # Responses
///
/// - Valid token: `303` to `/dashboard` with the `dashboard_session` cookie set
/// - Invalid token: login page with an error, `401 Unauthorized`
///
/// # Errors
///
/// Session storage failures are returned as [`AppError`].
pub async fn login_handler(
    State(st): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match st.sessions.login(&form.token).await {
        Ok(issued) => {
            let cookie = issue_cookie(
                &issued.id,
                st.sessions.ttl().num_seconds(),
                st.web.cookie_secure,
            );
            Ok((
                AppendHeaders([(SET_COOKIE, cookie)]),
                Redirect::to(&location(HOME_PATH)),
            )
                .into_response())
        }
        Err(e) if e.is_unauthorized() => Ok(views::login_failed("Invalid access token")),
        Err(e) => Err(e),
    }
}

/// Ends the current session and clears the cookie.
///
/// # Endpoint
///
/// `POST /logout`
///
/// Always redirects to `/login`, with or without a session.
///
/// # Errors
///
/// Session storage failures are returned as [`AppError`].
pub async fn logout_handler(
    State(st): State<AppState>,
    SessionCookie(session): SessionCookie,
) -> Result<Response, AppError> {
    if let Some(id) = session {
        st.sessions.logout(&id).await?;
    }

    Ok((
        AppendHeaders([(SET_COOKIE, clear_cookie(st.web.cookie_secure))]),
        Redirect::to(&location(LOGIN_PATH)),
    )
        .into_response())
}
