//! Navigation dispatcher: turns route table decisions into HTTP responses.

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::entities::{Decision, NavigationRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::SessionCookie;
use crate::web::views;

/// Browser location for a route path.
pub(crate) fn location(path: &str) -> String {
    format!("/{path}")
}

/// Resolves the requested path against the route table.
///
/// # Endpoint
///
/// `GET /` and `GET /{*path}`
///
/// # Responses
///
/// - Redirect entry or guard denial: `303 See Other` to the target path
/// - Activated view: the view's page, `200 OK`
/// - No match: `303` to `NOT_FOUND_REDIRECT` when configured, otherwise a `404` page
///
/// # Errors
///
/// Guard failures (e.g. session store errors) are returned as [`AppError`].
pub async fn navigate_handler(
    State(st): State<AppState>,
    SessionCookie(session): SessionCookie,
    uri: Uri,
) -> Result<Response, AppError> {
    let request = NavigationRequest::new(uri.path()).with_session(session);

    let response = match st.route_table.resolve(&request).await? {
        Decision::Redirect(to) | Decision::Denied(to) => {
            Redirect::to(&location(&to)).into_response()
        }
        Decision::Activate(view) => views::render(view),
        Decision::NotFound => match &st.web.not_found_redirect {
            Some(to) => Redirect::to(&location(to)).into_response(),
            None => views::not_found(uri.path()),
        },
    };

    Ok(response)
}
