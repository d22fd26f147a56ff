//! View registry: renders each [`View`] as an HTML page.
//!
//! Templates live in `templates/` and share `base.html`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::entities::View;

/// Login form posting an access token to `/session`.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "accounts.html")]
pub struct AccountsTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

/// Renders an activated view with `200 OK`.
pub fn render(view: View) -> Response {
    match view {
        View::Login => LoginTemplate { error: None }.into_response(),
        View::Dashboard => DashboardTemplate {}.into_response(),
        View::Accounts => AccountsTemplate {}.into_response(),
    }
}

/// Login page after a failed attempt, with `401 Unauthorized`.
pub fn login_failed(message: impl Into<String>) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        LoginTemplate {
            error: Some(message.into()),
        },
    )
        .into_response()
}

/// Not-found page for `path`, with `404 Not Found`.
pub fn not_found(path: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            path: path.to_string(),
        },
    )
        .into_response()
}
