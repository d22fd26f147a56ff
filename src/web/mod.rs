//! Web layer hosting the route table in a browser.
//!
//! Acts as the navigation dispatcher: every page request is resolved by
//! [`crate::application::services::RouteTable`] and the decision is turned
//! into a redirect or a rendered view. Uses Askama templates for pages.
//!
//! # Modules
//!
//! - [`handlers`] - Navigation, login/logout and health handlers
//! - [`middleware`] - Session cookie extractor and request tracing
//! - [`routes`] - Route configuration
//! - [`views`] - View registry (templates per [`crate::domain::entities::View`])

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod views;
