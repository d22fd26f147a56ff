//! Core domain entities for dashboard navigation.
//!
//! Entities are plain data structures; resolution logic lives in
//! [`crate::application::services::RouteTable`].
//!
//! # Entity Types
//!
//! - [`RouteEntry`] - A path bound to a redirect or a view, with optional guards
//! - [`View`] - An opaque page identifier
//! - [`Decision`] / [`GuardVerdict`] - Resolution and guard outcomes
//! - [`NavigationRequest`] - A requested path plus session credentials
//! - [`Session`] - An authenticated browser session

pub mod decision;
pub mod navigation;
pub mod route;
pub mod session;
pub mod view;

pub use decision::{Decision, GuardVerdict};
pub use navigation::NavigationRequest;
pub use route::{PathMatch, RouteEntry, RouteTarget, normalize_path};
pub use session::Session;
pub use view::View;
