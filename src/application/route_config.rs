//! Declared route table for the dashboard.
//!
//! | path        | target                       | guard      |
//! |-------------|------------------------------|------------|
//! | `""`        | redirect to `login`, full    | none       |
//! | `login`     | [`View::Login`]              | none       |
//! | `dashboard` | [`View::Dashboard`]          | auth guard |
//! | `accounts`  | [`View::Accounts`]           | auth guard |

use std::sync::Arc;

use crate::application::services::RouteTable;
use crate::domain::entities::{PathMatch, RouteEntry, View};
use crate::domain::guard::Guard;
use crate::error::RouteConfigError;

/// Path of the login view, also the fallback for rejected navigations.
pub const LOGIN_PATH: &str = "login";

/// Path the browser lands on after a successful login.
pub const HOME_PATH: &str = "dashboard";

/// Builds the dashboard table with a separate guard for each protected view.
///
/// # Errors
///
/// Never fails for the declared entries; the `Result` comes from
/// [`RouteTable::new`] validation.
pub fn dashboard_routes(
    dashboard_guard: Arc<dyn Guard>,
    accounts_guard: Arc<dyn Guard>,
) -> Result<RouteTable, RouteConfigError> {
    RouteTable::new(vec![
        RouteEntry::redirect("", LOGIN_PATH, PathMatch::Full),
        RouteEntry::view(LOGIN_PATH, View::Login),
        RouteEntry::view("dashboard", View::Dashboard).guarded_by(dashboard_guard),
        RouteEntry::view("accounts", View::Accounts).guarded_by(accounts_guard),
    ])
}

/// Builds the dashboard table with one guard shared by both protected views.
///
/// # Errors
///
/// See [`dashboard_routes`].
pub fn dashboard_routes_with_guard(guard: Arc<dyn Guard>) -> Result<RouteTable, RouteConfigError> {
    dashboard_routes(guard.clone(), guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockGuard;
    use crate::domain::entities::RouteTarget;

    #[test]
    fn test_declared_table_shape() {
        let table = dashboard_routes_with_guard(Arc::new(MockGuard::new())).unwrap();

        let summary: Vec<(&str, usize)> = table
            .entries()
            .iter()
            .map(|e| (e.path(), e.guards().len()))
            .collect();

        assert_eq!(
            summary,
            vec![("", 0), ("login", 0), ("dashboard", 1), ("accounts", 1)]
        );
        assert_eq!(
            table.entries()[0].target(),
            &RouteTarget::Redirect {
                to: "login".to_string()
            }
        );
        assert_eq!(table.entries()[0].path_match(), PathMatch::Full);
    }
}
