//! View entity: an opaque identifier for a renderable dashboard page.

use serde::Serialize;
use std::fmt;

/// A page the route table can activate.
///
/// The route table never looks inside a view; rendering belongs to the
/// view registry in [`crate::web::views`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Login,
    Dashboard,
    Accounts,
}

impl View {
    /// Stable lowercase name, used in logs and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Login => "login",
            View::Dashboard => "dashboard",
            View::Accounts => "accounts",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_names() {
        assert_eq!(View::Login.to_string(), "login");
        assert_eq!(View::Dashboard.as_str(), "dashboard");
        assert_eq!(
            serde_json::to_value(View::Accounts).unwrap(),
            serde_json::json!("accounts")
        );
    }
}
