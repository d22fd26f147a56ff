//! Outcomes produced by guards and by route resolution.

use serde::Serialize;

use super::view::View;

/// Result of resolving one requested path against the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Decision {
    /// The matched entry redirects; the caller re-resolves the new path.
    Redirect(String),
    /// The matched view may be mounted.
    Activate(View),
    /// A guard rejected activation; the caller navigates to the fallback path.
    Denied(String),
    /// No entry matched the requested path.
    NotFound,
}

/// A single guard's answer for a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardVerdict {
    Approve,
    Reject { fallback: String },
}

impl GuardVerdict {
    pub fn reject(fallback: impl Into<String>) -> Self {
        Self::Reject {
            fallback: fallback.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_json_shape() {
        let json = serde_json::to_value(Decision::Activate(View::Dashboard)).unwrap();
        assert_eq!(json["kind"], "activate");
        assert_eq!(json["target"], "dashboard");

        let json = serde_json::to_value(Decision::NotFound).unwrap();
        assert_eq!(json["kind"], "not_found");
    }
}
