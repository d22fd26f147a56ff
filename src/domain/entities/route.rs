//! Route entry: one path-to-target binding in the route table.

use std::fmt;
use std::sync::Arc;

use crate::domain::guard::Guard;

use super::view::View;

/// How a requested path is compared with an entry's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMatch {
    /// The requested path must equal the entry path.
    #[default]
    Full,
    /// The requested path's segments must start with the entry's segments.
    /// An empty entry path matches every request.
    Prefix,
}

/// What a matched entry does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    Redirect { to: String },
    View(View),
}

/// A single binding in the route table.
#[derive(Clone)]
pub struct RouteEntry {
    path: String,
    target: RouteTarget,
    path_match: PathMatch,
    guards: Vec<Arc<dyn Guard>>,
}

impl RouteEntry {
    /// Creates a redirect entry. Both paths are normalized.
    pub fn redirect(path: &str, to: &str, path_match: PathMatch) -> Self {
        Self {
            path: normalize_path(path).to_string(),
            target: RouteTarget::Redirect {
                to: normalize_path(to).to_string(),
            },
            path_match,
            guards: Vec::new(),
        }
    }

    /// Creates an unguarded, full-match view entry.
    pub fn view(path: &str, view: View) -> Self {
        Self {
            path: normalize_path(path).to_string(),
            target: RouteTarget::View(view),
            path_match: PathMatch::Full,
            guards: Vec::new(),
        }
    }

    /// Appends a guard. Guards run in the order they were added.
    ///
    /// Only view entries may be guarded; [`RouteTable::new`] rejects a
    /// guarded redirect.
    ///
    /// [`RouteTable::new`]: crate::application::services::RouteTable::new
    pub fn guarded_by(mut self, guard: Arc<dyn Guard>) -> Self {
        self.guards.push(guard);
        self
    }

    pub fn with_path_match(mut self, path_match: PathMatch) -> Self {
        self.path_match = path_match;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn target(&self) -> &RouteTarget {
        &self.target
    }

    pub fn path_match(&self) -> PathMatch {
        self.path_match
    }

    pub fn guards(&self) -> &[Arc<dyn Guard>] {
        &self.guards
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Tests an already normalized path against this entry.
    pub fn matches(&self, path: &str) -> bool {
        match self.path_match {
            PathMatch::Full => self.path == path,
            PathMatch::Prefix => {
                if self.path.is_empty() {
                    return true;
                }
                let mut requested = path.split('/');
                self.path
                    .split('/')
                    .all(|segment| requested.next() == Some(segment))
            }
        }
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("target", &self.target)
            .field("path_match", &self.path_match)
            .field("guards", &self.guards.len())
            .finish()
    }
}

/// Strips `?query` and `#fragment` and trims surrounding slashes.
///
/// `"/dashboard/?tab=2"` becomes `"dashboard"`; `"/"` becomes `""`.
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    raw[..end].trim_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path("/login"), "login");
        assert_eq!(normalize_path("dashboard/"), "dashboard");
        assert_eq!(normalize_path("/accounts?page=2"), "accounts");
        assert_eq!(normalize_path("/accounts#top"), "accounts");
        assert_eq!(normalize_path("/a/b/"), "a/b");
    }

    #[test]
    fn test_full_match_is_exact() {
        let entry = RouteEntry::view("dashboard", View::Dashboard);

        assert!(entry.matches("dashboard"));
        assert!(!entry.matches("dashboard/settings"));
        assert!(!entry.matches("dash"));
        assert!(!entry.matches(""));
    }

    #[test]
    fn test_root_full_redirect_matches_only_empty() {
        let entry = RouteEntry::redirect("", "login", PathMatch::Full);

        assert!(entry.is_root());
        assert!(entry.matches(""));
        assert!(!entry.matches("login"));
    }

    #[test]
    fn test_prefix_match_by_segment() {
        let entry =
            RouteEntry::view("accounts", View::Accounts).with_path_match(PathMatch::Prefix);

        assert!(entry.matches("accounts"));
        assert!(entry.matches("accounts/42"));
        assert!(!entry.matches("accounts-archive"));
        assert!(!entry.matches("dashboard"));
    }

    #[test]
    fn test_empty_prefix_matches_everything() {
        let entry = RouteEntry::redirect("", "login", PathMatch::Prefix);

        assert!(entry.matches(""));
        assert!(entry.matches("anything/at/all"));
    }

    #[test]
    fn test_constructors_normalize_paths() {
        let entry = RouteEntry::redirect("/", "/login/", PathMatch::Full);

        assert_eq!(entry.path(), "");
        assert_eq!(
            entry.target(),
            &RouteTarget::Redirect {
                to: "login".to_string()
            }
        );
    }
}
