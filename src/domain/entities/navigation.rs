//! Navigation request: what a guard sees when asked to approve a path.

/// A requested path together with the caller's session credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: String,
    pub session_token: Option<String>,
}

impl NavigationRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            session_token: None,
        }
    }

    pub fn with_session(mut self, token: Option<String>) -> Self {
        self.session_token = token;
        self
    }

    /// Same credentials, different path. Used when following redirects.
    pub fn redirected_to(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            session_token: self.session_token.clone(),
        }
    }
}
