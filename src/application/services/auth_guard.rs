//! Session-backed guard protecting dashboard views.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::services::SessionService;
use crate::domain::entities::{GuardVerdict, NavigationRequest};
use crate::domain::guard::Guard;
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

/// Approves navigations that carry a live session.
///
/// - no session token: reject to `fallback`
/// - unknown or expired session: reject to `fallback`
/// - storage failure: returned as an error
pub struct AuthGuard<R: SessionRepository> {
    sessions: Arc<SessionService<R>>,
    fallback: String,
}

impl<R: SessionRepository> AuthGuard<R> {
    pub fn new(sessions: Arc<SessionService<R>>, fallback: impl Into<String>) -> Self {
        Self {
            sessions,
            fallback: fallback.into(),
        }
    }
}

#[async_trait]
impl<R: SessionRepository> Guard for AuthGuard<R> {
    async fn check(&self, request: &NavigationRequest) -> Result<GuardVerdict, AppError> {
        let Some(token) = request.session_token.as_deref() else {
            tracing::debug!(path = %request.path, "no session presented");
            return Ok(GuardVerdict::reject(self.fallback.as_str()));
        };

        match self.sessions.authenticate(token).await {
            Ok(session) => {
                tracing::debug!(path = %request.path, label = %session.label, "session accepted");
                Ok(GuardVerdict::Approve)
            }
            Err(e) if e.is_unauthorized() => Ok(GuardVerdict::reject(self.fallback.as_str())),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::session_service::hash_secret;
    use crate::domain::repositories::MockSessionRepository;
    use crate::infrastructure::persistence::InMemorySessionRepository;
    use chrono::Duration;
    use serde_json::json;

    const SECRET: &str = "guard-secret";

    fn sessions<R: SessionRepository>(repo: R) -> Arc<SessionService<R>> {
        Arc::new(SessionService::new(
            Arc::new(repo),
            SECRET.to_string(),
            [hash_secret(SECRET, "access")],
            Duration::hours(1),
        ))
    }

    #[tokio::test]
    async fn test_rejects_without_session() {
        let guard = AuthGuard::new(sessions(InMemorySessionRepository::new()), "login");

        let verdict = guard.check(&NavigationRequest::new("dashboard")).await.unwrap();

        assert_eq!(verdict, GuardVerdict::reject("login"));
    }

    #[tokio::test]
    async fn test_approves_live_session() {
        let sessions = sessions(InMemorySessionRepository::new());
        let issued = sessions.login("access").await.unwrap();
        let guard = AuthGuard::new(sessions, "login");

        let request = NavigationRequest::new("dashboard").with_session(Some(issued.id));
        let verdict = guard.check(&request).await.unwrap();

        assert_eq!(verdict, GuardVerdict::Approve);
    }

    #[tokio::test]
    async fn test_rejects_unknown_session() {
        let guard = AuthGuard::new(sessions(InMemorySessionRepository::new()), "login");

        let request = NavigationRequest::new("accounts").with_session(Some("forged".to_string()));
        let verdict = guard.check(&request).await.unwrap();

        assert_eq!(verdict, GuardVerdict::reject("login"));
    }

    #[tokio::test]
    async fn test_rejects_after_logout() {
        let sessions = sessions(InMemorySessionRepository::new());
        let issued = sessions.login("access").await.unwrap();
        sessions.logout(&issued.id).await.unwrap();
        let guard = AuthGuard::new(sessions, "login");

        let request = NavigationRequest::new("dashboard").with_session(Some(issued.id));
        let verdict = guard.check(&request).await.unwrap();

        assert_eq!(verdict, GuardVerdict::reject("login"));
    }

    #[tokio::test]
    async fn test_propagates_storage_failure() {
        let mut repo = MockSessionRepository::new();
        repo.expect_find()
            .times(1)
            .returning(|_| Err(AppError::internal("Storage error", json!({}))));
        let guard = AuthGuard::new(sessions(repo), "login");

        let request = NavigationRequest::new("dashboard").with_session(Some("sid".to_string()));
        let err = guard.check(&request).await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }
}
