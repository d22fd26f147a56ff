//! In-memory implementation of session repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::Session;
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

/// Process-local session store keyed by session id hash.
///
/// Sessions do not survive a restart; users log in again.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: Session) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .insert(session.id_hash.clone(), session);
        Ok(())
    }

    async fn find(&self, id_hash: &str) -> Result<Option<Session>, AppError> {
        Ok(self.sessions.read().await.get(id_hash).cloned())
    }

    async fn remove(&self, id_hash: &str) -> Result<bool, AppError> {
        Ok(self.sessions.write().await.remove(id_hash).is_some())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));
        Ok(before - sessions.len())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.sessions.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(hash: &str, expires_at: DateTime<Utc>) -> Session {
        Session {
            id_hash: hash.to_string(),
            label: "test".to_string(),
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[tokio::test]
    async fn test_insert_find_remove() {
        let repo = InMemorySessionRepository::new();
        let expires = Utc::now() + Duration::hours(1);

        repo.insert(session("abc", expires)).await.unwrap();

        let found = repo.find("abc").await.unwrap().unwrap();
        assert_eq!(found.expires_at, expires);
        assert!(repo.find("missing").await.unwrap().is_none());

        assert!(repo.remove("abc").await.unwrap());
        assert!(!repo.remove("abc").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_purge_expired_keeps_live_sessions() {
        let repo = InMemorySessionRepository::new();
        let now = Utc::now();

        repo.insert(session("old", now - Duration::minutes(5))).await.unwrap();
        repo.insert(session("edge", now)).await.unwrap();
        repo.insert(session("live", now + Duration::minutes(5))).await.unwrap();

        let removed = repo.purge_expired(now).await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(repo.find("live").await.unwrap().is_some());
    }
}
