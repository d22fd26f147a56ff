//! Repository trait for dashboard sessions.

use crate::domain::entities::Session;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for session storage.
///
/// Sessions are keyed by the HMAC of their id, never by the raw id.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemorySessionRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a session, replacing any session with the same hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, session: Session) -> Result<(), AppError>;

    /// Finds a session by the hash of its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find(&self, id_hash: &str) -> Result<Option<Session>, AppError>;

    /// Removes a session. Returns `true` if one was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn remove(&self, id_hash: &str) -> Result<bool, AppError>;

    /// Removes every session expired at `now` and returns how many were dropped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError>;

    /// Number of stored sessions, expired ones included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<usize, AppError>;
}
