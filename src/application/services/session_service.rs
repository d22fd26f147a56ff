//! Session service for dashboard login and session validation.

use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::Session;
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const TOKEN_LEN: usize = 48;

/// Hashes `value` with HMAC-SHA256 keyed by `signing_secret`.
///
/// Returns a 64-character lowercase hex-encoded MAC. Used for both access
/// tokens and session ids so neither is ever stored in the clear.
pub fn hash_secret(signing_secret: &str, value: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(value.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Generates a random 48-character alphanumeric token.
pub fn generate_token() -> String {
    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_CHARSET.len());
            TOKEN_CHARSET[idx] as char
        })
        .collect()
}

/// A freshly issued session together with the raw id for the client cookie.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub id: String,
    pub session: Session,
}

/// Service for exchanging access tokens for sessions and validating them.
///
/// Access tokens are configured as HMAC hashes; a login presents the raw
/// token, which is hashed with the same secret and looked up. Sessions are
/// stored under the HMAC of their id.
pub struct SessionService<R: SessionRepository> {
    repository: Arc<R>,
    signing_secret: String,
    access_token_hashes: HashSet<String>,
    ttl: Duration,
}

impl<R: SessionRepository> SessionService<R> {
    /// Creates a new session service.
    ///
    /// # Arguments
    ///
    /// - `repository` - session store
    /// - `signing_secret` - HMAC key; must match the one used to hash `access_token_hashes`
    /// - `access_token_hashes` - accepted access tokens, hex-encoded HMACs (case-insensitive)
    /// - `ttl` - session lifetime
    pub fn new(
        repository: Arc<R>,
        signing_secret: String,
        access_token_hashes: impl IntoIterator<Item = String>,
        ttl: Duration,
    ) -> Self {
        Self {
            repository,
            signing_secret,
            access_token_hashes: access_token_hashes
                .into_iter()
                .map(|h| h.to_ascii_lowercase())
                .collect(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn hash(&self, value: &str) -> String {
        hash_secret(&self.signing_secret, value)
    }

    /// Exchanges a raw access token for a new session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is empty or not configured.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn login(&self, access_token: &str) -> Result<IssuedSession, AppError> {
        let access_token = access_token.trim();
        if access_token.is_empty() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Access token is empty"}),
            ));
        }

        let token_hash = self.hash(access_token);
        if !self.access_token_hashes.contains(&token_hash) {
            tracing::info!("login rejected: unknown access token");
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid access token"}),
            ));
        }

        let id = generate_token();
        let now = Utc::now();
        let session = Session {
            id_hash: self.hash(&id),
            label: format!("token:{}", &token_hash[..8]),
            created_at: now,
            expires_at: now + self.ttl,
        };

        self.repository.insert(session.clone()).await?;
        tracing::info!(label = %session.label, expires_at = %session.expires_at, "session issued");

        Ok(IssuedSession { id, session })
    }

    /// Validates a raw session id.
    ///
    /// Expired sessions are removed on sight.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the session is unknown or expired.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn authenticate(&self, session_id: &str) -> Result<Session, AppError> {
        let id_hash = self.hash(session_id);

        let Some(session) = self.repository.find(&id_hash).await? else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Unknown session"}),
            ));
        };

        if session.is_expired_at(Utc::now()) {
            if let Err(e) = self.repository.remove(&id_hash).await {
                tracing::warn!("Failed to remove expired session: {}", e);
            }
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Session expired"}),
            ));
        }

        Ok(session)
    }

    /// Ends a session. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn logout(&self, session_id: &str) -> Result<(), AppError> {
        if self.repository.remove(&self.hash(session_id)).await? {
            tracing::info!("session ended");
        }
        Ok(())
    }

    /// Drops expired sessions and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn purge_expired(&self) -> Result<usize, AppError> {
        self.repository.purge_expired(Utc::now()).await
    }

    /// Number of stored sessions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn active_sessions(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
