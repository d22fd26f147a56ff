//! Session entity backing the dashboard auth guard.

use chrono::{DateTime, Utc};

/// An authenticated browser session.
///
/// Only the HMAC of the session id is kept; the raw id lives in the
/// client's cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id_hash: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Returns true once `now` has reached the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
