//! Access guard contract consulted before a view is activated.

use async_trait::async_trait;

use crate::domain::entities::{GuardVerdict, NavigationRequest};
use crate::error::AppError;

/// Predicate consulted by the route table before activating a guarded view.
///
/// Guards may suspend (for example to look up a session), so resolution is
/// asynchronous. An `Err` is a failure of the guard itself and is handed back
/// to the caller untouched; a refusal is `Ok(GuardVerdict::Reject { .. })`.
///
/// # Implementations
///
/// - [`crate::application::services::AuthGuard`] - session cookie check
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Guard: Send + Sync {
    /// Decides whether `request` may activate the matched view.
    ///
    /// # Errors
    ///
    /// Returns the guard's own dependency failure (e.g. [`AppError::Internal`]).
    async fn check(&self, request: &NavigationRequest) -> Result<GuardVerdict, AppError>;
}
