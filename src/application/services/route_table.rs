//! Route table resolution service.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::{
    Decision, GuardVerdict, NavigationRequest, RouteEntry, RouteTarget, normalize_path,
};
use crate::error::{AppError, NavigationError, RouteConfigError};

/// Redirect hops [`RouteTable::navigate`] follows before giving up.
pub const DEFAULT_REDIRECT_LIMIT: usize = 4;

/// Ordered, immutable set of route entries.
///
/// Built once at startup and shared behind an `Arc`. Resolution is
/// first-match-wins in declaration order; guards on the matched entry run
/// left-to-right and the first rejection wins.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    redirect_limit: usize,
}

/// Terminal outcome of [`RouteTable::navigate`] with the redirect chain that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Normalized paths visited, starting with the requested one.
    pub chain: Vec<String>,
    /// Never [`Decision::Redirect`].
    pub decision: Decision,
}

impl Navigation {
    /// The path whose entry produced the terminal decision.
    pub fn final_path(&self) -> &str {
        self.chain.last().map(String::as_str).unwrap_or_default()
    }
}

impl RouteTable {
    /// Validates `entries` and builds a table.
    ///
    /// # Errors
    ///
    /// Returns [`RouteConfigError`] if:
    /// - there is not exactly one root (`""`) entry, or the root is not a redirect
    /// - two entries share a path
    /// - a redirect targets a path that has no entry
    /// - a redirect entry carries guards, which would never run
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteConfigError> {
        let roots: Vec<&RouteEntry> = entries.iter().filter(|e| e.is_root()).collect();
        if roots.len() != 1 {
            return Err(RouteConfigError::RootCount(roots.len()));
        }
        if !matches!(roots[0].target(), RouteTarget::Redirect { .. }) {
            return Err(RouteConfigError::RootNotRedirect);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.path()) {
                return Err(RouteConfigError::DuplicatePath(entry.path().to_string()));
            }
        }

        for entry in &entries {
            let RouteTarget::Redirect { to } = entry.target() else {
                continue;
            };
            if !seen.contains(to.as_str()) {
                return Err(RouteConfigError::UnknownRedirectTarget {
                    from: entry.path().to_string(),
                    to: to.clone(),
                });
            }
            if !entry.guards().is_empty() {
                return Err(RouteConfigError::GuardedRedirect {
                    path: entry.path().to_string(),
                });
            }
        }

        Ok(Self {
            entries,
            redirect_limit: DEFAULT_REDIRECT_LIMIT,
        })
    }

    /// Overrides how many redirects [`Self::navigate`] follows.
    ///
    /// # Errors
    ///
    /// Returns [`RouteConfigError::ZeroRedirectLimit`] for `0`.
    pub fn with_redirect_limit(mut self, limit: usize) -> Result<Self, RouteConfigError> {
        if limit == 0 {
            return Err(RouteConfigError::ZeroRedirectLimit);
        }
        self.redirect_limit = limit;
        Ok(self)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn redirect_limit(&self) -> usize {
        self.redirect_limit
    }

    /// Resolves a single navigation.
    ///
    /// Does not follow redirects; see [`Self::navigate`] for that.
    ///
    /// # Errors
    ///
    /// A guard's own error is returned unchanged. Unmatched paths and
    /// rejections are not errors.
    pub async fn resolve(&self, request: &NavigationRequest) -> Result<Decision, AppError> {
        let path = normalize_path(&request.path);

        let Some(entry) = self.entries.iter().find(|e| e.matches(path)) else {
            tracing::debug!(path, "no route matched");
            return Ok(Decision::NotFound);
        };

        let view = match entry.target() {
            RouteTarget::Redirect { to } => {
                tracing::debug!(path, to = %to, "route redirects");
                return Ok(Decision::Redirect(to.clone()));
            }
            RouteTarget::View(view) => *view,
        };

        for (index, guard) in entry.guards().iter().enumerate() {
            match guard.check(request).await {
                Ok(GuardVerdict::Approve) => {}
                Ok(GuardVerdict::Reject { fallback }) => {
                    let fallback = normalize_path(&fallback).to_string();
                    tracing::info!(path, guard = index, fallback = %fallback, "navigation denied");
                    return Ok(Decision::Denied(fallback));
                }
                Err(e) => {
                    tracing::warn!(path, guard = index, error = %e, "guard failed");
                    return Err(e);
                }
            }
        }

        tracing::debug!(path, view = %view, "route activated");
        Ok(Decision::Activate(view))
    }

    /// Resolves `request`, following redirects until a terminal decision.
    ///
    /// # Errors
    ///
    /// - [`NavigationError::RedirectLimit`] when more than
    ///   [`Self::redirect_limit`] redirects are needed
    /// - [`NavigationError::Guard`] when a guard fails
    pub async fn navigate(&self, request: &NavigationRequest) -> Result<Navigation, NavigationError> {
        let mut current = request.redirected_to(normalize_path(&request.path));
        let mut chain = vec![current.path.clone()];

        loop {
            match self.resolve(&current).await? {
                Decision::Redirect(to) => {
                    if chain.len() > self.redirect_limit {
                        return Err(NavigationError::RedirectLimit {
                            path: chain[0].clone(),
                            limit: self.redirect_limit,
                        });
                    }
                    chain.push(to.clone());
                    current = current.redirected_to(to);
                }
                decision => return Ok(Navigation { chain, decision }),
            }
        }
    }
}
