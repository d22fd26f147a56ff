//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export SESSION_SIGNING_SECRET="change-me"
//! export ACCESS_TOKEN_HASHES="$(cargo run --bin admin -- token generate --hash-only)"
//! ```
//!
//! ## Required Variables
//!
//! - `SESSION_SIGNING_SECRET` - HMAC key for access token and session id hashes
//!
//! ## Optional Variables
//!
//! - `ACCESS_TOKEN_HASHES` - Comma-separated HMAC hashes of accepted access tokens
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SESSION_TTL_SECONDS` - Session lifetime (default: 28800)
//! - `SESSION_SWEEP_INTERVAL_SECONDS` - Expired session purge interval (default: 300)
//! - `SESSION_COOKIE_SECURE` - Mark the session cookie `Secure` (default: false)
//! - `MAX_REDIRECTS` - Redirect hops followed per navigation (default: 4, max: 32)
//! - `NOT_FOUND_REDIRECT` - Route path to send unmatched navigations to (default: unset, 404 page)

use anyhow::{Context, Result};
use std::env;

use crate::application::services::DEFAULT_REDIRECT_LIMIT;
use crate::domain::entities::normalize_path;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// HMAC signing secret used to hash access tokens and session ids.
    /// Loaded from `SESSION_SIGNING_SECRET`. Must be non-empty.
    pub session_signing_secret: String,
    /// Accepted access tokens as lowercase hex HMAC-SHA256 digests.
    pub access_token_hashes: Vec<String>,
    pub session_ttl_seconds: u64,
    pub session_sweep_interval_seconds: u64,
    /// Adds `Secure` to the session cookie. Enable when served over HTTPS.
    pub session_cookie_secure: bool,
    pub max_redirects: usize,
    /// Normalized route path; `None` renders the not-found page instead.
    pub not_found_redirect: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SESSION_SIGNING_SECRET` is missing.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let session_signing_secret =
            env::var("SESSION_SIGNING_SECRET").context("SESSION_SIGNING_SECRET must be set")?;

        let access_token_hashes = env::var("ACCESS_TOKEN_HASHES")
            .map(|v| parse_hash_list(&v))
            .unwrap_or_default();

        let session_ttl_seconds = env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(28_800);

        let session_sweep_interval_seconds = env::var("SESSION_SWEEP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        let session_cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let max_redirects = env::var("MAX_REDIRECTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REDIRECT_LIMIT);

        let not_found_redirect = env::var("NOT_FOUND_REDIRECT")
            .ok()
            .map(|v| normalize_path(&v).to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            session_signing_secret,
            access_token_hashes,
            session_ttl_seconds,
            session_sweep_interval_seconds,
            session_cookie_secure,
            max_redirects,
            not_found_redirect,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - the signing secret is empty
    /// - an access token hash is not 64 hex characters
    /// - a TTL or interval is zero
    /// - `max_redirects` is outside `1..=32`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.session_signing_secret.is_empty() {
            anyhow::bail!("SESSION_SIGNING_SECRET must not be empty");
        }

        if let Some(bad) = self
            .access_token_hashes
            .iter()
            .find(|h| h.len() != 64 || !h.chars().all(|c| c.is_ascii_hexdigit()))
        {
            anyhow::bail!(
                "ACCESS_TOKEN_HASHES entries must be 64 hex characters, got '{}'",
                bad
            );
        }

        if self.session_ttl_seconds == 0 {
            anyhow::bail!("SESSION_TTL_SECONDS must be greater than 0");
        }

        if self.session_sweep_interval_seconds == 0 {
            anyhow::bail!("SESSION_SWEEP_INTERVAL_SECONDS must be greater than 0");
        }

        if self.max_redirects == 0 || self.max_redirects > 32 {
            anyhow::bail!(
                "MAX_REDIRECTS must be between 1 and 32, got {}",
                self.max_redirects
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Access tokens: {}", self.access_token_hashes.len());
        tracing::info!("  Session TTL: {}s", self.session_ttl_seconds);
        tracing::info!("  Secure cookie: {}", self.session_cookie_secure);
        tracing::info!("  Max redirects: {}", self.max_redirects);
        match &self.not_found_redirect {
            Some(path) => tracing::info!("  Not found: redirect to /{}", path),
            None => tracing::info!("  Not found: 404 page"),
        }

        if self.access_token_hashes.is_empty() {
            tracing::warn!("ACCESS_TOKEN_HASHES is empty; nobody can log in");
        }
    }
}

/// Splits a comma-separated hash list, dropping blanks and lowercasing entries.
fn parse_hash_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
