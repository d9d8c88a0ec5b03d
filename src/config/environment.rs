// ABOUTME: Environment configuration for the RunFuel client
// ABOUTME: Parses the API base URL, timeouts, user agent, and session file location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based client configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `RUNFUEL_API_URL` | `http://localhost:8000` |
//! | `RUNFUEL_REQUEST_TIMEOUT_SECS` | `30` |
//! | `RUNFUEL_CONNECT_TIMEOUT_SECS` | `10` |
//! | `RUNFUEL_SESSION_FILE` | `<data dir>/runfuel/runfuel-auth.json` |
//! | `RUNFUEL_USER_AGENT` | `runfuel-client/<version>` |

use runfuel_core::constants::{network, storage};
use runfuel_core::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Environment variable holding the backend base URL
pub const API_URL_VAR: &str = "RUNFUEL_API_URL";
/// Environment variable holding the request timeout in seconds
pub const REQUEST_TIMEOUT_VAR: &str = "RUNFUEL_REQUEST_TIMEOUT_SECS";
/// Environment variable holding the connect timeout in seconds
pub const CONNECT_TIMEOUT_VAR: &str = "RUNFUEL_CONNECT_TIMEOUT_SECS";
/// Environment variable overriding the session file path
pub const SESSION_FILE_VAR: &str = "RUNFUEL_SESSION_FILE";
/// Environment variable overriding the user agent
pub const USER_AGENT_VAR: &str = "RUNFUEL_USER_AGENT";

/// Settings needed to talk to the backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without the `/api/v1` prefix
    pub api_url: Url,
    /// Default timeout applied to every request
    pub request_timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Where the session is persisted; `None` keeps it in memory only
    pub session_file: Option<PathBuf>,
    /// User agent sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration with default timeouts for the given backend
    #[must_use]
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            request_timeout: Duration::from_secs(network::DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(network::DEFAULT_CONNECT_TIMEOUT_SECS),
            session_file: default_session_file(),
            user_agent: network::DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a variable is set to an unusable value
    pub fn from_env() -> AppResult<Self> {
        let api_url = parse_api_url(&env_var_or(API_URL_VAR, network::DEFAULT_API_URL))?;
        let request_timeout =
            parse_timeout(REQUEST_TIMEOUT_VAR, network::DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let connect_timeout =
            parse_timeout(CONNECT_TIMEOUT_VAR, network::DEFAULT_CONNECT_TIMEOUT_SECS)?;

        let session_file = match env::var(SESSION_FILE_VAR) {
            Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => default_session_file(),
        };

        let config = Self {
            api_url,
            request_timeout,
            connect_timeout,
            session_file,
            user_agent: env_var_or(USER_AGENT_VAR, network::DEFAULT_USER_AGENT),
        };
        debug!(summary = %config.summary(), "client configuration loaded");
        Ok(config)
    }

    /// Replace the backend URL (command-line override)
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the URL is invalid
    pub fn with_api_url(mut self, raw: &str) -> AppResult<Self> {
        self.api_url = parse_api_url(raw)?;
        Ok(self)
    }

    /// Keep the session in memory only
    #[must_use]
    pub fn without_persistence(mut self) -> Self {
        self.session_file = None;
        self
    }

    /// Absolute URL for an API path such as `/api/v1/users/me`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the joined URL cannot be parsed
    pub fn endpoint_url(&self, path: &str) -> AppResult<Url> {
        join_path(&self.api_url, path)
    }

    /// One-line description for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "api_url={} request_timeout={}s connect_timeout={}s session={}",
            self.api_url,
            self.request_timeout.as_secs(),
            self.connect_timeout.as_secs(),
            self.session_file
                .as_ref()
                .map_or_else(|| "memory".to_owned(), |path| path.display().to_string()),
        )
    }
}

/// `<platform data dir>/runfuel/runfuel-auth.json`
#[must_use]
pub fn default_session_file() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| {
        dir.join(storage::APP_DIR)
            .join(format!("{}.json", storage::SESSION_ENTRY_NAME))
    })
}

/// Parse and check a backend base URL
///
/// # Errors
///
/// Returns a `ConfigError` for malformed URLs or schemes other than http(s)
pub fn parse_api_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::config(format!("Invalid API URL '{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config(format!(
            "API URL must use http or https, got '{}'",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(AppError::config(format!("API URL '{raw}' cannot be a base URL")));
    }
    Ok(url)
}

/// Append an absolute API path to the base URL, keeping any base path prefix
///
/// # Errors
///
/// Returns a `ConfigError` if the result cannot be parsed
pub fn join_path(base: &Url, path: &str) -> AppResult<Url> {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| AppError::config(format!("Invalid endpoint '{path}': {e}")))
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_timeout(key: &str, default_secs: u64) -> AppResult<Duration> {
    let Ok(raw) = env::var(key) else {
        return Ok(Duration::from_secs(default_secs));
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(AppError::config(format!("{key} must be greater than zero"))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path_keeps_prefix() {
        let base = Url::parse("https://api.example.com/runfuel/").unwrap();
        let url = join_path(&base, "/api/v1/users/me").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/runfuel/api/v1/users/me");
    }

    #[test]
    fn test_join_path_without_prefix() {
        let base = Url::parse("http://localhost:8000").unwrap();
        let url = join_path(&base, "/health").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/health");
    }

    #[test]
    fn test_parse_api_url_rejects_other_schemes() {
        assert!(parse_api_url("ftp://example.com").is_err());
        assert!(parse_api_url("not a url").is_err());
        assert!(parse_api_url("https://example.com").is_ok());
    }
}
