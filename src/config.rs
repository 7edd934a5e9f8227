// src/config.rs
// =============================================================================
// Where the analytical backend lives.
//
// By default we talk to the public ClickHouse playground as the read-only
// "explorer" user. Both values can be overridden through environment
// variables (or a .env file), which is also how tests point the executor at
// a local server.
// =============================================================================

use url::Url;

use crate::error::{FinderError, Result};

/// Public ClickHouse playground that hosts the `github_events` dataset.
pub const DEFAULT_ENDPOINT: &str = "https://play.clickhouse.com/";

/// Read-only user accepted by the playground.
pub const DEFAULT_USER: &str = "explorer";

const ENDPOINT_VAR: &str = "STARRED_FINDER_ENDPOINT";
const USER_VAR: &str = "STARRED_FINDER_USER";

/// Endpoint configuration handed to the request executor.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    /// URL the query is POSTed to
    pub endpoint: String,
    /// Sent as the `user` query parameter to identify the caller
    pub user: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user: DEFAULT_USER.to_string(),
        }
    }
}

impl BackendConfig {
    /// Build a config from explicit values, validating the endpoint.
    pub fn new(endpoint: impl Into<String>, user: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        let user = user.into();

        validate_endpoint(&endpoint)?;
        if user.trim().is_empty() {
            return Err(FinderError::InvalidParameter(
                "backend user must not be empty".to_string(),
            ));
        }

        Ok(Self { endpoint, user })
    }

    /// Load configuration from environment variables.
    ///
    /// `STARRED_FINDER_ENDPOINT` and `STARRED_FINDER_USER` override the
    /// playground defaults. A `.env` file in the working directory is read
    /// first if one exists.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // ignore missing .env

        let endpoint =
            std::env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let user = std::env::var(USER_VAR).unwrap_or_else(|_| DEFAULT_USER.to_string());

        Self::new(endpoint, user)
    }

    /// Query-string parameters sent with every request.
    pub fn request_params(&self) -> Vec<(&'static str, String)> {
        vec![("user", self.user.clone())]
    }
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint).map_err(|e| {
        FinderError::InvalidParameter(format!("invalid endpoint '{}': {}", endpoint, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FinderError::InvalidParameter(format!(
            "endpoint must use http or https, got '{}'",
            other
        ))),
    }
}
