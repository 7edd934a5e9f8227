// src/backend/http.rs
// =============================================================================
// This module POSTs a query to the ClickHouse HTTP interface.
//
// Key functionality:
// - The query text goes in the request body
// - The caller identifies itself with a query-string parameter (?user=...)
// - Every request has a fixed 10 second timeout
// - Whatever status the server answers with is returned as-is; deciding
//   whether it is a failure is the parser's job
//
// Only transport problems (connection refused, DNS, timeout) become errors.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{QueryBackend, RawResponse};
use crate::config::BackendConfig;
use crate::error::Result;

/// How long we wait for the backend before giving up.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Sends one query to the backend
//
// Parameters:
//   client: reqwest HTTP client
//   query: the SQL text, sent as the request body
//   endpoint: URL to POST to
//   params: query-string parameters (e.g. [("user", "explorer")])
//
// Returns: RawResponse with status and body, or FinderError::Network
pub async fn make_request(
    client: &Client,
    query: &str,
    endpoint: &str,
    params: &[(&str, String)],
) -> Result<RawResponse> {
    let response = client
        .post(endpoint)
        .query(params)
        .body(query.to_string())
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await?;

    let status_code = response.status().as_u16();
    let body = response.bytes().await?;

    tracing::debug!(status = status_code, bytes = body.len(), "backend responded");

    Ok(RawResponse {
        status_code,
        body: body.to_vec(),
    })
}

/// QueryBackend that talks to a real HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Use an already-built client (e.g. one with custom proxy settings).
    pub fn with_client(client: Client, config: BackendConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl QueryBackend for HttpBackend {
    async fn execute(&self, query: &str) -> Result<RawResponse> {
        tracing::info!(endpoint = %self.config.endpoint, "sending query");
        make_request(
            &self.client,
            query,
            &self.config.endpoint,
            &self.config.request_params(),
        )
        .await
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. How does `?` turn a reqwest::Error into our error type?
//    - FinderError::Network is declared with #[from] reqwest::Error
//    - thiserror generates the From impl, and ? calls it for us
//
// 2. Why return the body as bytes instead of a String?
//    - The parser decides how to decode it
//    - An error page might not even be valid UTF-8
//
// 3. Why #[async_trait]?
//    - Traits with async methods need a little help to be used as
//      `&dyn QueryBackend`; the macro boxes the returned future
// -----------------------------------------------------------------------------
