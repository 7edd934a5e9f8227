// src/backend/mod.rs
// =============================================================================
// This module sends queries to the analytical backend.
//
// Submodules:
// - http: Makes the actual HTTP POST with reqwest
//
// The QueryBackend trait is the seam between the finder and the network:
// the real program uses HttpBackend, tests plug in a fake that returns a
// canned response.
// =============================================================================

mod http;

use async_trait::async_trait;

use crate::error::Result;

pub use http::{make_request, HttpBackend, REQUEST_TIMEOUT};

/// Status code and body of a backend response, exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status_code: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status_code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }
}

/// Something that can run a query and hand back the raw response.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    /// Execute `query` once. Non-200 responses are returned, not raised;
    /// only transport failures are errors.
    async fn execute(&self, query: &str) -> Result<RawResponse>;
}
