// src/error.rs
// =============================================================================
// Error types for the finder.
//
// Every failure in the pipeline (bad input, network, backend, parsing,
// writing output) ends up as one of these variants and travels up to main.rs
// with the ? operator.
// =============================================================================

/// All error types produced by starred-repo-finder.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend returned HTTP {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("Malformed response line {line}: expected 4 tab-separated fields, got {fields}")]
    Parse { line: usize, fields: usize },

    #[error("Could not write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Could not serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FinderError>;
