// src/lib.rs
// =============================================================================
// starred-repo-finder: find repositories starred by the stargazers of a
// given GitHub repository, using the public ClickHouse github_events dataset.
//
// Modules, in the order data flows through them:
// - query: builds the SQL text from user parameters
// - backend: POSTs the query to the ClickHouse HTTP endpoint
// - results: parses the tab-separated response and prints it
// - finder: runs the whole pipeline once
//
// main.rs only adds argument parsing, logging setup and exit codes.
// =============================================================================

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod finder;
pub mod query;
pub mod results;

pub use error::{FinderError, Result};
