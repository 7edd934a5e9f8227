// src/query/mod.rs
// =============================================================================
// This module turns user parameters into a ClickHouse query.
//
// Submodules:
// - builder: Validates parameters and assembles the SQL text
//
// The query runs against the public `github_events` table, which records
// every WatchEvent (star) and ForkEvent on GitHub.
// =============================================================================

mod builder;

pub use builder::{build_query, OrderBy, QueryParameters};
