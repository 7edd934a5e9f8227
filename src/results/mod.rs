// src/results/mod.rs
// =============================================================================
// This module turns backend responses into something a human (or jq) can read.
//
// Submodules:
// - parse: Splits the tab-separated response into rows
// - format: Renders rows as a table or as JSON records
// =============================================================================

mod format;
mod parse;

pub use format::{
    convert_and_format_results, print_results, FormattedOutput, OutputFormat, RepoRecord,
};
pub use parse::{process_response, ResultRow};
