// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single command:
//
//   starred-repo-finder <REPO_NAME> [--limit N] [--order METRIC]
//                       [--stargazers N] [--forkers N] [--ratio X]
//                       [--format table|json]
//
// The derive API turns the struct below into a parser, including --help and
// --version.
// =============================================================================

use clap::Parser;

use crate::query::{OrderBy, QueryParameters};
use crate::results::OutputFormat;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "starred-repo-finder",
    version,
    about = "Find repositories that the stargazers of a GitHub repository also starred",
    long_about = "starred-repo-finder queries the public ClickHouse github_events dataset for \
                  repositories starred by people who starred REPO_NAME, and ranks them by \
                  stargazers, forkers or their ratio."
)]
pub struct Cli {
    /// Repository to start from, as owner/name (e.g. rust-lang/rust)
    ///
    /// This is a positional argument (required, no flag needed)
    pub repo_name: String,

    /// Maximum number of repositories to return
    #[arg(long, default_value_t = 50)]
    pub limit: u32,

    /// Metric to sort by (descending)
    #[arg(long, value_enum, default_value_t = OrderBy::Stargazers)]
    pub order: OrderBy,

    /// Only show repositories with at least this many stargazers in common
    #[arg(long)]
    pub stargazers: Option<u64>,

    /// Only show repositories with at least this many forkers in common
    #[arg(long)]
    pub forkers: Option<u64>,

    /// Only show repositories with at least this stargazers-per-forker ratio
    #[arg(long)]
    pub ratio: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Log debug information (including the generated query) to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The query parameters described by these arguments.
    pub fn query_parameters(&self) -> QueryParameters {
        QueryParameters {
            repo_name: self.repo_name.clone(),
            limit: self.limit,
            order_by: self.order,
            min_stargazers: self.stargazers,
            min_forkers: self.forkers,
            min_ratio: self.ratio,
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does value_enum do?
//    - It lets clap parse "--order forkers" straight into OrderBy::Forkers
//    - Invalid values are rejected with a list of the allowed ones
//
// 2. Why Option<u64> for --stargazers?
//    - The flag is optional; leaving it out gives None
//    - u64 means clap already refuses negative numbers
// -----------------------------------------------------------------------------
