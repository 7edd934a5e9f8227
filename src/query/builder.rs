// src/query/builder.rs
// =============================================================================
// Builds the "who else did these stargazers star?" query.
//
// Strategy:
// - Collect every actor who starred the target repository
// - Look at all stars and forks those actors made on other repositories
// - Count distinct stargazers and forkers per repository
// - Optionally keep only repositories above the given thresholds
// - Sort by the chosen metric and cap the number of rows
//
// The result is plain text; nothing here touches the network.
// =============================================================================

use std::fmt;
use std::str::FromStr;

use crate::error::{FinderError, Result};

/// The metric the backend sorts results by (always descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OrderBy {
    /// Number of distinct stargazers in common
    Stargazers,
    /// Number of distinct forkers in common
    Forkers,
    /// Stargazers per forker
    Ratio,
}

impl OrderBy {
    /// Column name used in the generated SQL.
    pub fn column(&self) -> &'static str {
        match self {
            OrderBy::Stargazers => "stargazers",
            OrderBy::Forkers => "forkers",
            OrderBy::Ratio => "ratio",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for OrderBy {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stargazers" => Ok(OrderBy::Stargazers),
            "forkers" => Ok(OrderBy::Forkers),
            "ratio" => Ok(OrderBy::Ratio),
            other => Err(FinderError::InvalidParameter(format!(
                "unknown order '{}', expected one of: stargazers, forkers, ratio",
                other
            ))),
        }
    }
}

/// Everything needed to build one query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParameters {
    pub repo_name: String,
    pub limit: u32,
    pub order_by: OrderBy,
    pub min_stargazers: Option<u64>,
    pub min_forkers: Option<u64>,
    pub min_ratio: Option<f64>,
}

impl QueryParameters {
    /// Build the query text for these parameters.
    pub fn build_query(&self) -> Result<String> {
        build_query(
            &self.repo_name,
            self.limit,
            self.order_by,
            self.min_stargazers,
            self.min_forkers,
            self.min_ratio,
        )
    }
}

// Builds the SQL query for the given parameters
//
// Parameters:
//   repo_name: "owner/name" of the repository whose stargazers we follow
//   limit: maximum number of rows to return (must be > 0)
//   order_by: metric to sort by, descending
//   min_stargazers / min_forkers / min_ratio: optional lower bounds
//
// Returns: the query text, or InvalidParameter if an input is unusable
//
// Each threshold that is present adds exactly one "AND <metric> >= <value>"
// line to the HAVING clause.
pub fn build_query(
    repo_name: &str,
    limit: u32,
    order_by: OrderBy,
    min_stargazers: Option<u64>,
    min_forkers: Option<u64>,
    min_ratio: Option<f64>,
) -> Result<String> {
    let repo_name = repo_name.trim();
    if repo_name.is_empty() {
        return Err(FinderError::InvalidParameter(
            "repository name must not be empty".to_string(),
        ));
    }

    if limit == 0 {
        return Err(FinderError::InvalidParameter(
            "limit must be a positive integer".to_string(),
        ));
    }

    if let Some(ratio) = min_ratio {
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(FinderError::InvalidParameter(format!(
                "ratio threshold must be a non-negative number, got {}",
                ratio
            )));
        }
    }

    let repo = quote_literal(repo_name);

    let mut filters = String::new();
    if let Some(value) = min_stargazers {
        filters.push_str(&format!("\n  AND stargazers >= {}", value));
    }
    if let Some(value) = min_forkers {
        filters.push_str(&format!("\n  AND forkers >= {}", value));
    }
    if let Some(value) = min_ratio {
        filters.push_str(&format!("\n  AND ratio >= {}", value));
    }

    Ok(format!(
        "SELECT
    repo_name,
    uniqIf(actor_login, event_type = 'WatchEvent') AS stargazers,
    uniqIf(actor_login, event_type = 'ForkEvent') AS forkers,
    round(stargazers / greatest(forkers, 1), 3) AS ratio
FROM github_events
WHERE event_type IN ('WatchEvent', 'ForkEvent')
  AND actor_login IN (
    SELECT actor_login
    FROM github_events
    WHERE event_type = 'WatchEvent' AND repo_name = {repo}
  )
  AND repo_name != {repo}
GROUP BY repo_name
HAVING stargazers > 0{filters}
ORDER BY {order} DESC
LIMIT {limit}
FORMAT TabSeparated",
        repo = repo,
        filters = filters,
        order = order_by.column(),
        limit = limit,
    ))
}

// Wraps a value in single quotes, escaping backslashes and quotes
// so it stays one ClickHouse string literal
fn quote_literal(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<u64> for thresholds?
//    - None means "the user didn't ask for this filter"
//    - Some(10) means "only keep rows with at least 10"
//    - `if let Some(value) = ...` runs the block only when a value is there
//
// 2. Why an enum for OrderBy instead of a String?
//    - Only three columns are valid, and the compiler knows that
//    - We can never accidentally splice arbitrary text into ORDER BY
//    - FromStr still lets us parse user-supplied strings (with an error)
//
// 3. What is format! with named arguments?
//    - {repo} inside the string is filled from `repo = repo`
//    - The same name can be used more than once (repo appears twice)
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(repo: &str) -> String {
        build_query(repo, 50, OrderBy::Stargazers, None, None, None).unwrap()
    }

    #[test]
    fn test_build_query_contains_repo_and_limit() {
        let query = plain("test_repo");
        assert!(query.contains("test_repo"));
        assert!(query.contains("LIMIT 50"));
        assert!(query.contains("ORDER BY stargazers DESC"));
    }

    #[test]
    fn test_build_query_without_thresholds_adds_no_filters() {
        let query = plain("test_repo");
        assert!(!query.contains("AND stargazers >="));
        assert!(!query.contains("AND forkers >="));
        assert!(!query.contains("AND ratio >="));
    }

    #[test]
    fn test_build_query_with_stargazers() {
        let query =
            build_query("test_repo", 50, OrderBy::Stargazers, Some(10), None, None).unwrap();
        assert_eq!(query.matches("AND stargazers >= 10").count(), 1);
        assert!(!query.contains("AND forkers >="));
    }

    #[test]
    fn test_build_query_with_forkers() {
        let query =
            build_query("test_repo", 50, OrderBy::Stargazers, None, Some(10), None).unwrap();
        assert_eq!(query.matches("AND forkers >= 10").count(), 1);
    }

    #[test]
    fn test_build_query_with_ratio() {
        let query =
            build_query("test_repo", 50, OrderBy::Stargazers, None, None, Some(10.0)).unwrap();
        assert_eq!(query.matches("AND ratio >= 10").count(), 1);

        let query =
            build_query("test_repo", 50, OrderBy::Stargazers, None, None, Some(2.5)).unwrap();
        assert!(query.contains("AND ratio >= 2.5"));
    }

    #[test]
    fn test_build_query_orders_by_chosen_metric() {
        let query = build_query("test_repo", 7, OrderBy::Ratio, None, None, None).unwrap();
        assert!(query.contains("ORDER BY ratio DESC"));
        assert!(query.contains("LIMIT 7"));
    }

    #[test]
    fn test_build_query_is_deterministic() {
        let first = build_query("a/b", 20, OrderBy::Forkers, Some(1), Some(2), Some(0.5));
        let second = build_query("a/b", 20, OrderBy::Forkers, Some(1), Some(2), Some(0.5));
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn test_build_query_rejects_bad_input() {
        assert!(matches!(
            build_query("", 50, OrderBy::Stargazers, None, None, None),
            Err(FinderError::InvalidParameter(_))
        ));
        assert!(matches!(
            build_query("   ", 50, OrderBy::Stargazers, None, None, None),
            Err(FinderError::InvalidParameter(_))
        ));
        assert!(matches!(
            build_query("test_repo", 0, OrderBy::Stargazers, None, None, None),
            Err(FinderError::InvalidParameter(_))
        ));
        assert!(matches!(
            build_query("test_repo", 50, OrderBy::Stargazers, None, None, Some(-1.0)),
            Err(FinderError::InvalidParameter(_))
        ));
        assert!(build_query("test_repo", 50, OrderBy::Stargazers, None, None, Some(f64::NAN))
            .is_err());
    }

    #[test]
    fn test_build_query_escapes_quotes() {
        let query = plain("evil'); DROP TABLE x; --");
        assert!(query.contains(r"'evil\'); DROP TABLE x; --'"));
    }

    #[test]
    fn test_order_by_from_str() {
        assert_eq!("forkers".parse::<OrderBy>().unwrap(), OrderBy::Forkers);
        assert_eq!("Ratio".parse::<OrderBy>().unwrap(), OrderBy::Ratio);
        assert!(matches!(
            "popularity".parse::<OrderBy>(),
            Err(FinderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_parameters_delegate_to_build_query() {
        let params = QueryParameters {
            repo_name: "rust-lang/rust".to_string(),
            limit: 5,
            order_by: OrderBy::Forkers,
            min_stargazers: None,
            min_forkers: Some(3),
            min_ratio: None,
        };
        let query = params.build_query().unwrap();
        assert!(query.contains("'rust-lang/rust'"));
        assert!(query.contains("AND forkers >= 3"));
        assert!(query.contains("LIMIT 5"));
    }
}
