// src/results/parse.rs
// =============================================================================
// Parses the TabSeparated body ClickHouse sends back.
//
// Format (one repository per line):
//   repo_name <TAB> stargazers <TAB> forkers <TAB> ratio <LF>
//
// Values are kept as the raw text the backend sent. Row order is preserved
// because the backend already sorted it.
// =============================================================================

use crate::backend::RawResponse;
use crate::error::{FinderError, Result};

const FIELD_COUNT: usize = 4;

/// One result line, fields exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub repo_name: String,
    pub stargazers: String,
    pub forkers: String,
    pub ratio: String,
}

impl ResultRow {
    /// The four fields in wire order.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.repo_name.as_str(),
            self.stargazers.as_str(),
            self.forkers.as_str(),
            self.ratio.as_str(),
        ]
    }
}

// Converts a backend response into result rows
//
// Returns:
//   Ok(rows) when the status is 200 and every line has 4 fields
//   Err(Backend) for any other status, carrying the body for diagnostics
//   Err(Parse) for a line with the wrong number of fields
pub fn process_response(response: &RawResponse) -> Result<Vec<ResultRow>> {
    if !response.is_ok() {
        return Err(FinderError::Backend {
            status: response.status_code,
            body: String::from_utf8_lossy(&response.body).trim().to_string(),
        });
    }

    let text = String::from_utf8_lossy(&response.body);

    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line.trim_end_matches('\r')))
        .collect()
}

fn parse_line(line_number: usize, line: &str) -> Result<ResultRow> {
    let fields: Vec<&str> = line.split('\t').collect();

    match fields.as_slice() {
        [repo_name, stargazers, forkers, ratio] => Ok(ResultRow {
            repo_name: repo_name.to_string(),
            stargazers: stargazers.to_string(),
            forkers: forkers.to_string(),
            ratio: ratio.to_string(),
        }),
        _ => Err(FinderError::Parse {
            line: line_number,
            fields: fields.len(),
        }),
    }
}
