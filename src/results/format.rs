// src/results/format.rs
// =============================================================================
// Renders result rows for output.
//
// Two formats:
// - table: a comfy-table with Repository / Stargazers / Forkers / Ratio
// - json:  an array of {"repo_name", "stargazers", "forkers", "ratio"} objects
//
// print_results writes to any std::io::Write, so main.rs hands it stdout and
// the tests hand it a Vec<u8>.
// =============================================================================

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use serde::{Deserialize, Serialize};

use super::parse::ResultRow;
use crate::error::{FinderError, Result};

const HEADERS: [&str; 4] = ["Repository", "Stargazers", "Forkers", "Ratio"];

/// How results are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON array of records
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(FinderError::InvalidParameter(format!(
                "unknown format '{}', expected 'table' or 'json'",
                other
            ))),
        }
    }
}

/// A result row as it appears in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    pub repo_name: String,
    pub stargazers: String,
    pub forkers: String,
    pub ratio: String,
}

impl From<&ResultRow> for RepoRecord {
    fn from(row: &ResultRow) -> Self {
        Self {
            repo_name: row.repo_name.clone(),
            stargazers: row.stargazers.clone(),
            forkers: row.forkers.clone(),
            ratio: row.ratio.clone(),
        }
    }
}

/// Rows converted for one of the output formats.
#[derive(Debug)]
pub enum FormattedOutput {
    Table(Table),
    Records(Vec<RepoRecord>),
}

pub fn convert_and_format_results(rows: &[ResultRow], format: OutputFormat) -> FormattedOutput {
    match format {
        OutputFormat::Table => FormattedOutput::Table(build_table(rows)),
        OutputFormat::Json => FormattedOutput::Records(rows.iter().map(RepoRecord::from).collect()),
    }
}

// Writes the results to `sink` in the requested format
//
// An empty table prints a short notice instead of a bare header row;
// empty JSON output is just [].
pub fn print_results(rows: &[ResultRow], format: OutputFormat, sink: &mut dyn Write) -> Result<()> {
    match convert_and_format_results(rows, format) {
        FormattedOutput::Table(_) if rows.is_empty() => {
            writeln!(sink, "No repositories found.")?;
        }
        FormattedOutput::Table(table) => {
            writeln!(sink, "{table}")?;
        }
        FormattedOutput::Records(records) => {
            let json = serde_json::to_string_pretty(&records)?;
            writeln!(sink, "{json}")?;
        }
    }
    sink.flush()?;
    Ok(())
}

fn build_table(rows: &[ResultRow]) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            HEADERS
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.repo_name),
            Cell::new(&row.stargazers).set_alignment(CellAlignment::Right),
            Cell::new(&row.forkers).set_alignment(CellAlignment::Right),
            Cell::new(&row.ratio).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
