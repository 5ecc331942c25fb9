//! Cell search over a table
//!
//! Scans rows in table order and the selected columns in schema order,
//! matching each cell's string form against a criterion. The criterion is
//! compiled once: to a regex, or to an unanchored wildcard matcher.

use crate::errors::ExecutorError;
use crate::evaluator::pattern::wildcard_match;
use itertools::Itertools;
use regex::RegexBuilder;
use storage::Table;
use types::Value;

/// Options controlling a table search.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Treat the criterion as a regular expression instead of a wildcard
    /// literal
    pub use_regex: bool,
    pub ignore_case: bool,
    /// Regex `^`/`$` match at line boundaries
    pub multiline: bool,
    /// Restrict the scan to these columns (default: all)
    pub columns: Option<Vec<String>>,
    /// Stop at the first matching cell
    pub first_only: bool,
}

/// One matching cell: positions are indices into the source table snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch {
    pub row: usize,
    pub column: usize,
    pub value: Value,
}

/// Criterion compiled once per search.
enum Matcher {
    Regex(regex::Regex),
    Wildcard { criterion: String, ignore_case: bool },
}

impl Matcher {
    fn build(criterion: &str, options: &SearchOptions) -> Result<Self, ExecutorError> {
        if options.use_regex {
            let regex = RegexBuilder::new(criterion)
                .case_insensitive(options.ignore_case)
                .multi_line(options.multiline)
                .build()
                .map_err(|err| ExecutorError::InvalidPattern(err.to_string()))?;
            Ok(Matcher::Regex(regex))
        } else {
            Ok(Matcher::Wildcard {
                criterion: criterion.to_string(),
                ignore_case: options.ignore_case,
            })
        }
    }

    fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Regex(regex) => regex.is_match(text),
            Matcher::Wildcard { criterion, ignore_case } => {
                wildcard_match(text, criterion, *ignore_case)
            }
        }
    }
}

/// Scan a table's cells for the criterion.
///
/// Returns the matching cells in scan order; with `first_only` the result
/// holds at most one entry.
pub fn search(
    table: &Table,
    criterion: &str,
    options: &SearchOptions,
) -> Result<Vec<SearchMatch>, ExecutorError> {
    let matcher = Matcher::build(criterion, options)?;
    let selected = selected_columns(table, options)?;

    tracing::debug!(
        criterion,
        use_regex = options.use_regex,
        rows = table.row_count(),
        columns = selected.len(),
        "searching table"
    );

    let mut matches = Vec::new();
    for (row_idx, row) in table.scan().iter().enumerate() {
        for &col_idx in &selected {
            let value = &row.values[col_idx];
            if value.is_null() {
                continue;
            }
            if matcher.is_match(&value.to_string()) {
                matches.push(SearchMatch { row: row_idx, column: col_idx, value: value.clone() });
                if options.first_only {
                    return Ok(matches);
                }
            }
        }
    }

    Ok(matches)
}

/// Resolve the column subset to schema positions, in schema order.
fn selected_columns(
    table: &Table,
    options: &SearchOptions,
) -> Result<Vec<usize>, ExecutorError> {
    match &options.columns {
        None => Ok((0..table.schema.column_count()).collect()),
        Some(names) => {
            for name in names {
                if !table.schema.has_column(name) {
                    return Err(ExecutorError::ColumnNotFound(name.clone()));
                }
            }
            Ok(table
                .schema
                .columns
                .iter()
                .positions(|col| names.contains(&col.name))
                .collect())
        }
    }
}
