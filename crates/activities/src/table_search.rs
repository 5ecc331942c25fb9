use crate::{Activity, ActivityError};
use executor::{SearchMatch, SearchOptions};
use storage::Table;

/// Scan a table's cells against a literal or regex criterion.
///
/// Results are `(row, column, value)` triples in scan order. Engine
/// failures during the search (a malformed regex, an unknown column in
/// the subset) are logged and swallowed: the activity reports no matches
/// instead of failing the workflow.
#[derive(Debug, Default)]
pub struct TableSearch {
    // Inputs
    pub source_table: Option<Table>,
    pub criteria: Option<String>,
    /// Treat `criteria` as a regular expression; otherwise `*`/`%` are
    /// wildcards and plain text matches as a substring
    pub use_regex: bool,
    pub ignore_case: bool,
    pub multiline: bool,
    /// Report only the first matching cell
    pub search_first: bool,
    /// Restrict the scan to these columns (default: all)
    pub columns: Option<Vec<String>>,

    // Outputs
    pub search_results: Vec<SearchMatch>,
    pub any_match: bool,
}

impl Activity for TableSearch {
    fn execute(&mut self, _option_id: Option<i32>) -> Result<(), ActivityError> {
        self.search_results = Vec::new();
        self.any_match = false;

        let table = self
            .source_table
            .as_ref()
            .ok_or(ActivityError::MissingInput("source_table"))?;
        let criteria = self
            .criteria
            .as_deref()
            .ok_or(ActivityError::MissingInput("criteria"))?;

        let options = SearchOptions {
            use_regex: self.use_regex,
            ignore_case: self.ignore_case,
            multiline: self.multiline,
            columns: self.columns.clone(),
            first_only: self.search_first,
        };

        match executor::search(table, criteria, &options) {
            Ok(matches) => {
                self.any_match = !matches.is_empty();
                self.search_results = matches;
            }
            Err(err) => {
                // Search errors do not fail the workflow; the host sees an
                // empty result set
                tracing::warn!(error = %err, "table search failed");
            }
        }

        Ok(())
    }
}
