//! Predicate-based row filtering
//!
//! Parses the predicate once, evaluates it against every row, and imports
//! the rows where it yields TRUE into a structure clone of the source
//! table. FALSE and NULL both exclude the row.

use crate::errors::ExecutorError;
use crate::evaluator::ExpressionEvaluator;
use storage::Table;
use types::Value;

/// Select the rows of `table` satisfying `predicate` into a new table with
/// the same schema.
pub fn filter(table: &Table, predicate: &str) -> Result<Table, ExecutorError> {
    let expr = parser::parse_predicate(predicate)?;
    let evaluator = ExpressionEvaluator::new(&table.schema);

    tracing::debug!(predicate, rows = table.row_count(), "filtering table");

    let mut result = table.clone_structure();
    for row in table.scan() {
        if evaluator.eval(&expr, row)? == Value::Boolean(true) {
            result.import_row(row)?;
        }
    }

    Ok(result)
}
