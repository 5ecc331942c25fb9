use crate::{Activity, ActivityError};
use storage::Table;

/// Select a subset of rows from a table using a boolean predicate over
/// column values, producing a new table with the same schema.
#[derive(Debug, Default)]
pub struct TableFilter {
    // Inputs
    pub input_table: Option<Table>,
    /// Boolean row predicate, e.g. `Age > 30 AND Name LIKE 'J%'`
    pub query: Option<String>,

    // Outputs
    pub out_table: Option<Table>,
}

impl Activity for TableFilter {
    fn execute(&mut self, _option_id: Option<i32>) -> Result<(), ActivityError> {
        let table = self
            .input_table
            .as_ref()
            .ok_or(ActivityError::MissingInput("input_table"))?;
        let query = self
            .query
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ActivityError::MissingInput("query"))?;

        self.out_table = Some(executor::filter(table, query)?);
        Ok(())
    }
}
