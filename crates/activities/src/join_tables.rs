use crate::{Activity, ActivityError};
use executor::JoinType;
use storage::Table;

/// Combine two tables into one using an equality condition on a named
/// column.
///
/// `join_type` selects inner, left, right or full semantics
/// (case-insensitive). The result holds all columns from both tables;
/// sides without a partner row are padded with NULL.
#[derive(Debug, Default)]
pub struct JoinTables {
    // Inputs
    pub table1: Option<Table>,
    pub table2: Option<Table>,
    pub join_type: Option<String>,
    /// Column name present in both tables
    pub join_condition: Option<String>,

    // Outputs
    pub result_table: Option<Table>,
}

impl Activity for JoinTables {
    fn execute(&mut self, _option_id: Option<i32>) -> Result<(), ActivityError> {
        let table1 = self.table1.as_ref().ok_or(ActivityError::MissingInput("table1"))?;
        let table2 = self.table2.as_ref().ok_or(ActivityError::MissingInput("table2"))?;
        let join_type = self
            .join_type
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ActivityError::MissingInput("join_type"))?;
        let join_condition = self
            .join_condition
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ActivityError::MissingInput("join_condition"))?;

        let join_type: JoinType = join_type
            .parse()
            .map_err(|err: executor::ExecutorError| {
                ActivityError::InvalidArgument(err.to_string())
            })?;

        self.result_table = Some(executor::join(table1, table2, join_type, join_condition)?);
        Ok(())
    }
}
