use crate::{Row, StorageError};

/// In-memory table - a schema plus an ordered sequence of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub schema: catalog::TableSchema,
    rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table with given schema
    pub fn new(schema: catalog::TableSchema) -> Self {
        Table { schema, rows: Vec::new() }
    }

    /// Insert a row into the table
    pub fn insert(&mut self, row: Row) -> Result<(), StorageError> {
        if row.len() != self.schema.column_count() {
            return Err(StorageError::ColumnCountMismatch {
                expected: self.schema.column_count(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Get all rows (for scanning)
    pub fn scan(&self) -> &[Row] {
        &self.rows
    }

    /// Get number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// New empty table sharing this table's schema
    pub fn clone_structure(&self) -> Table {
        Table { schema: self.schema.clone(), rows: Vec::new() }
    }

    /// Copy a row into this table, checking arity against the schema
    pub fn import_row(&mut self, row: &Row) -> Result<(), StorageError> {
        self.insert(row.clone())
    }
}
