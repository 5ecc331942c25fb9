use std::fmt;

/// Errors raised by table mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Row arity does not match the table schema
    ColumnCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ColumnCountMismatch { expected, actual } => {
                write!(f, "Column count mismatch: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for StorageError {}
