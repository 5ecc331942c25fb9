use std::fmt;

/// Errors raised while executing a table operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutorError {
    ColumnNotFound(String),
    ColumnIndexOutOfBounds { index: usize },
    TypeMismatch { left: types::Value, op: String, right: types::Value },
    DivisionByZero,
    /// Regex criterion failed to compile
    InvalidPattern(String),
    /// Filter predicate failed to parse
    InvalidPredicate(String),
    UnknownJoinType(String),
    StorageError(String),
}

impl fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutorError::ColumnNotFound(name) => {
                write!(f, "Column not found: {}", name)
            }
            ExecutorError::ColumnIndexOutOfBounds { index } => {
                write!(f, "Column index out of bounds: {}", index)
            }
            ExecutorError::TypeMismatch { left, op, right } => {
                write!(
                    f,
                    "Type mismatch: cannot apply '{}' to {} and {}",
                    op,
                    left.get_type(),
                    right.get_type()
                )
            }
            ExecutorError::DivisionByZero => write!(f, "Division by zero"),
            ExecutorError::InvalidPattern(msg) => {
                write!(f, "Invalid search pattern: {}", msg)
            }
            ExecutorError::InvalidPredicate(msg) => {
                write!(f, "Invalid filter predicate: {}", msg)
            }
            ExecutorError::UnknownJoinType(value) => {
                write!(
                    f,
                    "Unknown join type: '{}' (expected inner, left, right or full)",
                    value
                )
            }
            ExecutorError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for ExecutorError {}

impl From<parser::ParseError> for ExecutorError {
    fn from(err: parser::ParseError) -> Self {
        ExecutorError::InvalidPredicate(err.to_string())
    }
}

impl From<storage::StorageError> for ExecutorError {
    fn from(err: storage::StorageError) -> Self {
        ExecutorError::StorageError(err.to_string())
    }
}
