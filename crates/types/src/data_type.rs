use std::fmt;

/// Data types a table column can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Double,
    Boolean,
    Varchar,
    Date,
    Timestamp,
    /// Type of the NULL literal before it is bound to a column
    Null,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Integer => "INTEGER",
            DataType::Double => "DOUBLE",
            DataType::Boolean => "BOOLEAN",
            DataType::Varchar => "VARCHAR",
            DataType::Date => "DATE",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Null => "NULL",
        };
        write!(f, "{}", name)
    }
}
