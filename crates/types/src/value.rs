use crate::data_type::DataType;
use crate::temporal::{Date, Timestamp};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime representation of a table cell, including NULL.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Varchar(String),
    Date(Date),
    Timestamp(Timestamp),
    Null,
}

impl Value {
    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the data type of this value
    pub fn get_type(&self) -> DataType {
        match self {
            Value::Integer(_) => DataType::Integer,
            Value::Double(_) => DataType::Double,
            Value::Boolean(_) => DataType::Boolean,
            Value::Varchar(_) => DataType::Varchar,
            Value::Date(_) => DataType::Date,
            Value::Timestamp(_) => DataType::Timestamp,
            Value::Null => DataType::Null,
        }
    }

    /// Numeric view of the value, coercing INTEGER to DOUBLE.
    /// Returns None for non-numeric values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }
}

/// Display implementation for Value (the string form a cell is matched
/// and shown as)
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Double(d) => write!(f, "{}", d),
            Value::Boolean(true) => write!(f, "TRUE"),
            Value::Boolean(false) => write!(f, "FALSE"),
            Value::Varchar(s) => write!(f, "{}", s),
            Value::Date(d) => write!(f, "{}", d),
            Value::Timestamp(ts) => write!(f, "{}", ts),
            Value::Null => write!(f, "NULL"),
        }
    }
}

/// Comparison with NULL-as-unknown semantics:
/// - NULL comparisons return None
/// - INTEGER and DOUBLE compare numerically across types
/// - NaN returns None (IEEE 754 semantics)
/// - Type mismatches return None (incomparable)
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Value::*;
        match (self, other) {
            (Null, _) | (_, Null) => None,

            (Integer(a), Integer(b)) => a.partial_cmp(b),
            (Double(a), Double(b)) => a.partial_cmp(b),
            (Integer(a), Double(b)) => (*a as f64).partial_cmp(b),
            (Double(a), Integer(b)) => a.partial_cmp(&(*b as f64)),

            (Varchar(a), Varchar(b)) => a.partial_cmp(b),

            // false < true
            (Boolean(a), Boolean(b)) => a.partial_cmp(b),

            (Date(a), Date(b)) => a.partial_cmp(b),
            (Timestamp(a), Timestamp(b)) => a.partial_cmp(b),

            _ => None,
        }
    }
}

/// Eq so that values can key hash maps (join build side). Unlike the
/// comparison above, NULL == NULL here; join code is responsible for
/// skipping NULL keys.
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the discriminant first so values of different types with the
        // same bit pattern do not collide into equal hashes trivially.
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Integer(i) => i.hash(state),
            Value::Double(d) => d.to_bits().hash(state),
            Value::Boolean(b) => b.hash(state),
            Value::Varchar(s) => s.hash(state),
            Value::Date(d) => d.hash(state),
            Value::Timestamp(ts) => ts.hash(state),
            Value::Null => {}
        }
    }
}
