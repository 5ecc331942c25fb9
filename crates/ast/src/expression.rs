use crate::{BinaryOperator, UnaryOperator};
use types::Value;

/// A predicate expression evaluated per row.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Literal value (42, 'hello', TRUE, NULL)
    Literal(Value),

    /// Column reference (Age, [First Name])
    ColumnRef { column: String },

    /// Binary operation (a + b, x = y, p AND q)
    BinaryOp { op: BinaryOperator, left: Box<Expression>, right: Box<Expression> },

    /// Unary operation (NOT x, -5)
    UnaryOp { op: UnaryOperator, expr: Box<Expression> },

    /// IS NULL / IS NOT NULL
    IsNull {
        expr: Box<Expression>,
        negated: bool, // false = IS NULL, true = IS NOT NULL
    },

    /// LIKE pattern matching
    /// Pattern wildcards: % (any chars), _ (single char)
    Like {
        expr: Box<Expression>,
        pattern: Box<Expression>,
        negated: bool, // false = LIKE, true = NOT LIKE
    },

    /// BETWEEN predicate
    /// Equivalent to: expr >= low AND expr <= high (or negated)
    Between {
        expr: Box<Expression>,
        low: Box<Expression>,
        high: Box<Expression>,
        negated: bool, // false = BETWEEN, true = NOT BETWEEN
    },

    /// IN with a value list
    /// Example: Status IN ('new', 'open')
    InList {
        expr: Box<Expression>,
        values: Vec<Expression>,
        negated: bool, // false = IN, true = NOT IN
    },
}
