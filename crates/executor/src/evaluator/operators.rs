//! Binary operator evaluation
//!
//! AND/OR follow three-valued logic and must see NULL operands; every
//! other operator yields NULL as soon as either side is NULL.

use crate::errors::ExecutorError;
use std::cmp::Ordering;
use std::str::FromStr;
use types::Value;

/// Evaluate a binary operation on two values.
pub(crate) fn eval_binary_op(
    left: &Value,
    op: &ast::BinaryOperator,
    right: &Value,
) -> Result<Value, ExecutorError> {
    use ast::BinaryOperator::*;

    match op {
        And => return eval_and(left, right),
        Or => return eval_or(left, right),
        _ => {}
    }

    if left.is_null() || right.is_null() {
        return Ok(Value::Null);
    }

    match op {
        Plus => eval_arithmetic(left, "+", right),
        Minus => eval_arithmetic(left, "-", right),
        Multiply => eval_arithmetic(left, "*", right),
        Divide => eval_arithmetic(left, "/", right),
        Modulo => eval_arithmetic(left, "%", right),

        Equal => eval_comparison(left, "=", right, |ord| ord == Ordering::Equal),
        NotEqual => eval_comparison(left, "<>", right, |ord| ord != Ordering::Equal),
        LessThan => eval_comparison(left, "<", right, |ord| ord == Ordering::Less),
        LessThanOrEqual => {
            eval_comparison(left, "<=", right, |ord| ord != Ordering::Greater)
        }
        GreaterThan => eval_comparison(left, ">", right, |ord| ord == Ordering::Greater),
        GreaterThanOrEqual => {
            eval_comparison(left, ">=", right, |ord| ord != Ordering::Less)
        }

        And | Or => unreachable!("handled above"),
    }
}

/// Three-valued AND: FALSE dominates NULL
fn eval_and(left: &Value, right: &Value) -> Result<Value, ExecutorError> {
    let left = to_tristate(left, "AND")?;
    let right = to_tristate(right, "AND")?;
    Ok(match (left, right) {
        (Some(false), _) | (_, Some(false)) => Value::Boolean(false),
        (Some(true), Some(true)) => Value::Boolean(true),
        _ => Value::Null,
    })
}

/// Three-valued OR: TRUE dominates NULL
fn eval_or(left: &Value, right: &Value) -> Result<Value, ExecutorError> {
    let left = to_tristate(left, "OR")?;
    let right = to_tristate(right, "OR")?;
    Ok(match (left, right) {
        (Some(true), _) | (_, Some(true)) => Value::Boolean(true),
        (Some(false), Some(false)) => Value::Boolean(false),
        _ => Value::Null,
    })
}

fn to_tristate(val: &Value, op: &str) -> Result<Option<bool>, ExecutorError> {
    match val {
        Value::Boolean(b) => Ok(Some(*b)),
        Value::Null => Ok(None),
        other => Err(ExecutorError::TypeMismatch {
            left: other.clone(),
            op: op.to_string(),
            right: Value::Null,
        }),
    }
}

/// Arithmetic over INTEGER and DOUBLE; mixed operands promote to DOUBLE.
fn eval_arithmetic(left: &Value, op: &str, right: &Value) -> Result<Value, ExecutorError> {
    use Value::*;

    match (left, right) {
        (Integer(a), Integer(b)) => match op {
            "+" => Ok(Integer(a.wrapping_add(*b))),
            "-" => Ok(Integer(a.wrapping_sub(*b))),
            "*" => Ok(Integer(a.wrapping_mul(*b))),
            "/" => {
                if *b == 0 {
                    Err(ExecutorError::DivisionByZero)
                } else {
                    Ok(Integer(a / b))
                }
            }
            "%" => {
                if *b == 0 {
                    Err(ExecutorError::DivisionByZero)
                } else {
                    Ok(Integer(a % b))
                }
            }
            _ => unreachable!("unknown arithmetic operator {}", op),
        },
        _ => {
            let (a, b) = match (left.as_f64(), right.as_f64()) {
                (Some(a), Some(b)) => (a, b),
                _ => {
                    return Err(ExecutorError::TypeMismatch {
                        left: left.clone(),
                        op: op.to_string(),
                        right: right.clone(),
                    })
                }
            };
            match op {
                "+" => Ok(Double(a + b)),
                "-" => Ok(Double(a - b)),
                "*" => Ok(Double(a * b)),
                "/" => {
                    if b == 0.0 {
                        Err(ExecutorError::DivisionByZero)
                    } else {
                        Ok(Double(a / b))
                    }
                }
                "%" => {
                    if b == 0.0 {
                        Err(ExecutorError::DivisionByZero)
                    } else {
                        Ok(Double(a % b))
                    }
                }
                _ => unreachable!("unknown arithmetic operator {}", op),
            }
        }
    }
}

/// Compare two non-NULL values, applying the coercions the predicate
/// language needs, and map the ordering through `check`.
fn eval_comparison(
    left: &Value,
    op: &str,
    right: &Value,
    check: fn(Ordering) -> bool,
) -> Result<Value, ExecutorError> {
    match compare_values(left, right) {
        Some(ordering) => Ok(Value::Boolean(check(ordering))),
        None => Err(ExecutorError::TypeMismatch {
            left: left.clone(),
            op: op.to_string(),
            right: right.clone(),
        }),
    }
}

/// Ordering between two non-NULL values.
///
/// On top of `Value::partial_cmp` this coerces a string literal to DATE or
/// TIMESTAMP when compared against a temporal column, so predicates like
/// `Hired > '2020-01-01'` work without a cast syntax.
fn compare_values(left: &Value, right: &Value) -> Option<Ordering> {
    use Value::*;

    match (left, right) {
        (Date(d), Varchar(s)) => {
            let parsed = types::Date::from_str(s).ok()?;
            d.partial_cmp(&parsed)
        }
        (Varchar(s), Date(d)) => {
            let parsed = types::Date::from_str(s).ok()?;
            parsed.partial_cmp(d)
        }
        (Timestamp(ts), Varchar(s)) => {
            let parsed = types::Timestamp::from_str(s).ok()?;
            ts.partial_cmp(&parsed)
        }
        (Varchar(s), Timestamp(ts)) => {
            let parsed = types::Timestamp::from_str(s).ok()?;
            parsed.partial_cmp(ts)
        }
        _ => left.partial_cmp(right),
    }
}
