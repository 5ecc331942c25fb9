use super::operators::eval_binary_op;
use super::pattern::like_match;
use crate::errors::ExecutorError;
use types::Value;

/// Evaluates predicate expressions in the context of a row.
pub struct ExpressionEvaluator<'a> {
    schema: &'a catalog::TableSchema,
}

impl<'a> ExpressionEvaluator<'a> {
    /// Create a new expression evaluator for a given schema
    pub fn new(schema: &'a catalog::TableSchema) -> Self {
        ExpressionEvaluator { schema }
    }

    /// Evaluate an expression in the context of a row
    pub fn eval(
        &self,
        expr: &ast::Expression,
        row: &storage::Row,
    ) -> Result<Value, ExecutorError> {
        match expr {
            ast::Expression::Literal(val) => Ok(val.clone()),

            ast::Expression::ColumnRef { column } => {
                let col_index = self
                    .schema
                    .get_column_index(column)
                    .ok_or_else(|| ExecutorError::ColumnNotFound(column.clone()))?;
                row.get(col_index)
                    .cloned()
                    .ok_or(ExecutorError::ColumnIndexOutOfBounds { index: col_index })
            }

            ast::Expression::BinaryOp { op, left, right } => {
                let left_val = self.eval(left, row)?;
                let right_val = self.eval(right, row)?;
                eval_binary_op(&left_val, op, &right_val)
            }

            ast::Expression::UnaryOp { op, expr } => {
                let val = self.eval(expr, row)?;
                self.eval_unary_op(op, &val)
            }

            ast::Expression::IsNull { expr, negated } => {
                let val = self.eval(expr, row)?;
                // IS NULL never yields UNKNOWN
                Ok(Value::Boolean(val.is_null() != *negated))
            }

            ast::Expression::Like { expr, pattern, negated } => {
                self.eval_like(expr, pattern, *negated, row)
            }

            ast::Expression::Between { expr, low, high, negated } => {
                self.eval_between(expr, low, high, *negated, row)
            }

            ast::Expression::InList { expr, values, negated } => {
                self.eval_in_list(expr, values, *negated, row)
            }
        }
    }

    /// Evaluate NOT / unary minus / unary plus
    fn eval_unary_op(
        &self,
        op: &ast::UnaryOperator,
        val: &Value,
    ) -> Result<Value, ExecutorError> {
        match op {
            ast::UnaryOperator::Not => match val {
                Value::Null => Ok(Value::Null),
                Value::Boolean(b) => Ok(Value::Boolean(!b)),
                other => Err(ExecutorError::TypeMismatch {
                    left: other.clone(),
                    op: "NOT".to_string(),
                    right: Value::Null,
                }),
            },
            ast::UnaryOperator::Minus => match val {
                Value::Null => Ok(Value::Null),
                Value::Integer(i) => Ok(Value::Integer(-i)),
                Value::Double(d) => Ok(Value::Double(-d)),
                other => Err(ExecutorError::TypeMismatch {
                    left: other.clone(),
                    op: "-".to_string(),
                    right: Value::Null,
                }),
            },
            ast::UnaryOperator::Plus => match val {
                Value::Null | Value::Integer(_) | Value::Double(_) => Ok(val.clone()),
                other => Err(ExecutorError::TypeMismatch {
                    left: other.clone(),
                    op: "+".to_string(),
                    right: Value::Null,
                }),
            },
        }
    }

    /// Evaluate LIKE predicate: expr [NOT] LIKE pattern
    ///
    /// NULL operand or pattern yields NULL, per three-valued logic.
    fn eval_like(
        &self,
        expr: &ast::Expression,
        pattern: &ast::Expression,
        negated: bool,
        row: &storage::Row,
    ) -> Result<Value, ExecutorError> {
        let text_val = self.eval(expr, row)?;
        let pattern_val = self.eval(pattern, row)?;

        if text_val.is_null() || pattern_val.is_null() {
            return Ok(Value::Null);
        }

        let (text, pattern_str) = match (&text_val, &pattern_val) {
            (Value::Varchar(text), Value::Varchar(pattern)) => (text, pattern),
            _ => {
                return Err(ExecutorError::TypeMismatch {
                    left: text_val.clone(),
                    op: "LIKE".to_string(),
                    right: pattern_val.clone(),
                })
            }
        };

        let matches = like_match(text, pattern_str);
        Ok(Value::Boolean(matches != negated))
    }

    /// Evaluate BETWEEN predicate as (expr >= low) AND (expr <= high) under
    /// three-valued logic; NOT BETWEEN negates the result.
    fn eval_between(
        &self,
        expr: &ast::Expression,
        low: &ast::Expression,
        high: &ast::Expression,
        negated: bool,
        row: &storage::Row,
    ) -> Result<Value, ExecutorError> {
        let expr_val = self.eval(expr, row)?;
        let low_val = self.eval(low, row)?;
        let high_val = self.eval(high, row)?;

        let ge_low =
            eval_binary_op(&expr_val, &ast::BinaryOperator::GreaterThanOrEqual, &low_val)?;
        let le_high =
            eval_binary_op(&expr_val, &ast::BinaryOperator::LessThanOrEqual, &high_val)?;
        let between = eval_binary_op(&ge_low, &ast::BinaryOperator::And, &le_high)?;

        if negated {
            self.eval_unary_op(&ast::UnaryOperator::Not, &between)
        } else {
            Ok(between)
        }
    }

    /// Evaluate IN with a value list.
    ///
    /// TRUE on any equal member; otherwise NULL if any comparison was
    /// unknown, else FALSE. NOT IN negates under three-valued logic.
    fn eval_in_list(
        &self,
        expr: &ast::Expression,
        values: &[ast::Expression],
        negated: bool,
        row: &storage::Row,
    ) -> Result<Value, ExecutorError> {
        let expr_val = self.eval(expr, row)?;
        if expr_val.is_null() {
            return Ok(Value::Null);
        }

        let mut saw_unknown = false;
        for value in values {
            let member = self.eval(value, row)?;
            match eval_binary_op(&expr_val, &ast::BinaryOperator::Equal, &member)? {
                Value::Boolean(true) => return Ok(Value::Boolean(!negated)),
                Value::Boolean(false) => {}
                _ => saw_unknown = true,
            }
        }

        if saw_unknown {
            Ok(Value::Null)
        } else {
            Ok(Value::Boolean(negated))
        }
    }
}
