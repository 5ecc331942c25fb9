use super::{ParseError, Parser};
use crate::keywords::Keyword;
use crate::token::Token;
use types::Value;

impl Parser {
    /// Parse an expression (entry point)
    pub(super) fn parse_expression(&mut self) -> Result<ast::Expression, ParseError> {
        self.parse_or_expression()
    }

    /// Parse OR expression (lowest precedence)
    fn parse_or_expression(&mut self) -> Result<ast::Expression, ParseError> {
        let mut left = self.parse_and_expression()?;

        while self.peek_keyword(Keyword::Or) {
            self.consume_keyword(Keyword::Or)?;
            let right = self.parse_and_expression()?;
            left = ast::Expression::BinaryOp {
                op: ast::BinaryOperator::Or,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse AND expression
    fn parse_and_expression(&mut self) -> Result<ast::Expression, ParseError> {
        let mut left = self.parse_not_expression()?;

        while self.peek_keyword(Keyword::And) {
            self.consume_keyword(Keyword::And)?;
            let right = self.parse_not_expression()?;
            left = ast::Expression::BinaryOp {
                op: ast::BinaryOperator::And,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse NOT expression (binds looser than comparison, tighter than AND)
    fn parse_not_expression(&mut self) -> Result<ast::Expression, ParseError> {
        if self.peek_keyword(Keyword::Not) {
            // `NOT LIKE` / `NOT BETWEEN` / `NOT IN` belong to the comparison
            // level; only treat NOT as a prefix when a predicate follows.
            self.consume_keyword(Keyword::Not)?;
            let expr = self.parse_not_expression()?;
            return Ok(ast::Expression::UnaryOp {
                op: ast::UnaryOperator::Not,
                expr: Box::new(expr),
            });
        }
        self.parse_comparison_expression()
    }

    /// Parse comparison expression (=, <, >, <=, >=, !=, <>) and the
    /// postfix predicates IS NULL, LIKE, BETWEEN and IN.
    fn parse_comparison_expression(&mut self) -> Result<ast::Expression, ParseError> {
        let left = self.parse_additive_expression()?;

        // NOT LIKE / NOT BETWEEN / NOT IN need one token of lookahead
        if self.peek_keyword(Keyword::Not) {
            let saved_pos = self.save_position();
            self.advance(); // consume NOT

            if self.peek_keyword(Keyword::Like) {
                self.consume_keyword(Keyword::Like)?;
                let pattern = self.parse_additive_expression()?;
                return Ok(ast::Expression::Like {
                    expr: Box::new(left),
                    pattern: Box::new(pattern),
                    negated: true,
                });
            } else if self.peek_keyword(Keyword::Between) {
                self.consume_keyword(Keyword::Between)?;
                return self.parse_between_tail(left, true);
            } else if self.peek_keyword(Keyword::In) {
                self.consume_keyword(Keyword::In)?;
                return self.parse_in_tail(left, true);
            }

            // Plain NOT, not ours to handle here
            self.restore_position(saved_pos);
            return Ok(left);
        }

        if self.peek_keyword(Keyword::Like) {
            self.consume_keyword(Keyword::Like)?;
            let pattern = self.parse_additive_expression()?;
            return Ok(ast::Expression::Like {
                expr: Box::new(left),
                pattern: Box::new(pattern),
                negated: false,
            });
        }

        if self.peek_keyword(Keyword::Between) {
            self.consume_keyword(Keyword::Between)?;
            return self.parse_between_tail(left, false);
        }

        if self.peek_keyword(Keyword::In) {
            self.consume_keyword(Keyword::In)?;
            return self.parse_in_tail(left, false);
        }

        if self.peek_keyword(Keyword::Is) {
            self.consume_keyword(Keyword::Is)?;
            let negated = if self.peek_keyword(Keyword::Not) {
                self.consume_keyword(Keyword::Not)?;
                true
            } else {
                false
            };
            self.consume_keyword(Keyword::Null)?;
            return Ok(ast::Expression::IsNull { expr: Box::new(left), negated });
        }

        let op = match self.peek() {
            Token::Symbol('=') => Some(ast::BinaryOperator::Equal),
            Token::Symbol('<') => Some(ast::BinaryOperator::LessThan),
            Token::Symbol('>') => Some(ast::BinaryOperator::GreaterThan),
            Token::Operator(op) => match op.as_str() {
                "<=" => Some(ast::BinaryOperator::LessThanOrEqual),
                ">=" => Some(ast::BinaryOperator::GreaterThanOrEqual),
                "!=" | "<>" => Some(ast::BinaryOperator::NotEqual),
                _ => None,
            },
            _ => None,
        };

        if let Some(op) = op {
            self.advance();
            let right = self.parse_additive_expression()?;
            return Ok(ast::Expression::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    /// Parse `low AND high` after BETWEEN
    fn parse_between_tail(
        &mut self,
        expr: ast::Expression,
        negated: bool,
    ) -> Result<ast::Expression, ParseError> {
        let low = self.parse_additive_expression()?;
        self.consume_keyword(Keyword::And)?;
        let high = self.parse_additive_expression()?;
        Ok(ast::Expression::Between {
            expr: Box::new(expr),
            low: Box::new(low),
            high: Box::new(high),
            negated,
        })
    }

    /// Parse `(value, value, ...)` after IN
    fn parse_in_tail(
        &mut self,
        expr: ast::Expression,
        negated: bool,
    ) -> Result<ast::Expression, ParseError> {
        self.consume_symbol('(')?;

        let mut values = Vec::new();
        loop {
            values.push(self.parse_additive_expression()?);
            if self.peek_symbol(',') {
                self.consume_symbol(',')?;
            } else {
                break;
            }
        }

        self.consume_symbol(')')?;

        if values.is_empty() {
            return Err(ParseError::new("IN list must contain at least one value"));
        }

        Ok(ast::Expression::InList { expr: Box::new(expr), values, negated })
    }

    /// Parse additive expression (handles + and -)
    fn parse_additive_expression(&mut self) -> Result<ast::Expression, ParseError> {
        let mut left = self.parse_multiplicative_expression()?;

        while matches!(self.peek(), Token::Symbol('+') | Token::Symbol('-')) {
            let op = match self.peek() {
                Token::Symbol('+') => ast::BinaryOperator::Plus,
                Token::Symbol('-') => ast::BinaryOperator::Minus,
                _ => unreachable!(),
            };
            self.advance();

            let right = self.parse_multiplicative_expression()?;
            left = ast::Expression::BinaryOp { op, left: Box::new(left), right: Box::new(right) };
        }

        Ok(left)
    }

    /// Parse multiplicative expression (handles *, / and %)
    fn parse_multiplicative_expression(&mut self) -> Result<ast::Expression, ParseError> {
        let mut left = self.parse_unary_expression()?;

        while matches!(
            self.peek(),
            Token::Symbol('*') | Token::Symbol('/') | Token::Symbol('%')
        ) {
            let op = match self.peek() {
                Token::Symbol('*') => ast::BinaryOperator::Multiply,
                Token::Symbol('/') => ast::BinaryOperator::Divide,
                Token::Symbol('%') => ast::BinaryOperator::Modulo,
                _ => unreachable!(),
            };
            self.advance();

            let right = self.parse_unary_expression()?;
            left = ast::Expression::BinaryOp { op, left: Box::new(left), right: Box::new(right) };
        }

        Ok(left)
    }

    /// Parse unary +/- prefix
    fn parse_unary_expression(&mut self) -> Result<ast::Expression, ParseError> {
        match self.peek() {
            Token::Symbol('-') => {
                self.advance();
                let expr = self.parse_unary_expression()?;
                Ok(ast::Expression::UnaryOp {
                    op: ast::UnaryOperator::Minus,
                    expr: Box::new(expr),
                })
            }
            Token::Symbol('+') => {
                self.advance();
                let expr = self.parse_unary_expression()?;
                Ok(ast::Expression::UnaryOp {
                    op: ast::UnaryOperator::Plus,
                    expr: Box::new(expr),
                })
            }
            _ => self.parse_primary_expression(),
        }
    }

    /// Parse primary expression (literals, column references, parens)
    fn parse_primary_expression(&mut self) -> Result<ast::Expression, ParseError> {
        match self.advance() {
            Token::Number(text) => {
                let value = if text.contains('.') {
                    let n = text
                        .parse::<f64>()
                        .map_err(|_| ParseError::new(format!("Invalid number: '{}'", text)))?;
                    Value::Double(n)
                } else {
                    let n = text
                        .parse::<i64>()
                        .map_err(|_| ParseError::new(format!("Invalid number: '{}'", text)))?;
                    Value::Integer(n)
                };
                Ok(ast::Expression::Literal(value))
            }
            Token::StringLiteral(text) => Ok(ast::Expression::Literal(Value::Varchar(text))),
            Token::Keyword(Keyword::True) => {
                Ok(ast::Expression::Literal(Value::Boolean(true)))
            }
            Token::Keyword(Keyword::False) => {
                Ok(ast::Expression::Literal(Value::Boolean(false)))
            }
            Token::Keyword(Keyword::Null) => Ok(ast::Expression::Literal(Value::Null)),
            Token::Identifier(name) => Ok(ast::Expression::ColumnRef { column: name }),
            Token::Symbol('(') => {
                let expr = self.parse_expression()?;
                self.consume_symbol(')')?;
                Ok(expr)
            }
            token => Err(ParseError::new(format!("Unexpected token: {}", token))),
        }
    }
}
