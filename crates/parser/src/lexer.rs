use crate::keywords::Keyword;
use crate::token::Token;
use std::fmt;

/// Lexer error returned when tokenization fails.
#[derive(Debug, Clone, PartialEq)]
pub struct LexerError {
    pub message: String,
    pub position: usize,
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexer error at position {}: {}", self.position, self.message)
    }
}

impl std::error::Error for LexerError {}

/// Predicate lexer - converts predicate text into tokens.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer from predicate input.
    pub fn new(input: &str) -> Self {
        Lexer { input: input.chars().collect(), position: 0 }
    }

    /// Tokenize the entire input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_eof() {
                tokens.push(Token::Eof);
                break;
            }

            let token = self.next_token()?;
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Get the next token.
    fn next_token(&mut self) -> Result<Token, LexerError> {
        let ch = self.current_char();

        match ch {
            ',' => {
                self.advance();
                Ok(Token::Symbol(','))
            }
            '(' => {
                self.advance();
                Ok(Token::Symbol('('))
            }
            ')' => {
                self.advance();
                Ok(Token::Symbol(')'))
            }
            '=' | '<' | '>' | '!' => {
                self.advance();
                if !self.is_eof() {
                    let next_ch = self.current_char();
                    match (ch, next_ch) {
                        ('<', '=') => {
                            self.advance();
                            return Ok(Token::Operator("<=".to_string()));
                        }
                        ('>', '=') => {
                            self.advance();
                            return Ok(Token::Operator(">=".to_string()));
                        }
                        ('!', '=') => {
                            self.advance();
                            return Ok(Token::Operator("!=".to_string()));
                        }
                        ('<', '>') => {
                            self.advance();
                            return Ok(Token::Operator("<>".to_string()));
                        }
                        _ => {}
                    }
                }
                if ch == '!' {
                    return Err(LexerError {
                        message: "Unexpected character: '!' (did you mean '!='?)".to_string(),
                        position: self.position - 1,
                    });
                }
                Ok(Token::Symbol(ch))
            }
            '.' => {
                // Decimal number with a leading dot (e.g. .5)
                if self.peek(1).map(|c| c.is_ascii_digit()).unwrap_or(false) {
                    self.tokenize_number()
                } else {
                    Err(LexerError {
                        message: "Unexpected character: '.'".to_string(),
                        position: self.position,
                    })
                }
            }
            '+' | '-' | '*' | '/' | '%' => {
                self.advance();
                Ok(Token::Symbol(ch))
            }
            '\'' => self.tokenize_string(),
            '[' => self.tokenize_bracketed_identifier(),
            '0'..='9' => self.tokenize_number(),
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.tokenize_identifier_or_keyword()),
            _ => Err(LexerError {
                message: format!("Unexpected character: '{}'", ch),
                position: self.position,
            }),
        }
    }

    /// Tokenize an identifier or keyword.
    fn tokenize_identifier_or_keyword(&mut self) -> Token {
        let start = self.position;
        while !self.is_eof() {
            let ch = self.current_char();
            if ch.is_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let text: String = self.input[start..self.position].iter().collect();
        match Keyword::from_identifier(&text) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Identifier(text),
        }
    }

    /// Tokenize a `[bracketed column name]`.
    ///
    /// Brackets allow spaces and punctuation in column names; the closing
    /// bracket is mandatory and cannot be escaped.
    fn tokenize_bracketed_identifier(&mut self) -> Result<Token, LexerError> {
        let open_pos = self.position;
        self.advance(); // consume '['

        let start = self.position;
        while !self.is_eof() && self.current_char() != ']' {
            self.advance();
        }

        if self.is_eof() {
            return Err(LexerError {
                message: "Unterminated '[' in column name".to_string(),
                position: open_pos,
            });
        }

        let name: String = self.input[start..self.position].iter().collect();
        self.advance(); // consume ']'

        if name.is_empty() {
            return Err(LexerError {
                message: "Empty column name '[]'".to_string(),
                position: open_pos,
            });
        }

        Ok(Token::Identifier(name))
    }

    /// Tokenize a single-quoted string literal. A doubled quote ('') is an
    /// escaped quote.
    fn tokenize_string(&mut self) -> Result<Token, LexerError> {
        let open_pos = self.position;
        self.advance(); // consume opening quote

        let mut text = String::new();
        loop {
            if self.is_eof() {
                return Err(LexerError {
                    message: "Unterminated string literal".to_string(),
                    position: open_pos,
                });
            }

            let ch = self.current_char();
            self.advance();

            if ch == '\'' {
                // '' inside a string is an escaped quote
                if !self.is_eof() && self.current_char() == '\'' {
                    text.push('\'');
                    self.advance();
                } else {
                    return Ok(Token::StringLiteral(text));
                }
            } else {
                text.push(ch);
            }
        }
    }

    /// Tokenize an integer or decimal number.
    fn tokenize_number(&mut self) -> Result<Token, LexerError> {
        let start = self.position;
        let mut seen_dot = false;

        while !self.is_eof() {
            let ch = self.current_char();
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let text: String = self.input[start..self.position].iter().collect();
        if text == "." {
            return Err(LexerError {
                message: "Invalid number: '.'".to_string(),
                position: start,
            });
        }
        Ok(Token::Number(text))
    }

    fn skip_whitespace(&mut self) {
        while !self.is_eof() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    fn current_char(&self) -> char {
        self.input[self.position]
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }
}
