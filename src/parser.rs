//! JSON parser.
//!
//! Recursive descent over the token stream, mirroring the JSON grammar: one
//! call frame per nesting level, one token of lookahead obtained lazily from
//! the lexer through a peek/next pair. Any JSON value is accepted at the
//! root, and the input must contain exactly one value.
//!
//! Policy choices (documented, tested):
//!
//! - Duplicate object keys: last value wins, the key keeps the position of
//!   its first occurrence.
//! - Integer lexemes that do not fit `i64` fall back to `f64`.
//! - Nesting depth is bounded by [`Limits::max_depth`] so pathological input
//!   cannot exhaust the call stack.

use indexmap::IndexMap;

use crate::error::{ErrorKind, ParseError};
use crate::lexer::{Lexer, Token};
use crate::limits::Limits;
use crate::value::{Number, Value};

/// Recursive-descent JSON parser.
///
/// Lookahead is lazy: the token after the top-level value is not lexed until
/// the parser checks for end of input, so malformed trailing bytes report as
/// [`ErrorKind::TrailingContent`] rather than a lexing error.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    lookahead: Option<(Token, usize)>,
    limits: Limits,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str, limits: Limits) -> Self {
        Self {
            lexer: Lexer::new(input),
            lookahead: None,
            limits,
            depth: 0,
        }
    }

    /// Parse the input as a single top-level value.
    pub fn parse(&mut self) -> Result<Value, ParseError> {
        {
            let (token, offset) = self.peek()?;
            if *token == Token::Eof {
                let offset = *offset;
                return Err(ParseError::new(ErrorKind::EmptyInput, offset));
            }
        }

        let value = self.parse_value()?;

        // Exactly one value: anything but EOF here is trailing content,
        // including bytes the lexer itself would reject.
        match self.peek() {
            Ok((Token::Eof, _)) => Ok(value),
            Ok((_, offset)) => {
                let offset = *offset;
                Err(ParseError::new(ErrorKind::TrailingContent, offset))
            }
            Err(e) => Err(ParseError::new(ErrorKind::TrailingContent, e.offset())),
        }
    }

    /// Peek at the next token without consuming it.
    fn peek(&mut self) -> Result<&(Token, usize), ParseError> {
        let entry = match self.lookahead.take() {
            Some(entry) => entry,
            None => self.lexer.next_token()?,
        };
        Ok(self.lookahead.insert(entry))
    }

    /// Consume and return the next token with its offset.
    fn next(&mut self) -> Result<(Token, usize), ParseError> {
        match self.lookahead.take() {
            Some(entry) => Ok(entry),
            None => self.lexer.next_token(),
        }
    }

    /// Parse a single JSON value.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let (token, offset) = self.next()?;
        match token {
            Token::Null => Ok(Value::Null),
            Token::True => Ok(Value::Bool(true)),
            Token::False => Ok(Value::Bool(false)),
            Token::String(s) => Ok(Value::String(s)),
            Token::Number(s) => Ok(Value::Number(parse_number(&s, offset)?)),
            Token::LeftBrace => self.parse_object(offset),
            Token::LeftBracket => self.parse_array(offset),
            _ => Err(ParseError::new(ErrorKind::UnexpectedToken, offset)),
        }
    }

    /// Enter one nesting level, enforcing the depth limit at the opening
    /// bracket's offset.
    fn enter(&mut self, open: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            return Err(ParseError::new(ErrorKind::MaxDepthExceeded, open));
        }
        Ok(())
    }

    /// Parse a JSON object; the opening brace is already consumed.
    fn parse_object(&mut self, open: usize) -> Result<Value, ParseError> {
        self.enter(open)?;

        let mut map = IndexMap::new();

        // Empty object
        if self.peek()?.0 == Token::RightBrace {
            self.next()?;
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            // Expect string key
            let key = match self.next()? {
                (Token::String(s), _) => s,
                (_, offset) => {
                    return Err(ParseError::new(ErrorKind::UnexpectedToken, offset));
                }
            };

            // Expect colon
            let (token, offset) = self.next()?;
            if token != Token::Colon {
                return Err(ParseError::new(ErrorKind::UnexpectedToken, offset));
            }

            // A repeated key overwrites the earlier value but keeps its
            // original position
            let value = self.parse_value()?;
            map.insert(key, value);

            // Expect comma or closing brace
            match self.next()? {
                (Token::Comma, _) => {
                    // Trailing comma is not allowed in JSON
                    let (next, offset) = self.peek()?;
                    if *next == Token::RightBrace {
                        let offset = *offset;
                        return Err(ParseError::new(ErrorKind::UnexpectedToken, offset));
                    }
                }
                (Token::RightBrace, _) => break,
                (_, offset) => {
                    return Err(ParseError::new(ErrorKind::UnexpectedToken, offset));
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    /// Parse a JSON array; the opening bracket is already consumed.
    fn parse_array(&mut self, open: usize) -> Result<Value, ParseError> {
        self.enter(open)?;

        let mut arr = Vec::new();

        // Empty array
        if self.peek()?.0 == Token::RightBracket {
            self.next()?;
            self.depth -= 1;
            return Ok(Value::Array(arr));
        }

        loop {
            arr.push(self.parse_value()?);

            // Expect comma or closing bracket
            match self.next()? {
                (Token::Comma, _) => {
                    // Trailing comma is not allowed in JSON
                    let (next, offset) = self.peek()?;
                    if *next == Token::RightBracket {
                        let offset = *offset;
                        return Err(ParseError::new(ErrorKind::UnexpectedToken, offset));
                    }
                }
                (Token::RightBracket, _) => break,
                (_, offset) => {
                    return Err(ParseError::new(ErrorKind::UnexpectedToken, offset));
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Array(arr))
    }
}

/// Convert a raw number lexeme into its in-memory representation.
///
/// Lexemes with no fraction or exponent try `i64` first and fall back to
/// `f64` on overflow. The grammar guarantees `f64` conversion itself cannot
/// fail; magnitudes beyond `f64` range come back infinite and are rejected.
fn parse_number(lexeme: &str, offset: usize) -> Result<Number, ParseError> {
    let is_integer = !lexeme.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'));
    if is_integer {
        if let Ok(n) = lexeme.parse::<i64>() {
            return Ok(Number::Int(n));
        }
    }

    let f: f64 = lexeme
        .parse()
        .map_err(|_| ParseError::new(ErrorKind::InvalidNumber, offset))?;
    if !f.is_finite() {
        return Err(ParseError::new(ErrorKind::InvalidNumber, offset));
    }
    Ok(Number::Float(f))
}

/// Parse JSON text into a [`Value`] with default limits.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_with_limits(input, Limits::default())
}

/// Parse JSON text into a [`Value`] with custom limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> Result<Value, ParseError> {
    Parser::new(input, limits).parse()
}
