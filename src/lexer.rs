//! JSON lexer/tokenizer.
//!
//! Converts input text into a single-pass stream of tokens for the parser.
//! Strings are unescaped here (including `\uXXXX` surrogate pairs); number
//! lexemes are validated against the grammar but handed to the parser raw,
//! since numeric conversion policy lives there.
//!
//! Every token is reported together with the byte offset of its first
//! character, and every error carries the offset where it was detected.

use crate::error::{ErrorKind, ParseError};

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// Null literal
    Null,
    /// True literal
    True,
    /// False literal
    False,
    /// String value (unescaped)
    String(String),
    /// Number value (raw lexeme, grammar-validated)
    Number(String),
    /// End of input
    Eof,
}

/// Cursor-based JSON lexer.
///
/// Non-restartable: tokens are produced in one forward pass and consumed by
/// the parser via a peek/advance pair built on [`next_token`].
///
/// [`next_token`]: Lexer::next_token
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Peek at the current byte without consuming it.
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume and return the current byte.
    fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Skip whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Read the next token, returning it with its starting byte offset.
    pub fn next_token(&mut self) -> Result<(Token, usize), ParseError> {
        self.skip_whitespace();
        let start = self.pos;

        let token = match self.peek() {
            None => Token::Eof,
            Some(b'{') => {
                self.advance();
                Token::LeftBrace
            }
            Some(b'}') => {
                self.advance();
                Token::RightBrace
            }
            Some(b'[') => {
                self.advance();
                Token::LeftBracket
            }
            Some(b']') => {
                self.advance();
                Token::RightBracket
            }
            Some(b':') => {
                self.advance();
                Token::Colon
            }
            Some(b',') => {
                self.advance();
                Token::Comma
            }
            Some(b'"') => self.read_string(start)?,
            Some(b'-' | b'0'..=b'9') => self.read_number(start)?,
            Some(b't') => {
                self.expect_bytes(b"true", start)?;
                Token::True
            }
            Some(b'f') => {
                self.expect_bytes(b"false", start)?;
                Token::False
            }
            Some(b'n') => {
                self.expect_bytes(b"null", start)?;
                Token::Null
            }
            Some(_) => {
                return Err(ParseError::new(ErrorKind::UnexpectedCharacter, start));
            }
        };

        Ok((token, start))
    }

    /// Read a string token, handling escape sequences.
    ///
    /// Unescaped runs are copied by slice. Quote and backslash bytes cannot
    /// occur inside a multi-byte UTF-8 sequence, so every slice boundary is
    /// a char boundary and non-ASCII content passes through verbatim.
    fn read_string(&mut self, start: usize) -> Result<Token, ParseError> {
        // Consume opening quote
        self.advance();

        let mut result = String::new();
        let mut chunk = self.pos;

        loop {
            match self.advance() {
                None => return Err(ParseError::new(ErrorKind::UnterminatedString, start)),
                Some(b'"') => {
                    result.push_str(&self.input[chunk..self.pos - 1]);
                    return Ok(Token::String(result));
                }
                Some(b'\\') => {
                    result.push_str(&self.input[chunk..self.pos - 1]);
                    let escaped = self.read_escape_sequence(self.pos - 1)?;
                    result.push(escaped);
                    chunk = self.pos;
                }
                Some(b) if b < 0x20 => {
                    // Raw control characters are not allowed in strings
                    return Err(ParseError::new(
                        ErrorKind::UnexpectedCharacter,
                        self.pos - 1,
                    ));
                }
                Some(_) => {}
            }
        }
    }

    /// Read an escape sequence after a backslash at `esc`.
    fn read_escape_sequence(&mut self, esc: usize) -> Result<char, ParseError> {
        match self.advance() {
            Some(b'"') => Ok('"'),
            Some(b'\\') => Ok('\\'),
            Some(b'/') => Ok('/'),
            Some(b'b') => Ok('\x08'),
            Some(b'f') => Ok('\x0C'),
            Some(b'n') => Ok('\n'),
            Some(b'r') => Ok('\r'),
            Some(b't') => Ok('\t'),
            Some(b'u') => self.read_unicode_escape(esc),
            _ => Err(ParseError::new(ErrorKind::InvalidEscape, esc)),
        }
    }

    /// Read a `\uXXXX` unicode escape, combining surrogate pairs.
    fn read_unicode_escape(&mut self, esc: usize) -> Result<char, ParseError> {
        let unit = self.read_hex4(esc)?;

        // High surrogate: must be immediately followed by a low surrogate
        if (0xD800..=0xDBFF).contains(&unit) {
            if self.advance() != Some(b'\\') || self.advance() != Some(b'u') {
                return Err(ParseError::new(ErrorKind::InvalidEscape, esc));
            }
            let low = self.read_hex4(esc)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(ParseError::new(ErrorKind::InvalidEscape, esc));
            }
            let scalar = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
            return char::from_u32(scalar).ok_or(ParseError::new(ErrorKind::InvalidEscape, esc));
        }

        // Lone low surrogate
        if (0xDC00..=0xDFFF).contains(&unit) {
            return Err(ParseError::new(ErrorKind::InvalidEscape, esc));
        }

        char::from_u32(u32::from(unit)).ok_or(ParseError::new(ErrorKind::InvalidEscape, esc))
    }

    /// Read 4 hex digits and return their value.
    fn read_hex4(&mut self, esc: usize) -> Result<u16, ParseError> {
        let mut value: u16 = 0;
        for _ in 0..4 {
            let digit = match self.advance() {
                Some(b @ b'0'..=b'9') => b - b'0',
                Some(b @ b'a'..=b'f') => b - b'a' + 10,
                Some(b @ b'A'..=b'F') => b - b'A' + 10,
                _ => return Err(ParseError::new(ErrorKind::InvalidEscape, esc)),
            };
            value = (value << 4) | u16::from(digit);
        }
        Ok(value)
    }

    /// Read a number token matching
    /// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
    fn read_number(&mut self, start: usize) -> Result<Token, ParseError> {
        if self.peek() == Some(b'-') {
            self.advance();
        }

        // Integer part; a leading zero must stand alone
        match self.peek() {
            Some(b'0') => {
                self.advance();
                if let Some(b'0'..=b'9') = self.peek() {
                    return Err(ParseError::new(ErrorKind::InvalidNumber, start));
                }
            }
            Some(b'1'..=b'9') => {
                while let Some(b'0'..=b'9') = self.peek() {
                    self.advance();
                }
            }
            _ => return Err(ParseError::new(ErrorKind::InvalidNumber, start)),
        }

        // Fractional part
        if self.peek() == Some(b'.') {
            self.advance();
            self.read_digits(start)?;
        }

        // Exponent
        if let Some(b'e' | b'E') = self.peek() {
            self.advance();
            if let Some(b'+' | b'-') = self.peek() {
                self.advance();
            }
            self.read_digits(start)?;
        }

        Ok(Token::Number(self.input[start..self.pos].to_string()))
    }

    /// Read one or more digits.
    fn read_digits(&mut self, start: usize) -> Result<(), ParseError> {
        match self.peek() {
            Some(b'0'..=b'9') => {
                while let Some(b'0'..=b'9') = self.peek() {
                    self.advance();
                }
                Ok(())
            }
            _ => Err(ParseError::new(ErrorKind::InvalidNumber, start)),
        }
    }

    /// Expect an exact literal at the current position.
    fn expect_bytes(&mut self, expected: &[u8], start: usize) -> Result<(), ParseError> {
        for &b in expected {
            if self.advance() != Some(b) {
                return Err(ParseError::new(ErrorKind::UnexpectedCharacter, start));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Result<Vec<Token>, ParseError> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            let (token, _) = lexer.next_token()?;
            if token == Token::Eof {
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    #[test]
    fn test_structural_tokens() {
        let tokens = lex("{}[],:").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LeftBrace,
                Token::RightBrace,
                Token::LeftBracket,
                Token::RightBracket,
                Token::Comma,
                Token::Colon,
            ]
        );
    }

    #[test]
    fn test_token_offsets() {
        let mut lexer = Lexer::new("  [ 12 ]");
        assert_eq!(lexer.next_token().unwrap(), (Token::LeftBracket, 2));
        assert_eq!(lexer.next_token().unwrap(), (Token::Number("12".into()), 4));
        assert_eq!(lexer.next_token().unwrap(), (Token::RightBracket, 7));
        assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 8));
    }

    #[test]
    fn test_literals() {
        let tokens = lex("null true false").unwrap();
        assert_eq!(tokens, vec![Token::Null, Token::True, Token::False]);
    }

    #[test]
    fn test_misspelled_literal_rejected() {
        let err = lex("nul").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedCharacter);
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_string() {
        let tokens = lex(r#""hello""#).unwrap();
        assert_eq!(tokens, vec![Token::String("hello".to_string())]);
    }

    #[test]
    fn test_string_escapes() {
        let tokens = lex(r#""a\nb\tc\"d\\e\/f""#).unwrap();
        assert_eq!(tokens, vec![Token::String("a\nb\tc\"d\\e/f".to_string())]);
    }

    #[test]
    fn test_non_ascii_passthrough() {
        let tokens = lex("\"héllo ☃\"").unwrap();
        assert_eq!(tokens, vec![Token::String("héllo ☃".to_string())]);
    }

    #[test]
    fn test_unicode_escape() {
        let tokens = lex(r#""\u0041""#).unwrap();
        assert_eq!(tokens, vec![Token::String("A".to_string())]);
    }

    #[test]
    fn test_unicode_escape_bmp() {
        let tokens = lex(r#""\u00e9\u2603""#).unwrap();
        assert_eq!(tokens, vec![Token::String("é☃".to_string())]);
    }

    #[test]
    fn test_surrogate_pair_combined() {
        // \uD83D\uDE00 = U+1F600
        let tokens = lex(r#""\uD83D\uDE00""#).unwrap();
        assert_eq!(tokens, vec![Token::String("\u{1F600}".to_string())]);
    }

    #[test]
    fn test_surrogate_pair_lowercase_hex() {
        let tokens = lex(r#""\ud83d\ude00""#).unwrap();
        assert_eq!(tokens, vec![Token::String("\u{1F600}".to_string())]);
    }

    #[test]
    fn test_unpaired_high_surrogate_rejected() {
        let err = lex(r#""\uD800""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEscape);
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn test_lone_low_surrogate_rejected() {
        let err = lex(r#""\uDC00""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEscape);
    }

    #[test]
    fn test_high_surrogate_with_bad_low_rejected() {
        let err = lex(r#""\uD800A""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEscape);
    }

    #[test]
    fn test_unknown_escape_rejected() {
        let err = lex(r#""\x""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEscape);
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn test_bad_hex_digits_rejected() {
        let err = lex(r#""\u12G4""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEscape);
    }

    #[test]
    fn test_unterminated_string() {
        let err = lex(r#""abc"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnterminatedString);
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_control_character_rejected() {
        let err = lex("\"a\nb\"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedCharacter);
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn test_numbers() {
        let tokens = lex("42 -123 0 3.14 1e10 -2.5E-3").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number("42".to_string()),
                Token::Number("-123".to_string()),
                Token::Number("0".to_string()),
                Token::Number("3.14".to_string()),
                Token::Number("1e10".to_string()),
                Token::Number("-2.5E-3".to_string()),
            ]
        );
    }

    #[test]
    fn test_leading_zero_rejected() {
        let err = lex("01").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNumber);
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_bare_minus_rejected() {
        let err = lex("-").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNumber);
    }

    #[test]
    fn test_trailing_dot_rejected() {
        let err = lex("1.").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNumber);
    }

    #[test]
    fn test_empty_exponent_rejected() {
        assert_eq!(lex("1e").unwrap_err().kind(), ErrorKind::InvalidNumber);
        assert_eq!(lex("1e+").unwrap_err().kind(), ErrorKind::InvalidNumber);
    }

    #[test]
    fn test_stray_character_rejected() {
        let err = lex("@").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedCharacter);
        assert_eq!(err.offset(), 0);
    }
}
