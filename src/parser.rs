// src/parser.rs
//! Parsing multivectors from text, e.g. `1.0 - 2.5*e1^ni + no^e2`.
//!
//! Grammar:
//!
//! ```text
//! mv   := sign* term (sign+ term)*
//! term := number ((* | ^) blade)? | blade
//! blade := basis_vector (^ basis_vector)*
//! ```
//!
//! Anything the renderer in [`crate::format`] produces with its default
//! separators parses back.

use std::str::FromStr;

use tracing::debug;

use crate::basis::{basis_vector_index, BASIS_ELEMENT_INDEX_BY_BITMAP, BASIS_ELEMENT_SIGN_BY_INDEX, NB_BLADES};
use crate::blade::BasisBlade;
use crate::error::{ParseError, ParseErrorKind};
use crate::multivector::Multivector;
use crate::types::Scalar;

/// Source name used in error messages when none is given.
pub const DEFAULT_SOURCE_NAME: &str = "string";

#[derive(Copy, Clone, Debug, PartialEq)]
enum Token {
    End,
    Wedge,
    Mul,
    Plus,
    Minus,
    /// Character range `start..end` of a number.
    Number { start: usize, end: usize },
    BasisVector(usize),
    /// A token that is only an error if the grammar needs it.
    Bad(ParseErrorKind),
}

struct Parser<'a> {
    input: Vec<char>,
    source_name: &'a str,
    // next unread character
    pos: usize,
    // start of the current token
    token_start: usize,
    line: usize,
    line_start: usize,
    // last character of the previous token and its line; errors at end of
    // input point there
    last_char: usize,
    last_line: usize,
    last_line_start: usize,
    coords: [Scalar; NB_BLADES],
}

/// Parse a multivector; errors name the source `"string"`.
pub fn parse(s: &str) -> Result<Multivector, ParseError> {
    parse_named(s, DEFAULT_SOURCE_NAME)
}

/// Parse a multivector, naming `source_name` in error messages. An empty
/// name falls back to `"string"`.
pub fn parse_named(s: &str, source_name: &str) -> Result<Multivector, ParseError> {
    let source_name = if source_name.is_empty() { DEFAULT_SOURCE_NAME } else { source_name };
    Parser::new(s, source_name).parse().map_err(|e| {
        debug!(kind = ?e.kind, line = e.line, column = e.column, "multivector parse failed");
        e
    })
}

impl FromStr for Multivector {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        parse(s)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl<'a> Parser<'a> {
    fn new(input: &str, source_name: &'a str) -> Self {
        Self {
            input: input.chars().collect(),
            source_name,
            pos: 0,
            token_start: 0,
            line: 0,
            line_start: 0,
            last_char: 0,
            last_line: 0,
            last_line_start: 0,
            coords: [0.0; NB_BLADES],
        }
    }

    fn peek(&self, i: usize) -> Option<char> {
        self.input.get(i).copied()
    }

    fn is_digit_at(&self, i: usize) -> bool {
        self.peek(i).is_some_and(|c| c.is_ascii_digit())
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            source_name: self.source_name.to_string(),
            line: self.line + 1,
            column: self.token_start - self.line_start + 1,
        }
    }

    fn next_token(&mut self) -> Token {
        while let Some(c) = self.peek(self.pos) {
            if c > ' ' {
                break;
            }
            if c == '\n' {
                self.line += 1;
                self.line_start = self.pos + 1;
            }
            self.pos += 1;
        }
        self.token_start = self.pos;

        let Some(c) = self.peek(self.pos) else {
            self.token_start = self.last_char;
            self.line = self.last_line;
            self.line_start = self.last_line_start;
            return Token::End;
        };
        self.pos += 1;
        let token = match c {
            '^' => Token::Wedge,
            '*' => Token::Mul,
            '+' => Token::Plus,
            '-' => Token::Minus,
            c if c.is_ascii_digit() || c == '.' => self.number(),
            c if is_identifier_start(c) => {
                while self.peek(self.pos).is_some_and(is_identifier_char) {
                    self.pos += 1;
                }
                let name: String = self.input[self.token_start..self.pos].iter().collect();
                match basis_vector_index(&name) {
                    Some(i) => Token::BasisVector(i),
                    None => Token::Bad(ParseErrorKind::BadIdentifier),
                }
            }
            _ => Token::Bad(ParseErrorKind::BadCharacter),
        };
        self.last_char = self.pos - 1;
        self.last_line = self.line;
        self.last_line_start = self.line_start;
        token
    }

    /// Digits with at most one point, then an optional exponent. The first
    /// character has already been consumed.
    fn number(&mut self) -> Token {
        let mut point = self.input[self.token_start] == '.';
        while let Some(c) = self.peek(self.pos) {
            if c.is_ascii_digit() {
                self.pos += 1;
            } else if c == '.' && !point {
                point = true;
                self.pos += 1;
            } else {
                break;
            }
        }
        if matches!(self.peek(self.pos), Some('e' | 'E')) {
            self.pos += 1;
            if matches!(self.peek(self.pos), Some('+' | '-')) {
                self.pos += 1;
            }
            if !self.is_digit_at(self.pos) {
                return Token::Bad(ParseErrorKind::BadNumber);
            }
            while self.is_digit_at(self.pos) {
                self.pos += 1;
            }
        }
        Token::Number { start: self.token_start, end: self.pos }
    }

    fn number_value(&self, start: usize, end: usize) -> Result<Scalar, ParseError> {
        let text: String = self.input[start..end].iter().collect();
        text.parse().map_err(|_| self.error(ParseErrorKind::InvalidNumber))
    }

    /// Wedge `token (^ basis_vector)*` onto `blade`; returns the first token
    /// after the chain.
    fn blade(&mut self, blade: &mut BasisBlade, mut token: Token) -> Result<Token, ParseError> {
        loop {
            match token {
                Token::BasisVector(i) => blade.wedge_basis_vector(i),
                _ => return Err(self.error(ParseErrorKind::ExpectedBasisVector)),
            }
            token = self.next_token();
            if token != Token::Wedge {
                return Ok(token);
            }
            token = self.next_token();
        }
    }

    fn parse(mut self) -> Result<Multivector, ParseError> {
        let mut token = self.next_token();
        let mut first = true;
        while token != Token::End {
            let mut blade = BasisBlade::one();

            let mut signs = 0;
            while matches!(token, Token::Plus | Token::Minus) {
                if token == Token::Minus {
                    blade.multiply(-1.0);
                }
                signs += 1;
                token = self.next_token();
            }
            if !first && signs == 0 {
                return Err(self.error(ParseErrorKind::ExpectedSign));
            }

            token = match token {
                Token::Number { start, end } => {
                    blade.multiply(self.number_value(start, end)?);
                    match self.next_token() {
                        Token::Wedge | Token::Mul => {
                            let next = self.next_token();
                            self.blade(&mut blade, next)?
                        }
                        next => next,
                    }
                }
                Token::BasisVector(_) => self.blade(&mut blade, token)?,
                Token::Bad(kind) => return Err(self.error(kind)),
                _ => return Err(self.error(ParseErrorKind::UnexpectedToken)),
            };

            let idx = BASIS_ELEMENT_INDEX_BY_BITMAP[blade.bitmap as usize];
            self.coords[idx] += blade.scale / BASIS_ELEMENT_SIGN_BY_INDEX[idx];
            first = false;
        }

        let mut mv = Multivector::from_coordinates(&self.coords);
        mv.compress(0.0);
        Ok(mv)
    }
}
