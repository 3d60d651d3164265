//! Hand-written token classifier driving the cursor.
//!
//! One token per [`Lexer::next_token`] call. The main dispatch inspects
//! the first significant byte after whitespace and hands off to a focused
//! sub-scanner; each sub-scanner consumes the longest prefix its token
//! class allows (maximal munch) and builds the lexeme as it goes.
//!
//! # Recovery contract
//!
//! Malformed input is never an error. An unterminated string or block
//! comment is returned as a best-effort token holding everything scanned
//! so far, and the following call returns EOF. A stray byte becomes a
//! one-byte `Unknown` token. Every call terminates; once the stream is
//! exhausted, every further call returns an EOF token with the same
//! line/column. Only an underlying read failure aborts scanning.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::buffer::DEFAULT_BLOCK_CAPACITY;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::keywords::is_keyword;
use crate::token::{Token, TokenKind};

/// Returns `true` for bytes that may start an identifier.
#[inline]
fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Returns `true` for bytes that may continue an identifier.
#[inline]
fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Returns `true` if `byte` belongs to the fixed operator character set.
#[inline]
fn is_operator(byte: u8) -> bool {
    matches!(
        byte,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'>' | b'<' | b'!' | b'&' | b'|'
    )
}

/// Returns `true` if the two bytes form a compound operator.
///
/// The table is fixed: `==`, `!=`, `>=`, `<=`, `&&`, `||`.
#[inline]
fn is_compound_operator(first: u8, second: u8) -> bool {
    matches!(
        (first, second),
        (b'=', b'=') | (b'!', b'=') | (b'>', b'=') | (b'<', b'=') | (b'&', b'&') | (b'|', b'|')
    )
}

/// Decode accumulated lexeme bytes.
///
/// Valid UTF-8 (all ASCII token classes, and well-formed string/comment
/// bodies) passes through untouched; invalid sequences are replaced with
/// U+FFFD rather than failing, in keeping with the recovery contract.
fn lexeme_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Streaming lexer: pull-based, one [`Token`] per call.
///
/// Owns its character source exclusively; the source is released exactly
/// once when the lexer is dropped, whether or not EOF was reached.
#[derive(Debug)]
pub struct Lexer<R> {
    cursor: Cursor<R>,
}

impl Lexer<File> {
    /// Open `path` and build a lexer over it with the default block capacity.
    ///
    /// A missing or unreadable file is a fatal construction error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexError> {
        Self::from_path_with_capacity(path, DEFAULT_BLOCK_CAPACITY)
    }

    /// Open `path` with an explicit block capacity.
    pub fn from_path_with_capacity(
        path: impl AsRef<Path>,
        capacity: usize,
    ) -> Result<Self, LexError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LexError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::with_capacity(file, capacity)
    }
}

impl<R: Read> Lexer<R> {
    /// Build a lexer over any byte source with the default block capacity.
    pub fn new(reader: R) -> Result<Self, LexError> {
        Self::with_capacity(reader, DEFAULT_BLOCK_CAPACITY)
    }

    /// Build a lexer with an explicit block capacity.
    ///
    /// The capacity is a tuning knob only: the token stream is identical
    /// for any value. Construction pre-loads both buffer blocks, so a
    /// failing source is reported here.
    pub fn with_capacity(reader: R, capacity: usize) -> Result<Self, LexError> {
        Ok(Self {
            cursor: Cursor::new(reader, capacity)?,
        })
    }

    /// Produce the next token.
    ///
    /// Returns an `Eof` token once the stream is exhausted, and keeps
    /// returning it on every further call. Fails only if a buffer refill
    /// read fails.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace()?;

        let line = self.cursor.line();
        let column = self.cursor.column();

        if self.cursor.at_end() {
            return Ok(Token::new(TokenKind::Eof, "", line, column));
        }

        match self.cursor.current() {
            b if is_ident_start(b) => self.identifier_or_keyword(line, column),
            b'0'..=b'9' => self.number(line, column),
            b'"' => self.string_literal(line, column),
            b'/' if matches!(self.cursor.peek(), b'/' | b'*') => self.comment(line, column),
            b if is_operator(b) => self.operator(line, column),
            b'(' | b')' => self.single_byte(TokenKind::Parenthesis, line, column),
            b'[' | b']' => self.single_byte(TokenKind::Bracket, line, column),
            b'{' | b'}' => self.single_byte(TokenKind::Brace, line, column),
            b';' => self.single_byte(TokenKind::Semicolon, line, column),
            b',' => self.single_byte(TokenKind::Comma, line, column),
            _ => self.single_byte(TokenKind::Unknown, line, column),
        }
    }

    /// Consume whitespace without emitting tokens.
    ///
    /// Space, tab, CR, and LF; line/column updates happen in the cursor.
    /// The sentinel is not whitespace, so this terminates at end of stream.
    fn skip_whitespace(&mut self) -> Result<(), LexError> {
        while matches!(self.cursor.current(), b' ' | b'\t' | b'\r' | b'\n') {
            self.cursor.advance()?;
        }
        Ok(())
    }

    // --- Sub-scanners ---------------------------------------------------

    /// Letters, digits, `_`; reserved words become `Keyword`.
    fn identifier_or_keyword(&mut self, line: u32, column: u32) -> Result<Token, LexError> {
        let mut lexeme = Vec::new();
        while is_ident_continue(self.cursor.current()) {
            lexeme.push(self.cursor.bump()?);
        }

        let lexeme = lexeme_string(lexeme);
        let kind = if is_keyword(&lexeme) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Ok(Token::new(kind, lexeme, line, column))
    }

    /// Digits with at most one `.`.
    ///
    /// A second `.` terminates the number; it is left in place and starts
    /// the next token.
    fn number(&mut self, line: u32, column: u32) -> Result<Token, LexError> {
        let mut lexeme = Vec::new();
        let mut seen_dot = false;
        loop {
            let byte = self.cursor.current();
            if byte.is_ascii_digit() {
                lexeme.push(self.cursor.bump()?);
            } else if byte == b'.' && !seen_dot {
                seen_dot = true;
                lexeme.push(self.cursor.bump()?);
            } else {
                break;
            }
        }
        Ok(Token::new(
            TokenKind::Number,
            lexeme_string(lexeme),
            line,
            column,
        ))
    }

    /// Double-quoted string, delimiters included in the lexeme.
    ///
    /// A `\"` pair is consumed as two literal bytes and does not close the
    /// string. Reaching end of stream before the closing quote yields the
    /// truncated lexeme as scanned.
    fn string_literal(&mut self, line: u32, column: u32) -> Result<Token, LexError> {
        let mut lexeme = vec![self.cursor.bump()?]; // opening quote

        while !self.cursor.at_end() && self.cursor.current() != b'"' {
            if self.cursor.current() == b'\\' && self.cursor.peek() == b'"' {
                lexeme.push(self.cursor.bump()?);
            }
            lexeme.push(self.cursor.bump()?);
        }

        if !self.cursor.at_end() {
            lexeme.push(self.cursor.bump()?); // closing quote
        }

        Ok(Token::new(
            TokenKind::StringLiteral,
            lexeme_string(lexeme),
            line,
            column,
        ))
    }

    /// `//` to end of line (exclusive) or `/* */` inclusive.
    ///
    /// The dispatch guarantees the byte after the first `/` is `/` or `*`.
    /// An unterminated block comment swallows the rest of the stream.
    fn comment(&mut self, line: u32, column: u32) -> Result<Token, LexError> {
        let mut lexeme = vec![self.cursor.bump()?]; // first '/'

        if self.cursor.current() == b'/' {
            lexeme.push(self.cursor.bump()?);
            while !self.cursor.at_end() && self.cursor.current() != b'\n' {
                lexeme.push(self.cursor.bump()?);
            }
        } else {
            lexeme.push(self.cursor.bump()?); // '*'
            while !self.cursor.at_end()
                && !(self.cursor.current() == b'*' && self.cursor.peek() == b'/')
            {
                lexeme.push(self.cursor.bump()?);
            }
            if !self.cursor.at_end() {
                lexeme.push(self.cursor.bump()?); // '*'
                if !self.cursor.at_end() {
                    lexeme.push(self.cursor.bump()?); // '/'
                }
            }
        }

        Ok(Token::new(
            TokenKind::Comment,
            lexeme_string(lexeme),
            line,
            column,
        ))
    }

    /// Operator character, extended by one byte when the pair is compound.
    fn operator(&mut self, line: u32, column: u32) -> Result<Token, LexError> {
        let first = self.cursor.bump()?;
        let mut lexeme = vec![first];

        if !self.cursor.at_end() && is_compound_operator(first, self.cursor.current()) {
            lexeme.push(self.cursor.bump()?);
        }

        Ok(Token::new(
            TokenKind::Operator,
            lexeme_string(lexeme),
            line,
            column,
        ))
    }

    /// One-byte token of the given kind.
    fn single_byte(&mut self, kind: TokenKind, line: u32, column: u32) -> Result<Token, LexError> {
        let byte = self.cursor.bump()?;
        Ok(Token::new(kind, lexeme_string(vec![byte]), line, column))
    }
}
