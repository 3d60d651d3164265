//! Token values produced by the scanner.
//!
//! A [`Token`] is an immutable record of one scanned lexeme: its
//! classification, the exact matched text, and the 1-based line/column of
//! its first character. Tokens are produced fresh per [`next_token`]
//! call and owned by the caller.
//!
//! [`next_token`]: crate::Lexer::next_token

use std::fmt;

/// Classification of a scanned lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Letters, digits, and `_`, starting with a letter or `_`.
    Identifier,
    /// Digits with at most one interior `.`.
    Number,
    /// Single operator character or one of the compound pairs
    /// (`==`, `!=`, `>=`, `<=`, `&&`, `||`).
    Operator,
    /// An identifier that matched the reserved-word set.
    Keyword,
    /// Double-quoted text, delimiters included in the lexeme.
    StringLiteral,
    /// `//` line comment or `/* */` block comment, delimiters included.
    Comment,
    /// `(` or `)`.
    Parenthesis,
    /// `[` or `]`.
    Bracket,
    /// `{` or `}`.
    Brace,
    /// `;`.
    Semicolon,
    /// `,`.
    Comma,
    /// End of the input stream. Emitted indefinitely once reached.
    Eof,
    /// Any byte no other class claims, one byte per token.
    Unknown,
}

impl TokenKind {
    /// Uppercase name used in token dumps (`IDENTIFIER`, `EOF`, ...).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Comment => "COMMENT",
            TokenKind::Parenthesis => "PARENTHESIS",
            TokenKind::Bracket => "BRACKET",
            TokenKind::Brace => "BRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Eof => "EOF",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scanned token.
///
/// `line` and `column` are 1-based and name the position of the token's
/// first character. The lexeme is the exact matched text; string and
/// comment lexemes include their delimiters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// Returns `true` for the end-of-stream token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, '{}', line={}, column={})",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

#[cfg(test)]
mod tests;
