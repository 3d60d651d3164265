//! Streaming tokenizer for Quill.
//!
//! Converts raw byte input into classified tokens using a double-buffered,
//! sentinel-terminated input scheme with one byte of bounded look-ahead.
//! The source is read block by block, so arbitrarily large inputs scan in
//! constant memory, and the configured block capacity never changes the
//! token stream.
//!
//! # Architecture
//!
//! ```text
//! reader (io::Read)
//!     │
//!     ▼
//! DoubleBuffer ──► blocks, sentinel, swap + prefetch
//!     │
//!     ▼
//! Cursor ──► current/peek/advance, line/column
//!     │
//!     ▼
//! Lexer::next_token() ──► Token
//! ```
//!
//! Control flows strictly downward; each layer only pulls from the one
//! beneath it.
//!
//! # Example
//!
//! ```
//! use quill_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new(&b"if (x >= 10) { return x; }"[..])?;
//!
//! let tok = lexer.next_token()?;
//! assert_eq!(tok.kind, TokenKind::Keyword);
//! assert_eq!(tok.lexeme, "if");
//! assert_eq!((tok.line, tok.column), (1, 1));
//!
//! let tok = lexer.next_token()?;
//! assert_eq!(tok.kind, TokenKind::Parenthesis);
//! # Ok::<(), quill_lexer::LexError>(())
//! ```
//!
//! # Recovery contract
//!
//! Malformed input never fails a scan. Unterminated strings and comments
//! come back as best-effort tokens, stray bytes become `Unknown` tokens,
//! and every call after end of stream returns an `Eof` token with a
//! stable position. The only fatal errors are opening the source and an
//! underlying read failing mid-scan.

pub mod buffer;
pub mod cursor;
pub mod error;
mod keywords;
pub mod scanner;
pub mod token;

pub use buffer::{DoubleBuffer, DEFAULT_BLOCK_CAPACITY, SENTINEL};
pub use cursor::Cursor;
pub use error::LexError;
pub use scanner::Lexer;
pub use token::{Token, TokenKind};
