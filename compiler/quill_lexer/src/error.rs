//! Fatal scanner errors.
//!
//! Only two things can fail: opening the source at construction, and an
//! underlying read during a buffer refill. Malformed input is never an
//! error — unterminated strings and comments come back as best-effort
//! tokens and the next call returns EOF.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A fatal error from the scanner.
///
/// A failing read is not retried; scanning cannot continue past it.
#[derive(Debug, Error)]
pub enum LexError {
    /// The source file could not be opened.
    #[error("cannot open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An underlying read failed while refilling a buffer block.
    #[error("read error: {0}")]
    Read(#[from] io::Error),
}
