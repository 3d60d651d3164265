//! Line/column-tracking cursor over the double buffer.
//!
//! The cursor is the classifier's only view of the input: current byte,
//! one byte of look-ahead, and `advance`. Buffer refills and swaps happen
//! transparently underneath; line/column stay correct no matter which
//! block a newline lives in.
//!
//! Positions are 1-based. Consuming a line feed increments the line and
//! resets the column to 1; consuming any other byte increments the
//! column. A token's reported position is always captured *before* its
//! first byte is consumed.

use std::io::{self, Read};

use crate::buffer::DoubleBuffer;

/// Read cursor with 1-based line/column accounting.
#[derive(Debug)]
pub struct Cursor<R> {
    buffer: DoubleBuffer<R>,
    line: u32,
    column: u32,
}

impl<R: Read> Cursor<R> {
    /// Create a cursor over `reader`, pre-loading both buffer blocks.
    pub fn new(reader: R, capacity: usize) -> io::Result<Self> {
        Ok(Self {
            buffer: DoubleBuffer::new(reader, capacity)?,
            line: 1,
            column: 1,
        })
    }

    /// The byte at the cursor, or the sentinel at end of stream.
    pub fn current(&self) -> u8 {
        self.buffer.current()
    }

    /// One byte ahead of the cursor, spanning block boundaries.
    pub fn peek(&self) -> u8 {
        self.buffer.peek()
    }

    /// Returns `true` once every byte of the stream has been consumed.
    pub fn at_end(&self) -> bool {
        self.buffer.at_end()
    }

    /// Current line, 1-based.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column, 1-based.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Consume the current byte and update line/column.
    ///
    /// At end of stream this is a no-op that leaves line/column stable, so
    /// repeated EOF tokens report the same position.
    pub fn advance(&mut self) -> io::Result<()> {
        if self.buffer.at_end() {
            // Latches the buffer's exhausted flag; position is unchanged.
            return self.buffer.advance();
        }

        let consumed = self.buffer.current();
        self.buffer.advance()?;
        if consumed == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Ok(())
    }

    /// Consume and return the current byte.
    pub fn bump(&mut self) -> io::Result<u8> {
        let byte = self.current();
        self.advance()?;
        Ok(byte)
    }
}

#[cfg(test)]
mod tests;
