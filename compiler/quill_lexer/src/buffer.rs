//! Double-buffered, sentinel-terminated input blocks.
//!
//! Two fixed-capacity blocks are filled alternately from the underlying
//! reader. Each block carries one extra slot so a `0x00` sentinel always
//! marks the first unfilled position; the scanner detects the end of a
//! block and the end of the stream without a length check on every read.
//!
//! When the active block is exhausted, [`DoubleBuffer::advance`] swaps to
//! the other block and immediately refills the block it just left
//! (synchronous prefetch, inline in the triggering call). One byte of
//! look-ahead past a block boundary is therefore always valid.
//!
//! # Invariants
//!
//! - Exactly one block is active at any time; the blocks live in a
//!   fixed-size array indexed by `active`, never swapped by pointer.
//! - A block is *terminated* when its most recent load read fewer bytes
//!   than `capacity` — the stream ended inside or at the end of it.
//! - End of stream is reached exactly when the active block is terminated
//!   and the position sits at its sentinel. Once the `exhausted` flag is
//!   set it is never cleared.

use std::io::{self, Read};

/// End-of-data marker stored in the slot after the last loaded byte.
///
/// `0x00` never occurs inside a UTF-8 multi-byte sequence, and an interior
/// NUL in the source is still told apart from the sentinel by position,
/// not by value.
pub const SENTINEL: u8 = 0x00;

/// Default capacity of each block, in bytes.
///
/// Most inputs fit a single block at this size; correctness never depends
/// on it (the token stream is identical for any capacity >= 1).
pub const DEFAULT_BLOCK_CAPACITY: usize = 4096;

/// One fixed-capacity block plus its trailing sentinel slot.
#[derive(Debug)]
struct Block {
    /// `capacity + 1` bytes; the slot after the loaded data holds [`SENTINEL`].
    bytes: Box<[u8]>,
    /// Number of valid bytes from the most recent load.
    len: usize,
    /// The most recent load read fewer than `capacity` bytes.
    terminated: bool,
}

impl Block {
    fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![SENTINEL; capacity + 1].into_boxed_slice(),
            len: 0,
            terminated: false,
        }
    }
}

/// Double-buffered reader with sentinel-terminated blocks.
///
/// Owns the underlying reader for its whole lifetime; the reader is
/// released exactly once when the buffer is dropped, whether or not the
/// stream was fully consumed.
#[derive(Debug)]
pub struct DoubleBuffer<R> {
    reader: R,
    blocks: [Block; 2],
    /// Index of the active block (0 or 1).
    active: usize,
    /// Position within the active block. Stays below `capacity` between
    /// calls; the boundary value triggers an immediate swap.
    pos: usize,
    capacity: usize,
    /// Latched once the active block is terminated and its sentinel has
    /// been reached. Never cleared.
    exhausted: bool,
}

impl<R: Read> DoubleBuffer<R> {
    /// Create a buffer and pre-load both blocks.
    ///
    /// A capacity below 1 is rounded up to 1. Fails only if the first
    /// reads from the source fail.
    pub fn new(reader: R, capacity: usize) -> io::Result<Self> {
        let capacity = capacity.max(1);
        let mut buffer = Self {
            reader,
            blocks: [Block::new(capacity), Block::new(capacity)],
            active: 0,
            pos: 0,
            capacity,
            exhausted: false,
        };
        buffer.load(0)?;
        buffer.load(1)?;
        Ok(buffer)
    }

    /// Fill block `index` from the reader.
    ///
    /// Retries short reads until the block is full or the source reports
    /// end of stream, then writes the sentinel at the first unfilled slot
    /// and records whether the source was exhausted during this load.
    fn load(&mut self, index: usize) -> io::Result<()> {
        let Self {
            reader,
            blocks,
            capacity,
            ..
        } = self;
        let block = &mut blocks[index];

        let mut filled = 0;
        while filled < *capacity {
            let n = reader.read(&mut block.bytes[filled..*capacity])?;
            if n == 0 {
                break;
            }
            filled += n;
        }

        block.len = filled;
        block.terminated = filled < *capacity;
        block.bytes[filled] = SENTINEL;
        Ok(())
    }

    /// The byte at the active position, or [`SENTINEL`] at end of stream.
    pub fn current(&self) -> u8 {
        if self.exhausted {
            return SENTINEL;
        }
        self.blocks[self.active].bytes[self.pos]
    }

    /// One byte ahead of the active position, without consuming anything.
    ///
    /// At a block boundary this reads the first byte of the inactive
    /// block, which the swap-time prefetch guarantees holds the next
    /// window of the stream (or its own sentinel if the stream is done).
    pub fn peek(&self) -> u8 {
        if self.at_end() {
            return SENTINEL;
        }
        let block = &self.blocks[self.active];
        let next = self.pos + 1;
        if next == self.capacity {
            return self.blocks[1 - self.active].bytes[0];
        }
        if block.terminated && next >= block.len {
            return SENTINEL;
        }
        block.bytes[next]
    }

    /// Returns `true` once the stream has no byte at the active position.
    ///
    /// True exactly when the active block was marked terminated by its
    /// last load and the position has reached its sentinel.
    pub fn at_end(&self) -> bool {
        if self.exhausted {
            return true;
        }
        let block = &self.blocks[self.active];
        block.terminated && self.pos >= block.len
    }

    /// Move one position forward, swapping blocks at the boundary.
    ///
    /// Crossing the boundary makes the prefetched block active and
    /// immediately reloads the block just left, so the next boundary
    /// crossing (and any look-ahead before it) is already covered.
    /// Advancing at end of stream latches the `exhausted` flag and is
    /// otherwise a no-op.
    pub fn advance(&mut self) -> io::Result<()> {
        if self.at_end() {
            self.exhausted = true;
            return Ok(());
        }

        self.pos += 1;
        if self.pos == self.capacity {
            self.active = 1 - self.active;
            self.pos = 0;
            let stale = 1 - self.active;
            self.load(stale)?;
        }
        Ok(())
    }

    /// Configured capacity of each block.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
