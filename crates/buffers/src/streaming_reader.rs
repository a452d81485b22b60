//! Streaming reader with internal buffer management.

use std::io::{self, Read};

use crate::Source;

/// A reader that pulls chunks from an [`io::Read`] on demand.
///
/// Only one chunk is kept in memory at a time, so arbitrarily large inputs
/// can be consumed without being materialized first.
pub struct StreamingReader<R> {
    inner: R,
    buf: Vec<u8>,
    /// Cursor inside `buf`.
    x: usize,
    /// Number of valid bytes in `buf`.
    filled: usize,
    /// Bytes discarded before `buf[0]`.
    consumed: usize,
    eof: bool,
}

impl<R: Read> StreamingReader<R> {
    /// Creates a new streaming reader with the default chunk size (16 KiB).
    pub fn new(inner: R) -> Self {
        Self::with_alloc_size(inner, 16 * 1024)
    }

    /// Creates a new streaming reader with a custom chunk size.
    ///
    /// A chunk size of zero is treated as one.
    pub fn with_alloc_size(inner: R, alloc_size: usize) -> Self {
        Self {
            inner,
            buf: vec![0; alloc_size.max(1)],
            x: 0,
            filled: 0,
            consumed: 0,
            eof: false,
        }
    }

    /// Returns the number of buffered bytes that have not been read yet.
    pub fn size(&self) -> usize {
        self.filled - self.x
    }

    /// Returns the wrapped reader, dropping any buffered bytes.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Makes sure at least one byte is buffered. Returns `false` at end of input.
    fn fill(&mut self) -> io::Result<bool> {
        if self.x < self.filled {
            return Ok(true);
        }
        if self.eof {
            return Ok(false);
        }
        self.consumed += self.filled;
        self.x = 0;
        self.filled = 0;
        let n = self.inner.read(&mut self.buf)?;
        if n == 0 {
            self.eof = true;
            return Ok(false);
        }
        self.filled = n;
        Ok(true)
    }
}

impl<R: Read> Source for StreamingReader<R> {
    fn peek(&mut self) -> io::Result<Option<u8>> {
        if self.fill()? {
            Ok(Some(self.buf[self.x]))
        } else {
            Ok(None)
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if self.fill()? {
            let val = self.buf[self.x];
            self.x += 1;
            Ok(Some(val))
        } else {
            Ok(None)
        }
    }

    fn position(&self) -> usize {
        self.consumed + self.x
    }
}
