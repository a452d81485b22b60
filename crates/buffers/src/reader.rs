//! Byte slice reader with cursor tracking.

use std::io;

use crate::Source;

/// A reader over a byte slice.
///
/// The reader maintains a cursor position `x` and an exclusive end position.
///
/// # Example
///
/// ```
/// use ocm_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8(), Some(0x01));
/// reader.skip(2);
/// assert_eq!(reader.peek(), Some(0x04));
/// assert_eq!(reader.size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Creates a reader over `uint8[x..end]`.
    ///
    /// `end` is clamped to the length of the slice.
    pub fn from_slice(uint8: &'a [u8], x: usize, end: usize) -> Self {
        let end = end.min(uint8.len());
        Self {
            uint8,
            x: x.min(end),
            end,
        }
    }

    /// Resets the reader with a new byte slice.
    pub fn reset(&mut self, uint8: &'a [u8]) {
        self.x = 0;
        self.end = uint8.len();
        self.uint8 = uint8;
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    /// Peeks at the current byte without advancing the cursor.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        if self.x < self.end {
            Some(self.uint8[self.x])
        } else {
            None
        }
    }

    /// Advances the cursor by up to `length` bytes.
    pub fn skip(&mut self, length: usize) {
        self.x = (self.x + length).min(self.end);
    }

    /// Reads one byte.
    #[inline]
    pub fn u8(&mut self) -> Option<u8> {
        let val = Reader::peek(self)?;
        self.x += 1;
        Some(val)
    }

    /// Returns the unread part of the slice without advancing the cursor.
    pub fn rest(&self) -> &'a [u8] {
        &self.uint8[self.x..self.end]
    }
}

impl Source for Reader<'_> {
    #[inline]
    fn peek(&mut self) -> io::Result<Option<u8>> {
        Ok(Reader::peek(self))
    }

    #[inline]
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.u8())
    }

    #[inline]
    fn position(&self) -> usize {
        self.x
    }
}
