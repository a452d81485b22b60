//! The byte source abstraction shared by in-memory and streaming inputs.

use std::io;

/// A forward-only byte source with one byte of lookahead.
///
/// Errors returned by a source come straight from the underlying reader;
/// implementations never retry and never wrap them.
pub trait Source {
    /// Returns the next byte without consuming it, or `None` at end of input.
    fn peek(&mut self) -> io::Result<Option<u8>>;

    /// Consumes and returns the next byte, or `None` at end of input.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;

    /// Number of bytes consumed so far.
    fn position(&self) -> usize;
}

impl<S: Source + ?Sized> Source for &mut S {
    #[inline]
    fn peek(&mut self) -> io::Result<Option<u8>> {
        (**self).peek()
    }

    #[inline]
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).next_byte()
    }

    #[inline]
    fn position(&self) -> usize {
        (**self).position()
    }
}
