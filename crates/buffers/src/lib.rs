//! Byte sources with cursor tracking.
//!
//! The JSON pull iterator in `ocm-model` consumes its input one byte at a
//! time through the [`Source`] trait. Two sources are provided:
//!
//! - [`Reader`] - reads from a byte slice that is already in memory
//! - [`StreamingReader`] - pulls chunks on demand from any [`std::io::Read`]
//!
//! # Example
//!
//! ```
//! use ocm_buffers::{Reader, Source, StreamingReader};
//!
//! let mut reader = Reader::new(b"ab");
//! assert_eq!(Source::peek(&mut reader).unwrap(), Some(b'a'));
//! assert_eq!(reader.next_byte().unwrap(), Some(b'a'));
//! assert_eq!(reader.position(), 1);
//!
//! let mut stream = StreamingReader::with_alloc_size(&b"xyz"[..], 2);
//! assert_eq!(stream.next_byte().unwrap(), Some(b'x'));
//! assert_eq!(stream.next_byte().unwrap(), Some(b'y'));
//! assert_eq!(stream.next_byte().unwrap(), Some(b'z'));
//! assert_eq!(stream.next_byte().unwrap(), None);
//! ```

mod reader;
mod source;
mod streaming_reader;

pub use reader::Reader;
pub use source::Source;
pub use streaming_reader::StreamingReader;
