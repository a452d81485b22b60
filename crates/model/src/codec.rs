//! JSON encoding and decoding of model values.
//!
//! Every attribute type implements [`JsonCodec`]: scalars directly, objects
//! and enums through the generating macros. The free functions here are the
//! entry points used by client code:
//!
//! ```
//! use ocm_model::codec;
//!
//! let names: Vec<String> = codec::from_str(r#"["a", "b"]"#).unwrap();
//! assert_eq!(codec::to_string(&names).unwrap(), r#"["a","b"]"#);
//! ```

use std::collections::BTreeMap;
use std::io::{Read, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use ocm_buffers::{Reader, Source, StreamingReader};

use crate::{Error, JsonIterator, JsonStream, ReaderOptions, WriterOptions};

/// A value with a JSON representation.
pub trait JsonCodec: Sized {
    /// Writes the value as one JSON value.
    fn write_json<W: Write>(&self, stream: &mut JsonStream<W>) -> Result<(), Error>;

    /// Reads one JSON value. `null` is not accepted here; absent attributes
    /// are handled by the enclosing object.
    fn read_json<S: Source>(iter: &mut JsonIterator<S>) -> Result<Self, Error>;
}

impl JsonCodec for bool {
    fn write_json<W: Write>(&self, stream: &mut JsonStream<W>) -> Result<(), Error> {
        stream.write_bool(*self)
    }

    fn read_json<S: Source>(iter: &mut JsonIterator<S>) -> Result<Self, Error> {
        iter.read_bool()
    }
}

impl JsonCodec for i32 {
    fn write_json<W: Write>(&self, stream: &mut JsonStream<W>) -> Result<(), Error> {
        stream.write_i64(i64::from(*self))
    }

    fn read_json<S: Source>(iter: &mut JsonIterator<S>) -> Result<Self, Error> {
        iter.read_i32()
    }
}

impl JsonCodec for i64 {
    fn write_json<W: Write>(&self, stream: &mut JsonStream<W>) -> Result<(), Error> {
        stream.write_i64(*self)
    }

    fn read_json<S: Source>(iter: &mut JsonIterator<S>) -> Result<Self, Error> {
        iter.read_i64()
    }
}

impl JsonCodec for f64 {
    fn write_json<W: Write>(&self, stream: &mut JsonStream<W>) -> Result<(), Error> {
        stream.write_f64(*self)
    }

    fn read_json<S: Source>(iter: &mut JsonIterator<S>) -> Result<Self, Error> {
        iter.read_f64()
    }
}

impl JsonCodec for String {
    fn write_json<W: Write>(&self, stream: &mut JsonStream<W>) -> Result<(), Error> {
        stream.write_str(self)
    }

    fn read_json<S: Source>(iter: &mut JsonIterator<S>) -> Result<Self, Error> {
        iter.read_string()
    }
}

/// Timestamps travel as RFC 3339 strings in UTC.
impl JsonCodec for DateTime<Utc> {
    fn write_json<W: Write>(&self, stream: &mut JsonStream<W>) -> Result<(), Error> {
        stream.write_str(&self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    fn read_json<S: Source>(iter: &mut JsonIterator<S>) -> Result<Self, Error> {
        let text = iter.read_string()?;
        DateTime::parse_from_rfc3339(&text)
            .map(|time| time.with_timezone(&Utc))
            .map_err(|_| iter.type_mismatch("RFC 3339 timestamp", format!("{text:?}")))
    }
}

impl<T: JsonCodec> JsonCodec for Vec<T> {
    fn write_json<W: Write>(&self, stream: &mut JsonStream<W>) -> Result<(), Error> {
        crate::list::write(self, stream)
    }

    fn read_json<S: Source>(iter: &mut JsonIterator<S>) -> Result<Self, Error> {
        crate::list::read(iter)
    }
}

impl<T: JsonCodec> JsonCodec for BTreeMap<String, T> {
    fn write_json<W: Write>(&self, stream: &mut JsonStream<W>) -> Result<(), Error> {
        stream.begin_object()?;
        for (key, value) in self {
            stream.field(key)?;
            value.write_json(stream)?;
        }
        stream.end_object()
    }

    fn read_json<S: Source>(iter: &mut JsonIterator<S>) -> Result<Self, Error> {
        let mut map = BTreeMap::new();
        iter.begin_object()?;
        while let Some(key) = iter.next_field()? {
            let value = T::read_json(iter)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}

/// Writes `value` into an existing stream.
pub fn write<T: JsonCodec, W: Write>(value: &T, stream: &mut JsonStream<W>) -> Result<(), Error> {
    value.write_json(stream)
}

/// Writes `value` as compact JSON and flushes the writer.
pub fn to_writer<T: JsonCodec, W: Write>(value: &T, writer: W) -> Result<(), Error> {
    to_writer_with(value, writer, &WriterOptions::default())
}

pub fn to_writer_with<T: JsonCodec, W: Write>(
    value: &T,
    writer: W,
    options: &WriterOptions,
) -> Result<(), Error> {
    let mut stream = JsonStream::with_options(writer, options);
    value.write_json(&mut stream)?;
    stream.flush()
}

pub fn to_vec<T: JsonCodec>(value: &T) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    to_writer(value, &mut out)?;
    Ok(out)
}

pub fn to_string<T: JsonCodec>(value: &T) -> Result<String, Error> {
    let out = to_vec(value)?;
    String::from_utf8(out).map_err(|err| Error::Encode {
        path: "$".into(),
        message: err.to_string(),
    })
}

/// Reads one value from an existing iterator, leaving the rest of the input.
pub fn read<T: JsonCodec, S: Source>(iter: &mut JsonIterator<S>) -> Result<T, Error> {
    T::read_json(iter)
}

/// Decodes a complete document. Only whitespace may follow the value.
pub fn from_slice<T: JsonCodec>(bytes: &[u8]) -> Result<T, Error> {
    from_slice_with(bytes, &ReaderOptions::default())
}

pub fn from_slice_with<T: JsonCodec>(bytes: &[u8], options: &ReaderOptions) -> Result<T, Error> {
    let mut iter = JsonIterator::with_options(Reader::new(bytes), options);
    read_document(&mut iter)
}

pub fn from_str<T: JsonCodec>(text: &str) -> Result<T, Error> {
    from_slice(text.as_bytes())
}

/// Decodes a complete document pulled from `reader` in chunks.
///
/// Errors raised by the reader are returned as [`Error::Io`] unchanged.
pub fn from_reader<T: JsonCodec, R: Read>(reader: R) -> Result<T, Error> {
    from_reader_with(reader, &ReaderOptions::default())
}

pub fn from_reader_with<T: JsonCodec, R: Read>(
    reader: R,
    options: &ReaderOptions,
) -> Result<T, Error> {
    let source = StreamingReader::with_alloc_size(reader, options.chunk_size);
    let mut iter = JsonIterator::with_options(source, options);
    read_document(&mut iter)
}

pub(crate) fn read_document<T: JsonCodec, S: Source>(
    iter: &mut JsonIterator<S>,
) -> Result<T, Error> {
    let value = T::read_json(iter)?;
    iter.finish()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn scalars() {
        assert_eq!(to_string(&true).unwrap(), "true");
        assert_eq!(to_string(&-12i32).unwrap(), "-12");
        assert_eq!(to_string(&2.5f64).unwrap(), "2.5");
        assert_eq!(to_string(&"q\"".to_string()).unwrap(), r#""q\"""#);
        assert_eq!(from_str::<i64>(" 42 ").unwrap(), 42);
        assert!(from_str::<bool>("null").is_err());
    }

    #[test]
    fn timestamps() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let text = to_string(&time).unwrap();
        assert_eq!(text, r#""2024-03-01T12:30:00Z""#);
        assert_eq!(from_str::<DateTime<Utc>>(&text).unwrap(), time);

        let shifted: DateTime<Utc> = from_str(r#""2024-03-01T14:30:00+02:00""#).unwrap();
        assert_eq!(shifted, time);

        let err = from_str::<DateTime<Utc>>(r#""yesterday""#).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: "RFC 3339 timestamp",
                ..
            }
        ));
    }

    #[test]
    fn maps_keep_key_order() {
        let mut map = BTreeMap::new();
        map.insert("b".to_string(), "2".to_string());
        map.insert("a".to_string(), "1".to_string());
        let text = to_string(&map).unwrap();
        assert_eq!(text, r#"{"a":"1","b":"2"}"#);
        let back: BTreeMap<String, String> = from_str(&text).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        assert!(matches!(
            from_str::<Vec<i64>>("[1] [2]"),
            Err(Error::Decode { offset: 4, .. })
        ));
        assert_eq!(from_str::<Vec<i64>>("[1]\n\t ").unwrap(), vec![1]);
    }

    #[test]
    fn pretty_writer() {
        let mut out = Vec::new();
        to_writer_with(&vec![1i64, 2], &mut out, &WriterOptions::pretty()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[\n  1,\n  2\n]");
    }
}
