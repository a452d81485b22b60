//! Pull-based JSON iterator.
//!
//! The iterator reads one token at a time from a [`Source`], so decoding can
//! start before the whole payload has arrived. Generated object decoders walk
//! the input with [`JsonIterator::begin_object`] / [`JsonIterator::next_field`]
//! and the typed `read_*` methods; anything they do not recognize is skipped
//! with [`JsonIterator::skip_value`].

use std::io::Read;

use ocm_buffers::{Reader, Source, StreamingReader};

use crate::{Error, ReaderOptions};

/// The kind of the next JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "boolean",
            Self::Null => "null",
        }
    }
}

#[derive(Debug)]
enum Frame {
    Object { key: Option<String>, started: bool },
    Array { index: usize, started: bool },
}

/// A streaming JSON tokenizer that tracks the path of the value being read.
pub struct JsonIterator<S> {
    source: S,
    frames: Vec<Frame>,
    max_depth: usize,
}

impl<'a> JsonIterator<Reader<'a>> {
    /// Iterates over an in-memory buffer.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self::new(Reader::new(bytes))
    }
}

impl<R: Read> JsonIterator<StreamingReader<R>> {
    /// Iterates over a reader, pulling chunks only when needed.
    pub fn from_reader(reader: R) -> Self {
        Self::from_reader_with(reader, &ReaderOptions::default())
    }

    pub fn from_reader_with(reader: R, options: &ReaderOptions) -> Self {
        Self::with_options(
            StreamingReader::with_alloc_size(reader, options.chunk_size),
            options,
        )
    }
}

impl<S: Source> JsonIterator<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, &ReaderOptions::default())
    }

    pub fn with_options(source: S, options: &ReaderOptions) -> Self {
        Self {
            source,
            frames: Vec::new(),
            max_depth: options.max_depth,
        }
    }

    /// Number of bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.source.position()
    }

    /// Number of objects and arrays currently open.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Location of the value being read, e.g. `$.aws.subnet_ids[2]`.
    pub fn path(&self) -> String {
        let mut path = String::from("$");
        for frame in &self.frames {
            match frame {
                Frame::Object { key: Some(key), .. } => {
                    path.push('.');
                    path.push_str(key);
                }
                Frame::Array {
                    index,
                    started: true,
                } => {
                    path.push('[');
                    path.push_str(&index.to_string());
                    path.push(']');
                }
                _ => {}
            }
        }
        path
    }

    /// Builds a syntax error at the current offset.
    pub fn syntax_error(&self, message: impl Into<String>) -> Error {
        Error::Decode {
            offset: self.offset(),
            message: message.into(),
        }
    }

    /// Builds a type mismatch error for the value at the current path.
    pub fn type_mismatch(&self, expected: &'static str, found: impl Into<String>) -> Error {
        Error::TypeMismatch {
            path: self.path(),
            expected,
            found: found.into(),
            offset: self.offset(),
        }
    }

    // ------------------------------------------------------------------
    // Byte level

    #[inline]
    fn peek(&mut self) -> Result<Option<u8>, Error> {
        Ok(self.source.peek()?)
    }

    #[inline]
    fn bump(&mut self) -> Result<Option<u8>, Error> {
        Ok(self.source.next_byte()?)
    }

    /// Skips whitespace and returns the next byte without consuming it.
    fn skip_ws(&mut self) -> Result<Option<u8>, Error> {
        loop {
            match self.peek()? {
                Some(b' ' | b'\t' | b'\n' | b'\r') => {
                    self.bump()?;
                }
                other => return Ok(other),
            }
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), Error> {
        match self.skip_ws()? {
            Some(b) if b == byte => {
                self.bump()?;
                Ok(())
            }
            Some(b) => Err(self.syntax_error(format!(
                "expected `{}`, found `{}`",
                byte as char,
                printable(b)
            ))),
            None => Err(self.syntax_error(format!(
                "expected `{}`, found end of input",
                byte as char
            ))),
        }
    }

    fn literal(&mut self, word: &'static str) -> Result<(), Error> {
        for &expected in word.as_bytes() {
            if self.bump()? != Some(expected) {
                return Err(self.syntax_error(format!("invalid literal, expected `{word}`")));
            }
        }
        Ok(())
    }

    fn check_depth(&self, extra: usize) -> Result<(), Error> {
        if self.frames.len() + extra >= self.max_depth {
            return Err(self.syntax_error(format!(
                "maximum nesting depth of {} exceeded",
                self.max_depth
            )));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Structure

    /// Returns the type of the next value without consuming it.
    pub fn whatis(&mut self) -> Result<ValueType, Error> {
        match self.skip_ws()? {
            Some(b'{') => Ok(ValueType::Object),
            Some(b'[') => Ok(ValueType::Array),
            Some(b'"') => Ok(ValueType::String),
            Some(b'-' | b'0'..=b'9') => Ok(ValueType::Number),
            Some(b't' | b'f') => Ok(ValueType::Bool),
            Some(b'n') => Ok(ValueType::Null),
            Some(b) => Err(self.syntax_error(format!("unexpected character `{}`", printable(b)))),
            None => Err(self.syntax_error("unexpected end of input")),
        }
    }

    /// Consumes the `{` that opens an object.
    pub fn begin_object(&mut self) -> Result<(), Error> {
        let kind = self.whatis()?;
        if kind != ValueType::Object {
            return Err(self.type_mismatch("object", kind.name()));
        }
        self.check_depth(0)?;
        self.bump()?;
        self.frames.push(Frame::Object {
            key: None,
            started: false,
        });
        Ok(())
    }

    /// Advances to the next key of the innermost object.
    ///
    /// Returns `None` after consuming the closing `}`. The value of the
    /// returned key must be consumed before calling this again.
    pub fn next_field(&mut self) -> Result<Option<String>, Error> {
        let started = match self.frames.last() {
            Some(Frame::Object { started, .. }) => *started,
            _ => return Err(self.syntax_error("not inside an object")),
        };
        let mut next = self.skip_ws()?;
        if started {
            match next {
                Some(b',') => {
                    self.bump()?;
                    next = self.skip_ws()?;
                    if next != Some(b'"') {
                        return Err(self.syntax_error("expected string key after `,`"));
                    }
                }
                Some(b'}') => {
                    self.bump()?;
                    self.frames.pop();
                    return Ok(None);
                }
                _ => return Err(self.syntax_error("expected `,` or `}` in object")),
            }
        } else {
            match next {
                Some(b'}') => {
                    self.bump()?;
                    self.frames.pop();
                    return Ok(None);
                }
                Some(b'"') => {}
                _ => return Err(self.syntax_error("expected string key or `}`")),
            }
        }
        let key = self.parse_string()?;
        self.expect(b':')?;
        if let Some(Frame::Object { key: slot, started }) = self.frames.last_mut() {
            *slot = Some(key.clone());
            *started = true;
        }
        Ok(Some(key))
    }

    /// Consumes the `[` that opens an array.
    pub fn begin_array(&mut self) -> Result<(), Error> {
        let kind = self.whatis()?;
        if kind != ValueType::Array {
            return Err(self.type_mismatch("array", kind.name()));
        }
        self.check_depth(0)?;
        self.bump()?;
        self.frames.push(Frame::Array {
            index: 0,
            started: false,
        });
        Ok(())
    }

    /// Advances to the next element of the innermost array.
    ///
    /// Returns `false` after consuming the closing `]`.
    pub fn next_element(&mut self) -> Result<bool, Error> {
        let started = match self.frames.last() {
            Some(Frame::Array { started, .. }) => *started,
            _ => return Err(self.syntax_error("not inside an array")),
        };
        let next = self.skip_ws()?;
        if next == Some(b']') {
            self.bump()?;
            self.frames.pop();
            return Ok(false);
        }
        if started {
            if next != Some(b',') {
                return Err(self.syntax_error("expected `,` or `]` in array"));
            }
            self.bump()?;
        }
        if let Some(Frame::Array { index, started }) = self.frames.last_mut() {
            if *started {
                *index += 1;
            }
            *started = true;
        }
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Scalars

    /// Consumes a `null` if one is next.
    pub fn read_null(&mut self) -> Result<bool, Error> {
        if self.skip_ws()? == Some(b'n') {
            self.literal("null")?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn read_bool(&mut self) -> Result<bool, Error> {
        match self.whatis()? {
            ValueType::Bool => {
                if self.peek()? == Some(b't') {
                    self.literal("true")?;
                    Ok(true)
                } else {
                    self.literal("false")?;
                    Ok(false)
                }
            }
            other => Err(self.type_mismatch("boolean", other.name())),
        }
    }

    pub fn read_string(&mut self) -> Result<String, Error> {
        match self.whatis()? {
            ValueType::String => self.parse_string(),
            other => Err(self.type_mismatch("string", other.name())),
        }
    }

    pub fn read_f64(&mut self) -> Result<f64, Error> {
        let text = self.read_number_text("number")?;
        let value: f64 = text
            .parse()
            .map_err(|_| self.syntax_error(format!("invalid number `{text}`")))?;
        if !value.is_finite() {
            return Err(self.type_mismatch("finite number", text));
        }
        Ok(value)
    }

    pub fn read_i64(&mut self) -> Result<i64, Error> {
        let text = self.read_number_text("integer")?;
        if text.contains(['.', 'e', 'E']) {
            return Err(self.type_mismatch("integer", text));
        }
        text.parse()
            .map_err(|_| self.type_mismatch("64-bit integer", text))
    }

    pub fn read_i32(&mut self) -> Result<i32, Error> {
        let value = self.read_i64()?;
        i32::try_from(value).map_err(|_| self.type_mismatch("32-bit integer", value.to_string()))
    }

    fn read_number_text(&mut self, expected: &'static str) -> Result<String, Error> {
        match self.whatis()? {
            ValueType::Number => self.scan_number(),
            other => Err(self.type_mismatch(expected, other.name())),
        }
    }

    // ------------------------------------------------------------------
    // Skipping

    /// Consumes the next value whatever its type.
    pub fn skip_value(&mut self) -> Result<(), Error> {
        self.skip_any(0)
    }

    /// Skips the value of a key the caller does not recognize.
    pub fn skip_unknown(&mut self, key: &str) -> Result<(), Error> {
        tracing::trace!(field = key, offset = self.offset(), "skipping unknown field");
        self.skip_value()
    }

    /// Checks that only whitespace is left after the top-level value.
    pub fn finish(&mut self) -> Result<(), Error> {
        match self.skip_ws()? {
            None => Ok(()),
            Some(_) => Err(self.syntax_error("trailing characters after JSON value")),
        }
    }

    fn skip_any(&mut self, nested: usize) -> Result<(), Error> {
        match self.whatis()? {
            ValueType::Object => {
                self.check_depth(nested)?;
                self.bump()?;
                if self.skip_ws()? == Some(b'}') {
                    self.bump()?;
                    return Ok(());
                }
                loop {
                    if self.skip_ws()? != Some(b'"') {
                        return Err(self.syntax_error("expected string key"));
                    }
                    self.skip_string()?;
                    self.expect(b':')?;
                    self.skip_any(nested + 1)?;
                    match self.skip_ws()? {
                        Some(b',') => {
                            self.bump()?;
                        }
                        Some(b'}') => {
                            self.bump()?;
                            return Ok(());
                        }
                        _ => return Err(self.syntax_error("expected `,` or `}` in object")),
                    }
                }
            }
            ValueType::Array => {
                self.check_depth(nested)?;
                self.bump()?;
                if self.skip_ws()? == Some(b']') {
                    self.bump()?;
                    return Ok(());
                }
                loop {
                    self.skip_any(nested + 1)?;
                    match self.skip_ws()? {
                        Some(b',') => {
                            self.bump()?;
                        }
                        Some(b']') => {
                            self.bump()?;
                            return Ok(());
                        }
                        _ => return Err(self.syntax_error("expected `,` or `]` in array")),
                    }
                }
            }
            ValueType::String => self.skip_string(),
            ValueType::Number => self.scan_number().map(drop),
            ValueType::Bool => {
                if self.peek()? == Some(b't') {
                    self.literal("true")
                } else {
                    self.literal("false")
                }
            }
            ValueType::Null => self.literal("null"),
        }
    }

    // ------------------------------------------------------------------
    // Lexing

    /// Reads a quoted string, the cursor being on the opening quote.
    fn parse_string(&mut self) -> Result<String, Error> {
        self.bump()?;
        let mut out: Vec<u8> = Vec::new();
        loop {
            match self.bump()? {
                None => return Err(self.syntax_error("unterminated string")),
                Some(b'"') => break,
                Some(b'\\') => {
                    let ch = self.parse_escape()?;
                    let mut utf8 = [0u8; 4];
                    out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
                }
                Some(b) if b < 0x20 => {
                    return Err(self.syntax_error("control character in string"));
                }
                Some(b) => out.push(b),
            }
        }
        String::from_utf8(out).map_err(|_| self.syntax_error("invalid UTF-8 in string"))
    }

    /// Skips a quoted string without allocating. Multi-byte sequences are
    /// still checked, so skipped and read strings reject the same input.
    fn skip_string(&mut self) -> Result<(), Error> {
        self.bump()?;
        let mut seq = [0u8; 4];
        let mut have = 0;
        let mut width = 0;
        loop {
            let byte = self.bump()?;
            if have < width {
                match byte {
                    Some(b @ 0x80..=0xBF) => {
                        seq[have] = b;
                        have += 1;
                        if have == width && std::str::from_utf8(&seq[..width]).is_err() {
                            return Err(self.syntax_error("invalid UTF-8 in string"));
                        }
                        continue;
                    }
                    None => return Err(self.syntax_error("unterminated string")),
                    Some(_) => return Err(self.syntax_error("invalid UTF-8 in string")),
                }
            }
            match byte {
                None => return Err(self.syntax_error("unterminated string")),
                Some(b'"') => return Ok(()),
                Some(b'\\') => {
                    self.parse_escape()?;
                }
                Some(b) if b < 0x20 => {
                    return Err(self.syntax_error("control character in string"));
                }
                Some(b) if b < 0x80 => {}
                Some(b) => {
                    width = match b {
                        0xC2..=0xDF => 2,
                        0xE0..=0xEF => 3,
                        0xF0..=0xF4 => 4,
                        _ => return Err(self.syntax_error("invalid UTF-8 in string")),
                    };
                    seq[0] = b;
                    have = 1;
                }
            }
        }
    }

    /// Decodes the escape sequence following a backslash.
    fn parse_escape(&mut self) -> Result<char, Error> {
        let ch = match self.bump()? {
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{0008}',
            Some(b'f') => '\u{000C}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => {
                let unit = self.parse_hex4()?;
                match unit {
                    0xD800..=0xDBFF => {
                        if self.bump()? != Some(b'\\') || self.bump()? != Some(b'u') {
                            return Err(self.syntax_error("unpaired surrogate in string"));
                        }
                        let low = self.parse_hex4()?;
                        if !(0xDC00..=0xDFFF).contains(&low) {
                            return Err(self.syntax_error("unpaired surrogate in string"));
                        }
                        let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                        char::from_u32(code)
                            .ok_or_else(|| self.syntax_error("invalid unicode escape"))?
                    }
                    0xDC00..=0xDFFF => {
                        return Err(self.syntax_error("unpaired surrogate in string"));
                    }
                    _ => char::from_u32(unit)
                        .ok_or_else(|| self.syntax_error("invalid unicode escape"))?,
                }
            }
            _ => return Err(self.syntax_error("invalid escape sequence")),
        };
        Ok(ch)
    }

    fn parse_hex4(&mut self) -> Result<u32, Error> {
        let mut value = 0u32;
        for _ in 0..4 {
            let digit = match self.bump()? {
                Some(b @ b'0'..=b'9') => b - b'0',
                Some(b @ b'a'..=b'f') => b - b'a' + 10,
                Some(b @ b'A'..=b'F') => b - b'A' + 10,
                _ => return Err(self.syntax_error("invalid unicode escape")),
            };
            value = value * 16 + u32::from(digit);
        }
        Ok(value)
    }

    /// Reads a number token following the JSON grammar and returns its text.
    fn scan_number(&mut self) -> Result<String, Error> {
        let mut text = String::new();
        if self.peek()? == Some(b'-') {
            self.bump()?;
            text.push('-');
        }
        match self.peek()? {
            Some(b'0') => {
                self.bump()?;
                text.push('0');
            }
            Some(b'1'..=b'9') => {
                self.scan_digits(&mut text)?;
            }
            _ => return Err(self.syntax_error("invalid number")),
        }
        if self.peek()? == Some(b'.') {
            self.bump()?;
            text.push('.');
            if self.scan_digits(&mut text)? == 0 {
                return Err(self.syntax_error("expected digit after decimal point"));
            }
        }
        if let Some(e @ (b'e' | b'E')) = self.peek()? {
            self.bump()?;
            text.push(e as char);
            if let Some(sign @ (b'+' | b'-')) = self.peek()? {
                self.bump()?;
                text.push(sign as char);
            }
            if self.scan_digits(&mut text)? == 0 {
                return Err(self.syntax_error("expected digit in exponent"));
            }
        }
        Ok(text)
    }

    fn scan_digits(&mut self, text: &mut String) -> Result<usize, Error> {
        let mut count = 0;
        while let Some(b @ b'0'..=b'9') = self.peek()? {
            self.bump()?;
            text.push(b as char);
            count += 1;
        }
        Ok(count)
    }
}

fn printable(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        (byte as char).to_string()
    } else {
        format!("\\x{byte:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iter(text: &str) -> JsonIterator<Reader<'_>> {
        JsonIterator::from_slice(text.as_bytes())
    }

    #[test]
    fn walks_object_fields() {
        let mut it = iter(r#" { "a" : 1 , "b" : [true, null], "c": "x" } "#);
        it.begin_object().unwrap();
        assert_eq!(it.next_field().unwrap().as_deref(), Some("a"));
        assert_eq!(it.read_i64().unwrap(), 1);
        assert_eq!(it.next_field().unwrap().as_deref(), Some("b"));
        it.begin_array().unwrap();
        assert!(it.next_element().unwrap());
        assert!(it.read_bool().unwrap());
        assert!(it.next_element().unwrap());
        assert!(it.read_null().unwrap());
        assert!(!it.next_element().unwrap());
        assert_eq!(it.next_field().unwrap().as_deref(), Some("c"));
        assert_eq!(it.read_string().unwrap(), "x");
        assert_eq!(it.next_field().unwrap(), None);
        assert_eq!(it.depth(), 0);
        it.finish().unwrap();
    }

    #[test]
    fn empty_containers() {
        let mut it = iter("{}");
        it.begin_object().unwrap();
        assert_eq!(it.next_field().unwrap(), None);

        let mut it = iter("[ ]");
        it.begin_array().unwrap();
        assert!(!it.next_element().unwrap());
    }

    #[test]
    fn string_escapes() {
        let mut it = iter(r#""a\"b\\c\/d\né😀""#);
        assert_eq!(it.read_string().unwrap(), "a\"b\\c/d\né😀");
    }

    #[test]
    fn raw_utf8_passes_through() {
        let mut it = iter("\"日本\"");
        assert_eq!(it.read_string().unwrap(), "日本");
    }

    #[test]
    fn rejects_bad_strings() {
        assert!(matches!(
            iter("\"abc").read_string(),
            Err(Error::Decode { .. })
        ));
        assert!(matches!(
            iter(r#""\ud83d""#).read_string(),
            Err(Error::Decode { .. })
        ));
        assert!(matches!(
            iter("\"a\u{0001}\"").read_string(),
            Err(Error::Decode { .. })
        ));
        assert!(matches!(
            iter(r#""\q""#).read_string(),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn skipped_strings_reject_bad_utf8() {
        let cases: [&[u8]; 7] = [
            b"[\"\xff\"]",
            b"[\"a\xc3\"]",
            b"[\"\xe2\x82\"]",
            b"[\"\xc0\xaf\"]",
            b"[\"\xed\xa0\x80\"]",
            b"[\"\xf4\x90\x80\x80\"]",
            b"{\"\xff\":1}",
        ];
        for bytes in cases {
            let mut iter = JsonIterator::from_slice(bytes);
            let err = iter.skip_value().unwrap_err();
            assert!(matches!(err, Error::Decode { .. }), "{bytes:?}: {err:?}");
        }
    }

    #[test]
    fn skipped_strings_accept_multibyte_text() {
        let mut iter = iter(r#"[["bé", "€", "😀", "\u00e9"], 1]"#);
        iter.begin_array().unwrap();
        assert!(iter.next_element().unwrap());
        iter.skip_value().unwrap();
        assert!(iter.next_element().unwrap());
        assert_eq!(iter.read_i64().unwrap(), 1);
        assert!(!iter.next_element().unwrap());
    }

    #[test]
    fn numbers() {
        assert_eq!(iter("-0").read_i64().unwrap(), 0);
        assert_eq!(iter("9223372036854775807").read_i64().unwrap(), i64::MAX);
        assert_eq!(iter("1.5e2").read_f64().unwrap(), 150.0);
        assert_eq!(iter("-2.25").read_f64().unwrap(), -2.25);
        assert_eq!(iter("7").read_f64().unwrap(), 7.0);
        assert_eq!(iter("2147483647").read_i32().unwrap(), i32::MAX);
    }

    #[test]
    fn number_shape_errors() {
        assert!(matches!(
            iter("1.5").read_i64(),
            Err(Error::TypeMismatch { expected: "integer", .. })
        ));
        assert!(matches!(
            iter("9223372036854775808").read_i64(),
            Err(Error::TypeMismatch { expected: "64-bit integer", .. })
        ));
        assert!(matches!(
            iter("2147483648").read_i32(),
            Err(Error::TypeMismatch { expected: "32-bit integer", .. })
        ));
        assert!(matches!(
            iter("1e400").read_f64(),
            Err(Error::TypeMismatch { expected: "finite number", .. })
        ));
        assert!(matches!(iter("1.").read_f64(), Err(Error::Decode { .. })));
        assert!(matches!(iter("-").read_f64(), Err(Error::Decode { .. })));
        assert!(matches!(iter("1e+").read_f64(), Err(Error::Decode { .. })));
    }

    #[test]
    fn mismatch_reports_path() {
        let mut it = iter(r#"{"aws": {"subnet_ids": ["a", 7]}}"#);
        it.begin_object().unwrap();
        it.next_field().unwrap();
        it.begin_object().unwrap();
        it.next_field().unwrap();
        it.begin_array().unwrap();
        assert!(it.next_element().unwrap());
        it.read_string().unwrap();
        assert!(it.next_element().unwrap());
        let err = it.read_string().unwrap_err();
        match err {
            Error::TypeMismatch {
                path,
                expected,
                found,
                offset,
            } => {
                assert_eq!(path, "$.aws.subnet_ids[1]");
                assert_eq!(expected, "string");
                assert_eq!(found, "number");
                assert_eq!(offset, 29);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn skips_nested_values() {
        let mut it = iter(r#"{"x": {"y": [1, {"z": "\"}"}], "w": false}, "k": 3}"#);
        it.begin_object().unwrap();
        assert_eq!(it.next_field().unwrap().as_deref(), Some("x"));
        it.skip_value().unwrap();
        assert_eq!(it.next_field().unwrap().as_deref(), Some("k"));
        assert_eq!(it.read_i64().unwrap(), 3);
        assert_eq!(it.next_field().unwrap(), None);
    }

    #[test]
    fn syntax_errors_carry_offset() {
        let mut it = iter(r#"{"a" 1}"#);
        it.begin_object().unwrap();
        let err = it.next_field().unwrap_err();
        assert!(matches!(err, Error::Decode { offset: 5, .. }), "{err:?}");

        let mut it = iter("[1,]");
        it.begin_array().unwrap();
        assert!(it.next_element().unwrap());
        it.read_i64().unwrap();
        assert!(it.next_element().unwrap());
        assert!(matches!(it.read_i64(), Err(Error::Decode { .. })));
    }

    #[test]
    fn depth_limit() {
        let options = ReaderOptions {
            max_depth: 3,
            ..Default::default()
        };
        let mut it = JsonIterator::with_options(Reader::new(b"[[[[1]]]]"), &options);
        assert!(matches!(it.skip_value(), Err(Error::Decode { .. })));

        let mut it = JsonIterator::with_options(Reader::new(b"[[1]]"), &options);
        it.skip_value().unwrap();
    }

    #[test]
    fn trailing_data() {
        let mut it = iter("true  x");
        assert!(it.read_bool().unwrap());
        assert!(matches!(it.finish(), Err(Error::Decode { offset: 6, .. })));
    }

    #[test]
    fn streaming_source() {
        let data = br#"{"name": "streamed"}"#;
        let options = ReaderOptions {
            chunk_size: 1,
            ..Default::default()
        };
        let mut it = JsonIterator::from_reader_with(&data[..], &options);
        it.begin_object().unwrap();
        assert_eq!(it.next_field().unwrap().as_deref(), Some("name"));
        assert_eq!(it.read_string().unwrap(), "streamed");
        assert_eq!(it.next_field().unwrap(), None);
        it.finish().unwrap();
        assert_eq!(it.offset(), data.len());
    }
}
