//! Push-based JSON writer.

use std::io::{self, Write};

use crate::{Error, WriterOptions};

#[derive(Debug)]
struct Scope {
    array: bool,
    count: usize,
    key: String,
}

/// Writes JSON tokens directly to an `io::Write`.
///
/// Separators and indentation are handled by the stream; callers only open
/// and close containers and emit field names and values. String escaping and
/// float formatting are delegated to `serde_json`.
pub struct JsonStream<W> {
    out: W,
    indent: Option<usize>,
    scopes: Vec<Scope>,
}

impl<W: Write> JsonStream<W> {
    pub fn new(out: W) -> Self {
        Self::with_options(out, &WriterOptions::default())
    }

    pub fn with_options(out: W, options: &WriterOptions) -> Self {
        Self {
            out,
            indent: options.indent,
            scopes: Vec::new(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.out.flush()?;
        Ok(())
    }

    /// Location of the value being written, e.g. `$.nodes.compute`.
    pub fn path(&self) -> String {
        let mut path = String::from("$");
        for scope in &self.scopes {
            if scope.array {
                if scope.count > 0 {
                    path.push_str(&format!("[{}]", scope.count - 1));
                }
            } else if !scope.key.is_empty() {
                path.push('.');
                path.push_str(&scope.key);
            }
        }
        path
    }

    fn newline(&mut self, depth: usize) -> io::Result<()> {
        if let Some(width) = self.indent {
            self.out.write_all(b"\n")?;
            for _ in 0..width * depth {
                self.out.write_all(b" ")?;
            }
        }
        Ok(())
    }

    /// Emits the separator that precedes an array element.
    fn before_value(&mut self) -> io::Result<()> {
        let depth = self.scopes.len();
        let Some(scope) = self.scopes.last_mut() else {
            return Ok(());
        };
        if !scope.array {
            return Ok(());
        }
        let first = scope.count == 0;
        scope.count += 1;
        if !first {
            self.out.write_all(b",")?;
        }
        self.newline(depth)
    }

    fn close(&mut self, array: bool, token: &[u8]) -> Result<(), Error> {
        let scope = match self.scopes.pop() {
            Some(scope) if scope.array == array => scope,
            _ => {
                return Err(Error::Encode {
                    path: self.path(),
                    message: format!("unbalanced `{}`", String::from_utf8_lossy(token)),
                })
            }
        };
        if scope.count > 0 {
            self.newline(self.scopes.len())?;
        }
        self.out.write_all(token)?;
        Ok(())
    }

    pub fn begin_object(&mut self) -> Result<(), Error> {
        self.before_value()?;
        self.out.write_all(b"{")?;
        self.scopes.push(Scope {
            array: false,
            count: 0,
            key: String::new(),
        });
        Ok(())
    }

    /// Writes a key inside the innermost object. A value must follow.
    pub fn field(&mut self, name: &str) -> Result<(), Error> {
        let depth = self.scopes.len();
        let first = match self.scopes.last_mut() {
            Some(scope) if !scope.array => {
                scope.count += 1;
                scope.key.clear();
                scope.key.push_str(name);
                scope.count == 1
            }
            _ => {
                return Err(Error::Encode {
                    path: self.path(),
                    message: format!("field `{name}` written outside an object"),
                })
            }
        };
        if !first {
            self.out.write_all(b",")?;
        }
        self.newline(depth)?;
        serde_json::to_writer(&mut self.out, name).map_err(io::Error::from)?;
        if self.indent.is_some() {
            self.out.write_all(b": ")?;
        } else {
            self.out.write_all(b":")?;
        }
        Ok(())
    }

    pub fn end_object(&mut self) -> Result<(), Error> {
        self.close(false, b"}")
    }

    pub fn begin_array(&mut self) -> Result<(), Error> {
        self.before_value()?;
        self.out.write_all(b"[")?;
        self.scopes.push(Scope {
            array: true,
            count: 0,
            key: String::new(),
        });
        Ok(())
    }

    pub fn end_array(&mut self) -> Result<(), Error> {
        self.close(true, b"]")
    }

    pub fn write_str(&mut self, value: &str) -> Result<(), Error> {
        self.before_value()?;
        serde_json::to_writer(&mut self.out, value).map_err(io::Error::from)?;
        Ok(())
    }

    pub fn write_bool(&mut self, value: bool) -> Result<(), Error> {
        self.before_value()?;
        self.out
            .write_all(if value { b"true" as &[u8] } else { b"false" })?;
        Ok(())
    }

    pub fn write_i64(&mut self, value: i64) -> Result<(), Error> {
        self.before_value()?;
        write!(self.out, "{value}")?;
        Ok(())
    }

    /// Writes a float. NaN and infinities have no JSON form and are rejected.
    pub fn write_f64(&mut self, value: f64) -> Result<(), Error> {
        self.before_value()?;
        if !value.is_finite() {
            return Err(Error::Encode {
                path: self.path(),
                message: format!("{value} is not a finite number"),
            });
        }
        serde_json::to_writer(&mut self.out, &value).map_err(io::Error::from)?;
        Ok(())
    }

    pub fn write_null(&mut self) -> Result<(), Error> {
        self.before_value()?;
        self.out.write_all(b"null")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(options: WriterOptions, f: impl FnOnce(&mut JsonStream<Vec<u8>>)) -> String {
        let mut stream = JsonStream::with_options(Vec::new(), &options);
        f(&mut stream);
        String::from_utf8(stream.into_inner()).unwrap()
    }

    #[test]
    fn compact_output() {
        let text = render(WriterOptions::default(), |s| {
            s.begin_object().unwrap();
            s.field("name").unwrap();
            s.write_str("a\"b\n").unwrap();
            s.field("list").unwrap();
            s.begin_array().unwrap();
            s.write_i64(-3).unwrap();
            s.write_f64(1.5).unwrap();
            s.write_bool(false).unwrap();
            s.write_null().unwrap();
            s.end_array().unwrap();
            s.field("empty").unwrap();
            s.begin_object().unwrap();
            s.end_object().unwrap();
            s.end_object().unwrap();
        });
        assert_eq!(
            text,
            r#"{"name":"a\"b\n","list":[-3,1.5,false,null],"empty":{}}"#
        );
    }

    #[test]
    fn pretty_output() {
        let text = render(WriterOptions::pretty(), |s| {
            s.begin_object().unwrap();
            s.field("a").unwrap();
            s.begin_array().unwrap();
            s.write_i64(1).unwrap();
            s.write_i64(2).unwrap();
            s.end_array().unwrap();
            s.field("b").unwrap();
            s.begin_array().unwrap();
            s.end_array().unwrap();
            s.end_object().unwrap();
        });
        assert_eq!(text, "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": []\n}");
    }

    #[test]
    fn rejects_non_finite_floats_with_path() {
        let mut stream = JsonStream::new(Vec::new());
        stream.begin_object().unwrap();
        stream.field("nodes").unwrap();
        stream.begin_array().unwrap();
        stream.write_f64(1.0).unwrap();
        let err = stream.write_f64(f64::NAN).unwrap_err();
        match err {
            Error::Encode { path, .. } => assert_eq!(path, "$.nodes[1]"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unbalanced_close_is_an_error() {
        let mut stream = JsonStream::new(Vec::new());
        stream.begin_array().unwrap();
        assert!(matches!(stream.end_object(), Err(Error::Encode { .. })));
        assert!(matches!(
            JsonStream::new(Vec::new()).field("x"),
            Err(Error::Encode { .. })
        ));
    }
}
