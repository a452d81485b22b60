//! Error types shared by builders, codecs and the validation layer.

use std::io;

use thiserror::Error;

/// Errors produced while building, encoding or decoding objects.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not well-formed JSON.
    #[error("invalid JSON at byte {offset}: {message}")]
    Decode { offset: usize, message: String },

    /// A recognized field holds a value of the wrong shape.
    #[error("type mismatch at `{path}` (byte {offset}): expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: String,
        offset: usize,
    },

    /// A value cannot be represented in JSON.
    #[error("cannot encode `{path}`: {message}")]
    Encode { path: String, message: String },

    /// The underlying reader or writer failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A higher-level validation rule rejected the object.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Byte offset of a decoding error, if the error carries one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Decode { offset, .. } | Self::TypeMismatch { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Field path of a type mismatch or encoding error.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::TypeMismatch { path, .. } | Self::Encode { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Required attributes missing from an object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name}: missing required fields: {}", missing.join(", "))]
pub struct ValidationError {
    pub type_name: String,
    pub missing: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = Error::TypeMismatch {
            path: "$.aws.subnet_ids".into(),
            expected: "array",
            found: "string".into(),
            offset: 42,
        };
        assert_eq!(
            err.to_string(),
            "type mismatch at `$.aws.subnet_ids` (byte 42): expected array, found string"
        );
        assert_eq!(err.offset(), Some(42));
        assert_eq!(err.path(), Some("$.aws.subnet_ids"));

        let err = Error::Decode {
            offset: 7,
            message: "expected `:`".into(),
        };
        assert_eq!(err.to_string(), "invalid JSON at byte 7: expected `:`");
        assert_eq!(err.path(), None);
    }

    #[test]
    fn io_errors_are_transparent() {
        let err: Error = io::Error::new(io::ErrorKind::TimedOut, "deadline").into();
        assert!(err.is_io());
        assert_eq!(err.to_string(), "deadline");
    }

    #[test]
    fn validation_message_lists_fields() {
        let err = ValidationError {
            type_name: "cluster".into(),
            missing: vec!["name".into(), "region".into()],
        };
        assert_eq!(
            err.to_string(),
            "cluster: missing required fields: name, region"
        );
    }
}
