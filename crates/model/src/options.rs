//! Codec configuration.
//!
//! Both option sets can be loaded from configuration; missing keys keep
//! their defaults:
//!
//! ```
//! use ocm_model::ReaderOptions;
//!
//! let options: ReaderOptions = serde_json::from_str(r#"{"max_depth": 32}"#).unwrap();
//! assert_eq!(options.max_depth, 32);
//! assert_eq!(options.chunk_size, ReaderOptions::default().chunk_size);
//! ```

use serde::{Deserialize, Serialize};

/// Options for decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderOptions {
    /// Maximum nesting of objects and arrays, including skipped values.
    pub max_depth: usize,
    /// Chunk size used when pulling from an `io::Read`.
    pub chunk_size: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_depth: 128,
            chunk_size: 16 * 1024,
        }
    }
}

/// Options for encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterOptions {
    /// Pretty-print with this many spaces per level. `None` writes compact JSON.
    pub indent: Option<usize>,
}

impl WriterOptions {
    pub fn pretty() -> Self {
        Self { indent: Some(2) }
    }
}
