//! Presence-tracked object model and streaming JSON codecs.
//!
//! Model types record which attributes were explicitly assigned, separately
//! from their values, so that encoding a partially built object emits exactly
//! the assigned attributes and decoding a partial payload yields the same
//! object. Types are declared with [`object_type!`], [`resource_type!`] and
//! [`wire_enum!`]; this crate provides the traits and codecs they rely on.
//!
//! # Example
//!
//! ```
//! use ocm_model::codec;
//!
//! ocm_model::wire_enum! {
//!     pub enum Provider: "provider" {
//!         Aws = "aws",
//!         Gcp = "gcp",
//!     }
//! }
//!
//! ocm_model::object_type! {
//!     pub struct Account / AccountBuilder : "account" {
//!         0 => id / get_id : String = "id";
//!         1 => enabled / get_enabled : bool = "enabled";
//!         2 => kind / get_kind : Provider = "kind";
//!     }
//! }
//!
//! let account: Account = codec::from_str(r#"{"id":"123","enabled":true,"kind":"azure"}"#).unwrap();
//! assert_eq!(account.id(), "123");
//! assert_eq!(account.kind(), &Provider::Unrecognized("azure".into()));
//! assert_eq!(
//!     codec::to_string(&account).unwrap(),
//!     r#"{"id":"123","enabled":true,"kind":"azure"}"#
//! );
//! ```

mod builder;
pub mod codec;
pub mod enumeration;
mod error;
pub mod json;
pub mod list;
mod object;
mod options;
mod page;
mod presence;
mod validation;

pub use ocm_buffers::{Reader, Source, StreamingReader};

pub use builder::{Attribute, Builder};
pub use codec::JsonCodec;
pub use enumeration::WireEnum;
pub use error::{Error, ValidationError};
pub use json::{JsonIterator, JsonStream, ValueType};
pub use list::{List, ListBuilder};
pub use object::{Object, Resource};
pub use options::{ReaderOptions, WriterOptions};
pub use page::{Page, PageBuilder};
pub use presence::FieldSet;
pub use validation::ValidationPolicy;

/// Traits needed to use generated types generically.
pub mod prelude {
    pub use crate::{Attribute, Builder, JsonCodec, Object, Resource, WireEnum};
}
