//! Low-level JSON reading and writing.

mod iterator;
mod stream;

pub use iterator::{JsonIterator, ValueType};
pub use stream::JsonStream;
