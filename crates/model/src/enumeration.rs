//! Closed sets of string values that tolerate unknown members.
//!
//! Servers add enum members over time. A value this client does not know is
//! decoded into the `Unrecognized` variant and written back verbatim, so
//! reading and re-sending an object never loses information.

use std::fmt::Debug;

use ocm_buffers::Source;

use crate::{Error, JsonIterator};

/// An enumerated type with a fixed set of wire strings.
pub trait WireEnum: Sized + Clone + Debug {
    /// Name of the type, used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Wire strings of the known variants, in declaration order.
    const WIRE_VALUES: &'static [&'static str];

    /// Maps a wire string to a variant, keeping unknown strings verbatim.
    fn from_wire(value: &str) -> Self;

    fn as_str(&self) -> &str;

    /// False for values outside [`WireEnum::WIRE_VALUES`].
    fn is_recognized(&self) -> bool {
        Self::WIRE_VALUES.contains(&self.as_str())
    }
}

/// Reads an enum value, logging members this client does not know.
pub fn read_enum<E: WireEnum, S: Source>(iter: &mut JsonIterator<S>) -> Result<E, Error> {
    let raw = iter.read_string()?;
    let value = E::from_wire(&raw);
    if !value.is_recognized() {
        tracing::debug!(
            enum_type = E::TYPE_NAME,
            value = %raw,
            path = %iter.path(),
            "keeping unrecognized enum value"
        );
    }
    Ok(value)
}

/// Declares a [`WireEnum`] together with its codec and attribute impls.
///
/// ```
/// ocm_model::wire_enum! {
///     /// Where the cluster runs.
///     pub enum Provider: "provider" {
///         Aws = "aws",
///         Gcp = "gcp",
///     }
/// }
///
/// assert_eq!(Provider::from("gcp"), Provider::Gcp);
/// assert_eq!(Provider::from("azure"), Provider::Unrecognized("azure".into()));
/// assert_eq!(Provider::from("azure").as_str(), "azure");
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $type_name:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A value unknown to this client, kept as received.
            Unrecognized(::std::string::String),
        }

        impl $crate::WireEnum for $name {
            const TYPE_NAME: &'static str = $type_name;
            const WIRE_VALUES: &'static [&'static str] = &[$($wire),*];

            fn from_wire(value: &str) -> Self {
                match value {
                    $( $wire => Self::$variant, )*
                    other => Self::Unrecognized(::std::borrow::ToOwned::to_owned(other)),
                }
            }

            fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )*
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }
        }

        impl $name {
            /// Wire string of this value.
            pub fn as_str(&self) -> &str {
                <Self as $crate::WireEnum>::as_str(self)
            }

            pub fn is_recognized(&self) -> bool {
                <Self as $crate::WireEnum>::is_recognized(self)
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::Unrecognized(::std::string::String::new())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok(<Self as $crate::WireEnum>::from_wire(value))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                <Self as $crate::WireEnum>::from_wire(value)
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                match <Self as $crate::WireEnum>::from_wire(&value) {
                    Self::Unrecognized(_) => Self::Unrecognized(value),
                    known => known,
                }
            }
        }

        impl $crate::JsonCodec for $name {
            fn write_json<W: ::std::io::Write>(
                &self,
                stream: &mut $crate::JsonStream<W>,
            ) -> ::std::result::Result<(), $crate::Error> {
                stream.write_str(self.as_str())
            }

            fn read_json<S: $crate::Source>(
                iter: &mut $crate::JsonIterator<S>,
            ) -> ::std::result::Result<Self, $crate::Error> {
                $crate::enumeration::read_enum(iter)
            }
        }

        impl $crate::Attribute for $name {
            type Staged = $name;
            type Ref<'a> = &'a $name;

            fn borrow_attr(&self) -> &$name {
                self
            }

            fn stage(&self) -> $name {
                ::std::clone::Clone::clone(self)
            }

            fn finish(staged: &$name) -> ::std::result::Result<$name, $crate::Error> {
                ::std::result::Result::Ok(::std::clone::Clone::clone(staged))
            }
        }
    };
}
