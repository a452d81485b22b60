//! Object and resource traits, and the macros that generate model types.
//!
//! A model type is declared once with [`object_type!`] or
//! [`resource_type!`]. The declaration lists each attribute with its
//! presence slot, accessor names, Rust type and wire name:
//!
//! ```
//! ocm_model::object_type! {
//!     /// Network settings of a cluster.
//!     pub struct Network / NetworkBuilder : "network" {
//!         0 => host_prefix / get_host_prefix : i32 = "host_prefix";
//!         1 => machine_cidr / get_machine_cidr : String = "machine_cidr";
//!     }
//! }
//!
//! let network = Network::builder().host_prefix(23).build().unwrap();
//! assert_eq!(network.get_host_prefix(), Some(23));
//! assert_eq!(network.get_machine_cidr(), None);
//! assert_eq!(network.machine_cidr(), "");
//! assert_eq!(ocm_model::codec::to_string(&network).unwrap(), r#"{"host_prefix":23}"#);
//! ```
//!
//! The generated code gives every type:
//!
//! * a value getter returning the zero value when the attribute is absent,
//!   and a `get_` getter returning `None` in that case;
//! * a builder whose setters mark the attribute present, and whose `build`
//!   copies the staged values;
//! * a [`JsonCodec`](crate::JsonCodec) impl that writes only present
//!   attributes, treats `null` as absent and skips unknown keys.

use crate::{Attribute, Builder, FieldSet};

/// A generated model type with presence tracking.
pub trait Object: Attribute {
    type Builder: Builder<Object = Self>;

    /// Name used in diagnostics and validation policies.
    const TYPE_NAME: &'static str;

    /// Wire names of the declared attributes, in declaration order.
    const FIELD_NAMES: &'static [&'static str];

    fn field_set(&self) -> FieldSet;

    /// Whether the attribute with this wire name is present.
    fn has_field(&self, name: &str) -> bool;

    fn is_empty(&self) -> bool;

    fn to_builder(&self) -> Self::Builder {
        let mut builder = Self::Builder::default();
        builder.copy(self);
        builder
    }
}

/// An object that is addressable on the server.
///
/// Resources carry an `id`, an `href` and a link flag. A link only
/// references the resource, and its `kind` on the wire is the type kind
/// followed by `Link`.
pub trait Resource: Object {
    const KIND: &'static str;
    const LINK_KIND: &'static str;
    const LIST_KIND: &'static str;
    const LIST_LINK_KIND: &'static str;

    fn is_link(&self) -> bool;

    fn id(&self) -> &str;

    fn href(&self) -> &str;

    fn kind(&self) -> &'static str {
        if self.is_link() {
            Self::LINK_KIND
        } else {
            Self::KIND
        }
    }
}

/// Declares a plain model object.
///
/// Each attribute line reads `slot => name / get_name : Type = "wire_name";`.
/// Slots must be distinct and below [`FieldSet::CAPACITY`]; both are
/// checked at compile time:
///
/// ```compile_fail
/// ocm_model::object_type! {
///     pub struct Twice / TwiceBuilder : "twice" {
///         0 => first / get_first : String = "first";
///         0 => second / get_second : String = "second";
///     }
/// }
/// ```
///
/// ```compile_fail
/// ocm_model::object_type! {
///     pub struct Wide / WideBuilder : "wide" {
///         128 => last / get_last : String = "last";
///     }
/// }
/// ```
#[macro_export]
macro_rules! object_type {
    (@write_kind [] $stream:ident, $fields:expr) => {};
    (@write_kind [$kind:literal] $stream:ident, $fields:expr) => {
        $stream.field("kind")?;
        $stream.write_str(if $fields.is_set(0) {
            ::std::concat!($kind, "Link")
        } else {
            $kind
        })?;
    };

    (@read_kind [] $iter:ident, $key:ident, $fields:expr) => {
        false
    };
    (@read_kind [$kind:literal] $iter:ident, $key:ident, $fields:expr) => {
        if $key == "kind" {
            let text = $iter.read_string()?;
            $fields.assign(0, text == ::std::concat!($kind, "Link"));
            true
        } else {
            false
        }
    };

    (@is_empty [] $fields:expr) => {
        $fields.is_empty()
    };
    (@is_empty [$kind:literal] $fields:expr) => {
        $fields.is_empty_except(0)
    };

    (@impl
        $(#[$meta:meta])*
        $vis:vis struct $name:ident / $builder:ident : $type_name:literal [$($kind:literal)?] {
            $(
                $(#[$fmeta:meta])*
                $bit:literal => $field:ident / $getter:ident : $ty:ty = $wire:literal;
            )*
        }
    ) => {
        const _: () = {
            let slots: &[usize] = &[$($bit),*];
            let mut i = 0;
            while i < slots.len() {
                ::std::assert!(
                    slots[i] < $crate::FieldSet::CAPACITY,
                    "attribute slot out of range"
                );
                let mut j = i + 1;
                while j < slots.len() {
                    ::std::assert!(slots[i] != slots[j], "attribute slot declared twice");
                    j += 1;
                }
                i += 1;
            }
        };

        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            fields_: $crate::FieldSet,
            $( $field: $ty, )*
        }

        impl $name {
            /// Creates an empty builder.
            pub fn builder() -> $builder {
                <$builder as ::std::default::Default>::default()
            }

            /// Returns `true` if no attribute has a value.
            pub fn is_empty(&self) -> bool {
                $crate::object_type!(@is_empty [$($kind)?] self.fields_)
            }

            $(
                $(#[$fmeta])*
                #[doc = ""]
                #[doc = ::std::concat!("Returns the zero value when `", $wire, "` is absent.")]
                pub fn $field(&self) -> <$ty as $crate::Attribute>::Ref<'_> {
                    $crate::Attribute::borrow_attr(&self.$field)
                }

                #[doc = ::std::concat!("Returns `", $wire, "` if it is present.")]
                pub fn $getter(&self) -> ::std::option::Option<<$ty as $crate::Attribute>::Ref<'_>> {
                    if self.fields_.is_set($bit) {
                        ::std::option::Option::Some($crate::Attribute::borrow_attr(&self.$field))
                    } else {
                        ::std::option::Option::None
                    }
                }
            )*
        }

        #[doc = ::std::concat!("Builder for [`", ::std::stringify!($name), "`].")]
        #[derive(Debug, Clone, Default)]
        $vis struct $builder {
            fields_: $crate::FieldSet,
            $( $field: <$ty as $crate::Attribute>::Staged, )*
        }

        impl $builder {
            pub fn new() -> Self {
                <Self as ::std::default::Default>::default()
            }

            /// Returns `true` if no attribute has been set.
            pub fn is_empty(&self) -> bool {
                $crate::object_type!(@is_empty [$($kind)?] self.fields_)
            }

            $(
                $(#[$fmeta])*
                pub fn $field(
                    &mut self,
                    value: impl ::std::convert::Into<<$ty as $crate::Attribute>::Staged>,
                ) -> &mut Self {
                    self.$field = value.into();
                    self.fields_.set($bit);
                    self
                }
            )*

            /// Copies every attribute of `object`, replacing what was staged.
            pub fn copy(&mut self, object: &$name) -> &mut Self {
                self.fields_ = object.fields_;
                $( self.$field = $crate::Attribute::stage(&object.$field); )*
                self
            }

            /// Creates a new object from the staged attributes.
            pub fn build(&self) -> ::std::result::Result<$name, $crate::Error> {
                let mut object = <$name as ::std::default::Default>::default();
                object.fields_ = self.fields_;
                $(
                    if self.fields_.is_set($bit) {
                        object.$field = <$ty as $crate::Attribute>::finish(&self.$field)?;
                    }
                )*
                ::std::result::Result::Ok(object)
            }
        }

        impl ::std::convert::From<&$builder> for $builder {
            fn from(builder: &$builder) -> Self {
                ::std::clone::Clone::clone(builder)
            }
        }

        impl ::std::convert::From<&mut $builder> for $builder {
            fn from(builder: &mut $builder) -> Self {
                ::std::clone::Clone::clone(builder)
            }
        }

        impl ::std::convert::From<&$name> for $builder {
            fn from(object: &$name) -> Self {
                let mut builder = Self::new();
                builder.copy(object);
                builder
            }
        }

        impl ::std::convert::From<$name> for $builder {
            fn from(object: $name) -> Self {
                Self::from(&object)
            }
        }

        impl $crate::Builder for $builder {
            type Object = $name;

            fn build(&self) -> ::std::result::Result<$name, $crate::Error> {
                $builder::build(self)
            }

            fn copy(&mut self, object: &$name) -> &mut Self {
                $builder::copy(self, object)
            }

            fn is_empty(&self) -> bool {
                $builder::is_empty(self)
            }
        }

        impl $crate::Attribute for $name {
            type Staged = $builder;
            type Ref<'a> = &'a $name;

            fn borrow_attr(&self) -> &$name {
                self
            }

            fn stage(&self) -> $builder {
                $builder::from(self)
            }

            fn finish(staged: &$builder) -> ::std::result::Result<$name, $crate::Error> {
                staged.build()
            }
        }

        impl $crate::Object for $name {
            type Builder = $builder;

            const TYPE_NAME: &'static str = $type_name;
            const FIELD_NAMES: &'static [&'static str] = &[$($wire),*];

            fn field_set(&self) -> $crate::FieldSet {
                self.fields_
            }

            fn has_field(&self, name: &str) -> bool {
                match name {
                    $( $wire => self.fields_.is_set($bit), )*
                    _ => false,
                }
            }

            fn is_empty(&self) -> bool {
                $name::is_empty(self)
            }
        }

        impl $crate::JsonCodec for $name {
            fn write_json<W: ::std::io::Write>(
                &self,
                stream: &mut $crate::JsonStream<W>,
            ) -> ::std::result::Result<(), $crate::Error> {
                stream.begin_object()?;
                $crate::object_type!(@write_kind [$($kind)?] stream, self.fields_);
                $(
                    if self.fields_.is_set($bit) {
                        stream.field($wire)?;
                        $crate::JsonCodec::write_json(&self.$field, stream)?;
                    }
                )*
                stream.end_object()
            }

            fn read_json<S: $crate::Source>(
                iter: &mut $crate::JsonIterator<S>,
            ) -> ::std::result::Result<Self, $crate::Error> {
                let mut object = <Self as ::std::default::Default>::default();
                iter.begin_object()?;
                while let ::std::option::Option::Some(key) = iter.next_field()? {
                    if iter.read_null()? {
                        continue;
                    }
                    if $crate::object_type!(@read_kind [$($kind)?] iter, key, object.fields_) {
                        continue;
                    }
                    match key.as_str() {
                        $(
                            $wire => {
                                object.$field = $crate::JsonCodec::read_json(iter)?;
                                object.fields_.set($bit);
                            }
                        )*
                        _ => iter.skip_unknown(&key)?,
                    }
                }
                ::std::result::Result::Ok(object)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident / $builder:ident : $type_name:literal {
            $(
                $(#[$fmeta:meta])*
                $bit:literal => $field:ident / $getter:ident : $ty:ty = $wire:literal;
            )*
        }
    ) => {
        $crate::object_type! {
            @impl
            $(#[$meta])*
            $vis struct $name / $builder : $type_name [] {
                $(
                    $(#[$fmeta])*
                    $bit => $field / $getter : $ty = $wire;
                )*
            }
        }
    };
}

/// Declares a resource type.
///
/// Slots `0`, `1` and `2` are taken by the link flag, `id` and `href`, so
/// declared attributes start at slot `3`. The second header item is the
/// `kind` written on the wire.
///
/// ```compile_fail
/// ocm_model::resource_type! {
///     pub struct Clash / ClashBuilder : "clash", kind "Clash" {
///         0 => name / get_name : String = "name";
///     }
/// }
/// ```
#[macro_export]
macro_rules! resource_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident / $builder:ident : $type_name:literal, kind $kind:literal {
            $(
                $(#[$fmeta:meta])*
                $bit:literal => $field:ident / $getter:ident : $ty:ty = $wire:literal;
            )*
        }
    ) => {
        const _: () = {
            let slots: &[usize] = &[$($bit),*];
            let mut i = 0;
            while i < slots.len() {
                ::std::assert!(slots[i] >= 3, "slots 0, 1 and 2 are reserved by resources");
                i += 1;
            }
        };

        $crate::object_type! {
            @impl
            $(#[$meta])*
            $vis struct $name / $builder : $type_name [$kind] {
                /// Identifier of the object.
                1 => id / get_id : ::std::string::String = "id";
                /// Self link of the object.
                2 => href / get_href : ::std::string::String = "href";
                $(
                    $(#[$fmeta])*
                    $bit => $field / $getter : $ty = $wire;
                )*
            }
        }

        impl $name {
            /// Returns `true` if this is a link to the object rather than the
            /// object itself.
            pub fn is_link(&self) -> bool {
                self.fields_.is_set(0)
            }

            /// Wire kind, taking the link flag into account.
            pub fn kind(&self) -> &'static str {
                <Self as $crate::Resource>::kind(self)
            }
        }

        impl $builder {
            /// Sets the flag that indicates if this is a link.
            pub fn link(&mut self, value: bool) -> &mut Self {
                self.fields_.assign(0, value);
                self
            }
        }

        impl $crate::Resource for $name {
            const KIND: &'static str = $kind;
            const LINK_KIND: &'static str = ::std::concat!($kind, "Link");
            const LIST_KIND: &'static str = ::std::concat!($kind, "List");
            const LIST_LINK_KIND: &'static str = ::std::concat!($kind, "ListLink");

            fn is_link(&self) -> bool {
                $name::is_link(self)
            }

            fn id(&self) -> &str {
                $name::id(self)
            }

            fn href(&self) -> &str {
                $name::href(self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{codec, Builder, Error, Object, Resource};

    crate::wire_enum! {
        enum Provider: "provider" {
            Aws = "aws",
            Gcp = "gcp",
        }
    }

    crate::object_type! {
        struct Account / AccountBuilder : "account" {
            0 => id / get_id : String = "id";
            1 => enabled / get_enabled : bool = "enabled";
            2 => kind / get_kind : Provider = "kind";
            3 => tags / get_tags : Vec<String> = "tags";
        }
    }

    crate::resource_type! {
        struct Widget / WidgetBuilder : "widget", kind "Widget" {
            3 => name / get_name : String = "name";
            4 => owner / get_owner : Account = "owner";
        }
    }

    crate::resource_type! {
        struct Sparse / SparseBuilder : "sparse", kind "Sparse" {
            3 => first / get_first : String = "first";
            127 => last / get_last : String = "last";
        }
    }

    #[test]
    fn edge_slots_stay_independent() {
        let sparse = Sparse::builder().last("z").build().unwrap();
        assert_eq!(sparse.get_first(), None);
        assert!(!sparse.is_link());
        assert!(!sparse.has_field("first"));
        assert!(sparse.has_field("last"));
        assert_eq!(
            codec::to_string(&sparse).unwrap(),
            r#"{"kind":"Sparse","last":"z"}"#
        );

        let first_only = Sparse::builder().first("a").build().unwrap();
        assert_eq!(first_only.get_last(), None);
        assert_eq!(
            codec::to_string(&first_only).unwrap(),
            r#"{"kind":"Sparse","first":"a"}"#
        );
    }

    #[test]
    fn decodes_known_fields_and_keeps_unknown_enum_values() {
        let account: Account =
            codec::from_str(r#"{"id":"123","enabled":true,"kind":"azure"}"#).unwrap();
        assert_eq!(account.get_id(), Some("123"));
        assert_eq!(account.get_enabled(), Some(true));
        assert_eq!(account.kind(), &Provider::Unrecognized("azure".into()));
        assert_eq!(account.get_tags(), None);
        assert!(account.has_field("kind"));
        assert!(!account.has_field("tags"));
        assert!(!account.has_field("nope"));
    }

    #[test]
    fn builder_marks_presence_even_for_zero_values() {
        let account = Account::builder()
            .enabled(false)
            .tags(Vec::<String>::new())
            .build()
            .unwrap();
        assert_eq!(account.get_enabled(), Some(false));
        assert_eq!(account.get_tags(), Some(&[][..]));
        assert_eq!(account.get_id(), None);
        assert_eq!(
            codec::to_string(&account).unwrap(),
            r#"{"enabled":false,"tags":[]}"#
        );
    }

    #[test]
    fn null_is_absent_and_unknown_keys_are_skipped() {
        let account: Account =
            codec::from_str(r#"{"id":null,"extra":{"deep":[1,2]},"enabled":true}"#).unwrap();
        assert_eq!(account.get_id(), None);
        assert_eq!(account.get_enabled(), Some(true));
        assert_eq!(account.field_set().len(), 1);
    }

    #[test]
    fn build_is_repeatable_and_independent() {
        let mut builder = AccountBuilder::new();
        builder.id("a");
        let first = builder.build().unwrap();
        builder.id("b");
        let second = builder.build().unwrap();
        assert_eq!(first.id(), "a");
        assert_eq!(second.id(), "b");
        assert_eq!(first.to_builder().build().unwrap(), first);
    }

    #[test]
    fn empty_objects() {
        assert!(Account::default().is_empty());
        assert!(AccountBuilder::new().is_empty());
        assert_eq!(codec::to_string(&Account::default()).unwrap(), "{}");
        assert!(Widget::builder().link(true).build().unwrap().is_empty());
    }

    #[test]
    fn resources_write_kind_and_link_flag() {
        let widget = Widget::builder()
            .id("w1")
            .href("/api/widgets/w1")
            .name("gear")
            .owner(Account::builder().id("7"))
            .build()
            .unwrap();
        assert_eq!(widget.kind(), "Widget");
        assert_eq!(Resource::id(&widget), "w1");
        assert_eq!(widget.owner().id(), "7");
        let text = codec::to_string(&widget).unwrap();
        assert_eq!(
            text,
            r#"{"kind":"Widget","id":"w1","href":"/api/widgets/w1","name":"gear","owner":{"id":"7"}}"#
        );
        assert_eq!(codec::from_str::<Widget>(&text).unwrap(), widget);

        let link: Widget = codec::from_str(r#"{"kind":"WidgetLink","id":"w2"}"#).unwrap();
        assert!(link.is_link());
        assert_eq!(link.kind(), "WidgetLink");
        assert_eq!(
            codec::to_string(&link).unwrap(),
            r#"{"kind":"WidgetLink","id":"w2"}"#
        );
        assert_eq!(Widget::LIST_LINK_KIND, "WidgetListLink");
    }

    #[test]
    fn type_mismatch_in_nested_object_reports_path() {
        let err = codec::from_str::<Widget>(r#"{"owner":{"tags":["a",1]}}"#).unwrap_err();
        match err {
            Error::TypeMismatch { path, expected, .. } => {
                assert_eq!(path, "$.owner.tags[1]");
                assert_eq!(expected, "string");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn builder_trait_round_trip() {
        let account = Account::builder().id("x").build().unwrap();
        let mut builder = AccountBuilder::default();
        Builder::copy(&mut builder, &account);
        assert_eq!(Builder::build(&builder).unwrap(), account);
        assert_eq!(Account::FIELD_NAMES, &["id", "enabled", "kind", "tags"]);
    }
}
