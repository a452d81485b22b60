//! Attribute staging and the builder protocol.

use std::collections::BTreeMap;
use std::fmt::Debug;

use chrono::{DateTime, Utc};

use crate::{Error, JsonCodec};

/// A builder that produces immutable objects.
///
/// Builders are mutable staging areas: setters mark the attribute as present
/// and `build` copies the staged values into a fresh object. Building does
/// not consume or reset the builder, so it can be built again.
pub trait Builder: Clone + Default + Debug {
    type Object;

    fn build(&self) -> Result<Self::Object, Error>;

    /// Replaces every staged value with the ones of `object`.
    fn copy(&mut self, object: &Self::Object) -> &mut Self;

    fn is_empty(&self) -> bool;
}

/// A type that can be an object attribute.
///
/// `Staged` is the representation held by builders (a nested builder for
/// object types, the value itself for scalars) and `Ref` is what getters
/// hand out.
pub trait Attribute: Sized + Clone + Default + PartialEq + Debug + JsonCodec {
    type Staged: Clone + Default + Debug;

    type Ref<'a>
    where
        Self: 'a;

    fn borrow_attr(&self) -> Self::Ref<'_>;

    fn stage(&self) -> Self::Staged;

    fn finish(staged: &Self::Staged) -> Result<Self, Error>;
}

macro_rules! copy_attribute {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Attribute for $ty {
                type Staged = $ty;
                type Ref<'a> = $ty;

                #[inline]
                fn borrow_attr(&self) -> $ty {
                    *self
                }

                #[inline]
                fn stage(&self) -> $ty {
                    *self
                }

                #[inline]
                fn finish(staged: &$ty) -> Result<$ty, Error> {
                    Ok(*staged)
                }
            }
        )*
    };
}

copy_attribute!(bool, i32, i64, f64, DateTime<Utc>);

impl Attribute for String {
    type Staged = String;
    type Ref<'a> = &'a str;

    fn borrow_attr(&self) -> &str {
        self
    }

    fn stage(&self) -> String {
        self.clone()
    }

    fn finish(staged: &String) -> Result<String, Error> {
        Ok(staged.clone())
    }
}

impl<T: Attribute> Attribute for Vec<T> {
    type Staged = Vec<T::Staged>;
    type Ref<'a>
        = &'a [T]
    where
        Self: 'a;

    fn borrow_attr(&self) -> &[T] {
        self
    }

    fn stage(&self) -> Vec<T::Staged> {
        self.iter().map(T::stage).collect()
    }

    fn finish(staged: &Vec<T::Staged>) -> Result<Vec<T>, Error> {
        staged.iter().map(T::finish).collect()
    }
}

impl<T: Attribute> Attribute for BTreeMap<String, T> {
    type Staged = BTreeMap<String, T::Staged>;
    type Ref<'a>
        = &'a BTreeMap<String, T>
    where
        Self: 'a;

    fn borrow_attr(&self) -> &BTreeMap<String, T> {
        self
    }

    fn stage(&self) -> BTreeMap<String, T::Staged> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.stage()))
            .collect()
    }

    fn finish(staged: &BTreeMap<String, T::Staged>) -> Result<BTreeMap<String, T>, Error> {
        staged
            .iter()
            .map(|(key, value)| Ok((key.clone(), T::finish(value)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_stage_elementwise() {
        let values = vec!["a".to_string(), "b".to_string()];
        let staged = values.stage();
        assert_eq!(staged, values);
        assert_eq!(Vec::<String>::finish(&staged).unwrap(), values);
        assert_eq!(values.borrow_attr(), &["a".to_string(), "b".to_string()][..]);
    }

    #[test]
    fn maps_stage_by_key() {
        let mut labels = BTreeMap::new();
        labels.insert("env".to_string(), "prod".to_string());
        let staged = labels.stage();
        assert_eq!(BTreeMap::<String, String>::finish(&staged).unwrap(), labels);
    }

    #[test]
    fn scalars_copy_through() {
        assert_eq!(7i32.borrow_attr(), 7);
        assert!(bool::finish(&true).unwrap());
        assert_eq!("x".to_string().borrow_attr(), "x");
    }
}
