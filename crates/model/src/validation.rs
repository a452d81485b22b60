//! Required-attribute checks layered on top of builders.
//!
//! Builders and codecs accept partial objects, since the server decides what
//! a request needs. Callers that want to fail early declare the required
//! attributes per type in a [`ValidationPolicy`], usually loaded from
//! configuration:
//!
//! ```
//! use ocm_model::ValidationPolicy;
//!
//! let policy = ValidationPolicy::from_json(r#"{"required": {"cluster": ["name"]}}"#).unwrap();
//! assert_eq!(policy.required_fields("cluster"), ["name"]);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Builder, Error, Object, ValidationError};

/// Required wire attributes, keyed by [`Object::TYPE_NAME`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationPolicy {
    #[serde(default)]
    required: BTreeMap<String, Vec<String>>,
}

impl ValidationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Adds required attributes for `T`, by wire name.
    pub fn require<T: Object>(&mut self, fields: &[&str]) -> &mut Self {
        let entry = self.required.entry(T::TYPE_NAME.to_owned()).or_default();
        for field in fields {
            if !T::FIELD_NAMES.contains(field) {
                tracing::warn!(
                    type_name = T::TYPE_NAME,
                    field = *field,
                    "required field is not an attribute of the type"
                );
            }
            if !entry.iter().any(|known| known == field) {
                entry.push((*field).to_owned());
            }
        }
        self
    }

    pub fn required_fields(&self, type_name: &str) -> &[String] {
        self.required
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Checks that every attribute required for `T` is present.
    pub fn validate<T: Object>(&self, object: &T) -> Result<(), ValidationError> {
        let missing: Vec<String> = self
            .required_fields(T::TYPE_NAME)
            .iter()
            .filter(|field| !object.has_field(field))
            .cloned()
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            type_name = T::TYPE_NAME,
            missing = ?missing,
            "object failed validation"
        );
        Err(ValidationError {
            type_name: T::TYPE_NAME.to_owned(),
            missing,
        })
    }

    /// Builds the object and validates it.
    pub fn build<B>(&self, builder: &B) -> Result<B::Object, Error>
    where
        B: Builder,
        B::Object: Object,
    {
        let object = builder.build()?;
        self.validate(&object)?;
        Ok(object)
    }
}
