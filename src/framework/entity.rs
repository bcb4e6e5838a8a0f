//! # Entity Schema
//!
//! The [`Entity`] trait is the contract every record type (User, Person, Employee, …) implements
//! to be handled by the generic [`codec`](crate::framework::codec). It ties a serde-derived
//! record to a static, declarative list of [`Field`]s that describe how each field is encoded.
//!
//! # Architecture Note
//! Why not just rely on `#[serde(...)]` attributes?
//! Serde gives us the *lowering* (struct → JSON value) for free, but the field-level
//! directives (rename, omit-if-empty, encode-as-text) live in one place per entity, in
//! declared order, and are consumed uniformly by the codec. No entity ships its own
//! encode function.
//!
//! ```rust
//! use entity_store::framework::{Entity, Field};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
//! #[serde(default)]
//! struct Pet {
//!     name: String,
//!     legs: u32,
//! }
//!
//! impl Entity for Pet {
//!     const NAME: &'static str = "Pet";
//!     const FIELDS: &'static [Field] = &[
//!         Field::new("name"),
//!         Field::new("legs").as_text().omit_if_empty(),
//!     ];
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Declarative encoding directives for one field of an [`Entity`].
///
/// All builders are `const`, so a schema is a plain `&'static [Field]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// The field's name as serde lowers it (the Rust field name).
    pub name: &'static str,
    /// External key, if different from `name`.
    pub rename: Option<&'static str>,
    /// Drop the key entirely when the lowered value is empty.
    ///
    /// The entity must tolerate the key's absence on decode, either through
    /// `#[serde(default)]` or an `Option` field.
    pub omit_if_empty: bool,
    /// Encode an integer value as a quoted base-10 digit string.
    pub as_text: bool,
    /// Schema applied to the field's value when it is itself a record.
    pub nested: Option<&'static [Field]>,
}

impl Field {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            rename: None,
            omit_if_empty: false,
            as_text: false,
            nested: None,
        }
    }

    pub const fn rename(self, key: &'static str) -> Self {
        Self {
            rename: Some(key),
            ..self
        }
    }

    pub const fn omit_if_empty(self) -> Self {
        Self {
            omit_if_empty: true,
            ..self
        }
    }

    pub const fn as_text(self) -> Self {
        Self {
            as_text: true,
            ..self
        }
    }

    pub const fn nested(self, fields: &'static [Field]) -> Self {
        Self {
            nested: Some(fields),
            ..self
        }
    }

    /// The key this field is written under in the encoded form.
    pub fn key(&self) -> &'static str {
        match self.rename {
            Some(key) => key,
            None => self.name,
        }
    }
}

/// Trait that any record type must implement to be encoded by the codec.
///
/// `FIELDS` lists every serialized field in declared order. Fields that serde
/// emits but the schema does not mention are not encoded.
pub trait Entity: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Short type label used in logs (e.g. `"User"`).
    const NAME: &'static str;

    /// The field schema, in declared order.
    const FIELDS: &'static [Field];
}

/// An [`Entity`] with identity, storable in a [`DataStore`](crate::framework::DataStore).
pub trait Keyed: Entity {
    /// The unique identifier for this entity (e.g. `UserId`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Returns the entity's identifier.
    fn id(&self) -> Self::Id;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_compose() {
        const F: Field = Field::new("income").rename("pay").omit_if_empty().as_text();
        assert_eq!(F.name, "income");
        assert_eq!(F.key(), "pay");
        assert!(F.omit_if_empty);
        assert!(F.as_text);
        assert!(F.nested.is_none());
    }

    #[test]
    fn key_defaults_to_name() {
        assert_eq!(Field::new("street").key(), "street");
    }
}
