use crate::framework::{Entity, Field, Keyed};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Represents a registered user in the system.
///
/// # Data Access
/// This struct implements [`Keyed`], so it can be held by any
/// [`DataStore`](crate::framework::DataStore) and served by
/// [`UserService`](crate::user_service::UserService).
///
/// Identity is the `id` alone: a store holds at most one `User` per id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first: String,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within a store
    /// * `first` - Display name
    pub fn new(id: u64, first: impl Into<String>) -> Self {
        Self {
            id: UserId(id),
            first: first.into(),
        }
    }
}

impl Entity for User {
    const NAME: &'static str = "User";
    const FIELDS: &'static [Field] = &[Field::new("id"), Field::new("first")];
}

impl Keyed for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::codec;

    #[test]
    fn test_user_encoding() {
        let user = User::new(1, "John");
        assert_eq!(
            codec::encode_to_string(&user).unwrap(),
            r#"{"id":1,"first":"John"}"#
        );
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId(42).to_string(), "user_42");
    }
}
