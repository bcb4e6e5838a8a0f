//! # Mock DataStore & Testing Guide
//!
//! [`MockDataStore<T>`] implements the same [`DataStore<T>`] capability as the production
//! store, but its contents are fixed at construction time. It lets you test service logic
//! (e.g. `UserService`) deterministically, without a real backing store.
//!
//! ## When to use the Mock vs the Real Store
//!
//! | Feature | MockDataStore | InMemoryStore |
//! |---------|---------------|---------------|
//! | **Contents** | Fixed seed | Changes with `put` |
//! | **Capabilities** | `get` only | `get` + `put` |
//! | **Use Case** | Unit testing logic *around* the store | Testing storage itself or full flows |
//!
//! ## Fixtures
//!
//! Build a fresh mock per test through a small factory function. There is no shared
//! fixture state between test cases.
//!
//! ```rust
//! use entity_store::framework::{DataStore, MockDataStore};
//! use entity_store::model::{User, UserId};
//!
//! fn seeded_users() -> MockDataStore<User> {
//!     MockDataStore::new([User::new(1, "John")])
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = seeded_users();
//!     assert_eq!(store.get(&UserId(1)).await.unwrap().first, "John");
//!     assert!(store.get(&UserId(2)).await.is_none());
//! }
//! ```

use crate::framework::entity::Keyed;
use crate::framework::store::DataStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// A read-only, pre-seeded [`DataStore`] for tests.
///
/// Unseeded ids always come back as `None`. Reads never change the mock.
pub struct MockDataStore<T: Keyed> {
    seed: HashMap<T::Id, T>,
}

impl<T: Keyed> MockDataStore<T> {
    /// Creates a mock holding exactly `entities`, keyed by their own ids.
    pub fn new(entities: impl IntoIterator<Item = T>) -> Self {
        Self::from(
            entities
                .into_iter()
                .map(|e| (e.id(), e))
                .collect::<HashMap<_, _>>(),
        )
    }

    /// Number of seeded entities.
    pub fn len(&self) -> usize {
        self.seed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seed.is_empty()
    }
}

impl<T: Keyed> From<HashMap<T::Id, T>> for MockDataStore<T> {
    /// Seeds the mock from an explicit id → entity mapping.
    fn from(seed: HashMap<T::Id, T>) -> Self {
        Self { seed }
    }
}

#[async_trait]
impl<T: Keyed> DataStore<T> for MockDataStore<T> {
    async fn get(&self, id: &T::Id) -> Option<T> {
        let item = self.seed.get(id).cloned();
        debug!(entity_type = T::NAME, %id, found = item.is_some(), "Mock get");
        item
    }
}
