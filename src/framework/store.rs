//! # DataStore Capability
//!
//! Abstract read/write access to [`Keyed`] entities, plus the in-memory implementation.
//!
//! ## Capability Set
//!
//! - [`DataStore`]: `get(id)`. Absence is an `Option::None`, never an error. Deciding how to
//!   surface a missing record is the service layer's job.
//! - [`DataStoreMut`]: `put(entity)`. Overwrites whatever is stored under the entity's id.
//!   Read-only doubles (see [`MockDataStore`](crate::framework::MockDataStore)) skip it.
//!
//! ## Concurrency Model
//!
//! [`InMemoryStore`] guards its map with a `tokio::sync::RwLock`. Any number of `get`s run
//! together; a `put` excludes every reader and writer for the duration of the insert. Each
//! single-id operation is therefore atomic, and the last completed `put` for an id wins.

use crate::framework::entity::Keyed;
use crate::lifecycle::StoreConfig;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Read capability over entities keyed by identifier.
#[async_trait]
pub trait DataStore<T: Keyed>: Send + Sync {
    /// Fetch a copy of the entity stored under `id`, or `None` if there is none.
    async fn get(&self, id: &T::Id) -> Option<T>;
}

/// Write capability. Implementations must make `put` atomic per id.
#[async_trait]
pub trait DataStoreMut<T: Keyed>: DataStore<T> {
    /// Store `entity` under its own id, replacing any previous value.
    async fn put(&self, entity: T);
}

/// Map-backed store shared behind an `Arc`. Cloning yields another handle to the same map.
pub struct InMemoryStore<T: Keyed> {
    entries: Arc<RwLock<HashMap<T::Id, T>>>,
    label: &'static str,
}

impl<T: Keyed> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            label: self.label,
        }
    }
}

impl<T: Keyed> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> InMemoryStore<T> {
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    pub fn with_config(config: &StoreConfig) -> Self {
        let label = config.label.unwrap_or(T::NAME);
        info!(entity_type = label, capacity = config.initial_capacity, "Store created");
        Self {
            entries: Arc::new(RwLock::new(HashMap::with_capacity(config.initial_capacity))),
            label,
        }
    }

    /// Builds a store pre-populated with `entities`. Later duplicates of an id win.
    pub fn seeded(entities: impl IntoIterator<Item = T>) -> Self {
        let entries: HashMap<T::Id, T> = entities.into_iter().map(|e| (e.id(), e)).collect();
        info!(entity_type = T::NAME, size = entries.len(), "Store seeded");
        Self {
            entries: Arc::new(RwLock::new(entries)),
            label: T::NAME,
        }
    }

    /// Number of stored entities.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl<T: Keyed> DataStore<T> for InMemoryStore<T> {
    async fn get(&self, id: &T::Id) -> Option<T> {
        let item = self.entries.read().await.get(id).cloned();
        debug!(entity_type = self.label, %id, found = item.is_some(), "Get");
        item
    }
}

#[async_trait]
impl<T: Keyed> DataStoreMut<T> for InMemoryStore<T> {
    async fn put(&self, entity: T) {
        let id = entity.id();
        let mut entries = self.entries.write().await;
        let replaced = entries.insert(id.clone(), entity).is_some();
        debug!(entity_type = self.label, %id, replaced, size = entries.len(), "Put");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{Entity, Field};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u32,
        body: String,
    }

    impl Entity for Note {
        const NAME: &'static str = "Note";
        const FIELDS: &'static [Field] = &[Field::new("id"), Field::new("body")];
    }

    impl Keyed for Note {
        type Id = u32;
        fn id(&self) -> u32 {
            self.id
        }
    }

    fn note(id: u32, body: &str) -> Note {
        Note {
            id,
            body: body.into(),
        }
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = InMemoryStore::<Note>::new();
        assert!(store.get(&1).await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = InMemoryStore::new();
        store.put(note(1, "first")).await;
        store.put(note(1, "second")).await;

        assert_eq!(store.get(&1).await, Some(note(1, "second")));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_returns_a_copy() {
        let store = InMemoryStore::seeded([note(3, "orig")]);
        let mut copy = store.get(&3).await.unwrap();
        copy.body.push_str(" edited");

        assert_eq!(store.get(&3).await.unwrap().body, "orig");
    }

    /// A writable store needs only `get` and `put`.
    struct SingleSlot {
        slot: tokio::sync::Mutex<Option<Note>>,
    }

    #[async_trait]
    impl DataStore<Note> for SingleSlot {
        async fn get(&self, id: &u32) -> Option<Note> {
            self.slot.lock().await.clone().filter(|n| n.id == *id)
        }
    }

    #[async_trait]
    impl DataStoreMut<Note> for SingleSlot {
        async fn put(&self, entity: Note) {
            *self.slot.lock().await = Some(entity);
        }
    }

    #[tokio::test]
    async fn test_put_and_get_are_the_whole_write_capability() {
        let store = SingleSlot {
            slot: tokio::sync::Mutex::new(None),
        };
        store.put(note(2, "only")).await;

        assert_eq!(store.get(&2).await, Some(note(2, "only")));
        assert!(store.get(&1).await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_the_map() {
        let store = InMemoryStore::with_config(&StoreConfig::default().with_label("notes"));
        let other = store.clone();
        other.put(note(9, "shared")).await;

        assert_eq!(store.get(&9).await, Some(note(9, "shared")));
    }
}
