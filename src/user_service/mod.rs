//! # User Service
//!
//! Business-level access to [`User`] records on top of any [`DataStore<User>`].
//!
//! ## Overview
//!
//! The service is a thin, deterministic translation layer. It asks the store for a record
//! and turns a structural miss (`None`) into [`UserError::NotFound`]. It does no retries and
//! no caching, and it never mutates the entities it hands back.
//!
//! ## Usage
//!
//! ```rust
//! use entity_store::framework::InMemoryStore;
//! use entity_store::model::{User, UserId};
//! use entity_store::user_service::{UserError, UserService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = InMemoryStore::seeded([User::new(1, "John")]);
//!     let service = UserService::new(store);
//!
//!     assert_eq!(service.get_user(UserId(1)).await, Ok(User::new(1, "John")));
//!     assert_eq!(
//!         service.get_user(UserId(2)).await,
//!         Err(UserError::NotFound { id: UserId(2) })
//!     );
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Storage-agnostic**: works with [`InMemoryStore`](crate::framework::InMemoryStore),
//!   [`MockDataStore`](crate::framework::MockDataStore), or any other implementation
//! - **Single translation point**: the only place a missing record becomes a domain error

pub mod error;

pub use error::*;

use crate::framework::{DataStore, DataStoreMut};
use crate::model::{User, UserId};
use tracing::{debug, instrument, warn};

/// Service for looking up and registering users.
pub struct UserService<S> {
    store: S,
}

impl<S: DataStore<User>> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch a user by id.
    ///
    /// # Errors
    /// Returns [`UserError::NotFound`] carrying `id` when the store has no such user.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        match self.store.get(&id).await {
            Some(user) => {
                debug!("User found");
                Ok(user)
            }
            None => {
                warn!("User not found");
                Err(UserError::NotFound { id })
            }
        }
    }
}

impl<S: DataStoreMut<User>> UserService<S> {
    /// Store `user`, replacing any existing user with the same id.
    #[instrument(skip(self, user), fields(id = %user.id))]
    pub async fn register_user(&self, user: User) {
        debug!("Storing user");
        self.store.put(user).await;
    }
}
