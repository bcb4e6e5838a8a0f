//! # Entity Store
//!
//! > **A small typed data-access layer with swappable storage.**
//!
//! This crate pairs two ideas:
//! - **Tagged entities**: record types whose fields carry encoding directives
//!   (rename, omit-if-empty, encode-as-text), consumed by one generic codec.
//! - **Dependency-inverted storage**: services depend on a [`DataStore`](framework::DataStore)
//!   capability, so the same service code runs against a real store or a pre-seeded mock.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Generics: The Power of `T`
//! You'll see `InMemoryStore<T: Keyed>` and `codec::encode<T: Entity>`. The store and codec
//! are written **once** and work for any record that describes itself through the
//! [`Entity`](framework::Entity) trait.
//!
//! ### Mocking: Testing without Pain
//! [`MockDataStore`](framework::MockDataStore) is seeded at construction and never changes.
//! Services accept it wherever they accept a real store. See the [`framework::mock`] module.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Absence is not an error
//! Stores answer `get` with an `Option`. Only the service layer turns a miss into a typed
//! error ([`UserError::NotFound`](user_service::UserError::NotFound)).
//!
//! ### 2. Concurrency Model
//! [`InMemoryStore`](framework::InMemoryStore) guards its map with an async `RwLock`: readers
//! share, a writer excludes everyone for one operation. Nothing here blocks on I/O.
//!
//! ### 3. Observability
//! We use `tracing` everywhere with structured fields. See the [`lifecycle::tracing`] module.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Entity schema, codec, storage capability, in-memory store and mock.
//! - **Key items**: [`Entity`](framework::Entity), [`codec`](framework::codec),
//!   [`DataStore`](framework::DataStore).
//!
//! ### 2. The Records ([`model`])
//! - **Role**: Concrete entities: [`User`](model::User), [`Person`](model::Person),
//!   [`Address`](model::Address), [`Employee`](model::Employee).
//!
//! ### 3. The Service ([`user_service`])
//! - **Role**: Turns storage outcomes into domain results.
//! - **Key items**: [`UserService`](user_service::UserService).
//!
//! ### 4. The Runtime ([`lifecycle`])
//! - **Role**: Logging setup and store configuration.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod user_service;
