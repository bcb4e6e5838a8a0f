//! Generic data-access framework for tagged entities.
//!
//! This module provides the building blocks for storing and encoding entities without
//! writing per-type plumbing.
//!
//! # Main Components
//!
//! - [`Entity`] / [`Keyed`] - Traits that record types implement to be encoded and stored
//! - [`Field`] - Declarative per-field encoding directives
//! - [`codec`] - Encode/decode any [`Entity`] honoring its directives
//! - [`DataStore`] / [`DataStoreMut`] - The storage capability set
//! - [`InMemoryStore`] - Lock-guarded map implementation
//! - [`CodecError`] - Encoding and decoding failures
//!
//! # Testing
//!
//! See [`mock`] module for a pre-seeded store that tests services without a real backend.

pub mod codec;
pub mod entity;
pub mod error;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use entity::{Entity, Field, Keyed};
pub use error::CodecError;
pub use mock::MockDataStore;
pub use store::{DataStore, DataStoreMut, InMemoryStore};
