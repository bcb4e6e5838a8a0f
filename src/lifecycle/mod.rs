//! # Runtime Setup
//!
//! Ambient infrastructure shared by every caller of the core:
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//! - [`StoreConfig`] - Construction settings for [`InMemoryStore`](crate::framework::InMemoryStore)
//!
//! **Usage:**
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Every store access
//! ```

pub mod config;
pub mod tracing;

pub use self::config::*;
pub use self::tracing::*;
