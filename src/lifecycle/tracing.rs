//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log lines use a compact format without module paths (`with_target(false)`); the
//! `entity_type` field already says which store or codec emitted them. The level is taken
//! from `RUST_LOG`.
//!
//! ```bash
//! # Store creation and service misses
//! RUST_LOG=info cargo run
//!
//! # Every Get/Put with its id and outcome
//! RUST_LOG=debug cargo run
//!
//! # Encoded/decoded byte counts as well
//! RUST_LOG=trace cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! INFO Store seeded entity_type="User" size=1
//! DEBUG get_user{id=UserId(1)}: Get entity_type="User" id=user_1 found=true
//! DEBUG get_user{id=UserId(1)}: User found
//! DEBUG get_user{id=UserId(2)}: Get entity_type="User" id=user_2 found=false
//! WARN get_user{id=UserId(2)}: User not found
//! ```

/// Installs the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Like [`setup_tracing`], but does nothing if a subscriber is already installed.
///
/// Handy in tests, where several cases may try to initialize logging.
pub fn try_setup_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
