//! # Orderlens Datastore
//!
//! This crate is the storage adapter for the report runner. It encapsulates
//! all access to the order data behind a small, read-only API.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** The rest of the application never touches files or JSON
//!   directly; it asks this crate for an `OrderCollection` and queries that.
//! - **Load once, read forever:** The collection is bulk-loaded from a JSON
//!   fixture before any report runs and is immutable afterwards. The only
//!   reset is whole-collection replacement by loading again.
//!
//! ## Public API
//!
//! - `load_fixture`: reads a JSON fixture file into an `OrderCollection`.
//! - `OrderCollection`: the in-memory, read-only collection handle.
//! - `DatastoreError`: the specific error types that can be returned from this crate.

pub mod collection;
pub mod error;
pub mod fixture;

// Re-export the key components to create a clean, public-facing API.
pub use collection::OrderCollection;
pub use error::DatastoreError;
pub use fixture::load_fixture;
