//! # Orderlens Core Types
//!
//! This crate defines the foundational data structures shared by every other
//! crate in the workspace.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate sits at the bottom of the dependency graph. It
//!   knows nothing about configuration, storage, or reporting; it only
//!   describes the data.
//! - **Schemaless records:** Fixture data carries no schema guarantees, so
//!   every field of `Order` is optional. A missing field is data, not an error.
//!
//! ## Public API
//!
//! - `Order`: a single purchase record as loaded from the fixture.

pub mod order;

// Re-export the core types to provide a clean public API.
pub use order::Order;
