//! # Orderlens Analytics Engine
//!
//! This crate is the report runner: a fixed battery of read-only analytical
//! queries over the order collection.
//!
//! ## Architectural Principles
//!
//! - **Pure logic crate:** It has no knowledge of files, configuration
//!   sources, or the console. It depends only on `core-types` and the
//!   collection handle from `datastore`.
//! - **Stateless calculation:** `ReportEngine` holds nothing. Every report is
//!   a pure function from the collection (plus parameters) to a typed report
//!   struct; no state is shared between calls. This makes each report
//!   independently testable.
//!
//! ## Public API
//!
//! - `ReportEngine`: the struct that contains the query logic.
//! - `report`: the typed result structs, one per report.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::ReportEngine;
pub use report::{
    FilteredOrders, ProductFrequencies, ProductFrequency, RankedRegion, RankedRegions,
    RegionCount, RegionTotals,
};
