//! In-memory keyed record store for building designs.
//!
//! The store holds no business logic beyond existence checks: records are
//! created, read, replaced, and deleted whole, and the analysis layer
//! consumes it through the [`DesignSource`](solgain_core::DesignSource)
//! seam.

mod memory;

pub use memory::{MemoryStore, StoreError};
