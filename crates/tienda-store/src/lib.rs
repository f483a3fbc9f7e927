//! Product store implementations for the tienda catalog engine.
//!
//! `tienda-catalog` defines the [`ProductStore`] boundary; this crate
//! provides concrete stores. Today that is [`MemoryStore`], an in-process
//! collection suitable for tests, seeding, and embedders that do not run a
//! document database.
//!
//! [`ProductStore`]: tienda_catalog::store::ProductStore

mod memory;

pub use memory::MemoryStore;
