//! Persistence Adapters
//!
//! Implementations of the store port.

mod in_memory;

pub use in_memory::InMemoryStore;
