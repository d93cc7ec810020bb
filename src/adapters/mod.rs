//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Project persistence (YAML files, in-memory)

pub mod storage;

pub use storage::{FileProjectStorage, InMemoryProjectStorage};
