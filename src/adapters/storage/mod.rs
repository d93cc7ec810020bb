//! Storage Adapters
//!
//! Implementations of the ProjectRepository port.
//!
//! ## Available Adapters
//!
//! - **FileProjectStorage** - Stores each project as a YAML file on disk
//! - **InMemoryProjectStorage** - Stores projects in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileProjectStorage, InMemoryProjectStorage};
//!
//! // Production: file-based storage
//! let storage = FileProjectStorage::new("./data/projects");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryProjectStorage::new();
//! ```

mod file_project_storage;
mod in_memory_project_storage;

pub use file_project_storage::FileProjectStorage;
pub use in_memory_project_storage::InMemoryProjectStorage;
