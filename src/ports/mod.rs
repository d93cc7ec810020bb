//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `ProjectRepository` - Persistence of AHP and expert-voting projects

mod project_repository;

pub use project_repository::{ProjectRepository, StorageError};
