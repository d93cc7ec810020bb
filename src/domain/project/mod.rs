//! Project Module - Stored decision projects of either engine.

mod document;

pub use document::{ProjectDocument, ProjectKind, ProjectType};
