//! Infrastructure adapters for otis.
//!
//! This crate implements the ports defined in `otis_core::application::ports`.
//! It contains all direct I/O.

pub mod confirm;
pub mod filesystem;

// Re-export commonly used adapters
pub use confirm::StaticConfirmer;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
