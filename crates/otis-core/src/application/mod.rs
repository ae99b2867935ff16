//! Application layer for otis.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`ManuscriptService`, `WorkListExecutor`)
//! - **Ports**: traits for the filesystem and the confirmation prompt
//! - **Errors**: application-specific error types
//!
//! All manuscript rules live in `crate::domain`; this layer only wires them
//! to I/O.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ExecutionOutcome, ManuscriptService, MkdirRequest, MoveRequest, PlannedChange, TouchRequest,
    WorkListExecutor,
};

pub use ports::{Confirmer, DirEntry, Filesystem};

pub use error::ApplicationError;
