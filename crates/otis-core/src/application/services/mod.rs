//! Application services - orchestrate use cases.
//!
//! `ManuscriptService` loads the model and plans `touch`/`mkdir`/`mv` as
//! work lists; `WorkListExecutor` applies them.

pub mod executor;
pub mod manuscript_service;

pub use executor::{ExecutionOutcome, WorkListExecutor};
pub use manuscript_service::{
    ManuscriptService, MkdirRequest, MoveRequest, PlannedChange, TouchRequest,
};
