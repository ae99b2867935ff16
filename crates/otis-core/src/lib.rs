//! otis core - hexagonal architecture implementation.
//!
//! This crate provides the domain and application layers for the otis
//! manuscript manager, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             otis-cli (CLI)              │
//! │      touch / mkdir / mv / wordcount     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │ (ManuscriptService, WorkListExecutor)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │        (Filesystem, Confirmer)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     otis-adapters (Infrastructure)      │
//! │ (LocalFilesystem, MemoryFilesystem, …)  │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Node, Manuscript, ordering, WorkList)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use otis_core::prelude::*;
//!
//! let service = ManuscriptService::new(filesystem, confirmer);
//! let plan = service.plan_touch(manuscript_dir, &TouchRequest {
//!     folder: manuscript_dir.join("01-act-two"),
//!     title: "The Long Night".into(),
//!     at: Some(1),
//! })?;
//! service.apply(&plan.work_list, false, Some(manuscript_dir))?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ExecutionOutcome, ManuscriptService, MkdirRequest, MoveRequest, PlannedChange,
        TouchRequest, WorkListExecutor,
        ports::{Confirmer, DirEntry, Filesystem},
    };
    pub use crate::domain::{
        Chapter, DomainError, Folder, Manuscript, Operation, Scene, Work, WorkList,
    };
    pub use crate::error::{ErrorCategory, OtisError, OtisResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
