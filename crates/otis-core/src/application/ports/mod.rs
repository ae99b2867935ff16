//! Application ports (traits) for external dependencies.
//!
//! Driven ports are called by the application and implemented by
//! `otis-adapters` (or by the CLI, for the interactive prompt):
//!   - `Filesystem`: directory listing, reads, and the four mutations a
//!     work list needs
//!   - `Confirmer`: yes/no gate before a multi-step change

pub mod output;

pub use output::{Confirmer, DirEntry, Filesystem};
