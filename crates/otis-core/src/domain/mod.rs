//! Domain layer for otis.
//!
//! Pure manuscript logic: the node tree loaded from disk, the read-only
//! model views built over it, naming conventions, and the ordering engine
//! that turns a renumbering decision into a [`WorkList`].
//!
//! All filesystem access goes through the
//! [`Filesystem`](crate::application::ports::Filesystem) port.

pub mod error;
pub mod metadata;
pub mod model;
pub mod node;
pub mod numbering;
pub mod ordering;
pub mod text;
pub mod work_list;

pub use error::{DomainError, ErrorCategory};
pub use metadata::{ChapterMetadata, WorkMetadata};
pub use model::{Chapter, Folder, Manuscript, Scene, Work, approximate_word_count};
pub use node::Node;
pub use ordering::{Entry, make_room, move_across, move_to_index, next_index};
pub use work_list::{Operation, WorkList};
