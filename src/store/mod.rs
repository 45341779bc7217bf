//! State containers: the post store, the archive pool and the memo cache
//! they share.
//!
//! # Modules
//!
//! - [`post_store`]: Editable post list, search query and filtered view
//! - [`archive`]: Lazily generated read-only archive
//! - [`memo`]: Dependency-keyed single-entry cache

pub mod archive;
pub mod memo;
pub mod post_store;

pub use archive::{ArchivePool, DEFAULT_ARCHIVE_SIZE};
pub use memo::{Memo, MemoStats};
pub use post_store::{PostStore, INITIAL_POST_COUNT};
