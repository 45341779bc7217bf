//! Archive pool: a large, read-only set of generated posts.
//!
//! The pool is empty until first displayed. [`ArchivePool::materialize`]
//! generates every entry on that first call and never again for the rest of
//! the session. Entries are never edited; the only thing the rest of the
//! app does with them is copy one into the [`PostStore`].

use super::post_store::PostStore;
use crate::domain::Post;
use crate::generator::PostSource;
use std::cell::OnceCell;

/// Default number of archived posts.
pub const DEFAULT_ARCHIVE_SIZE: usize = 10_000;

/// Lazily generated, immutable post archive.
#[derive(Debug)]
pub struct ArchivePool {
    size: usize,
    posts: OnceCell<Vec<Post>>,
}

impl ArchivePool {
    /// Creates a pool that will hold `size` posts once materialized.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            posts: OnceCell::new(),
        }
    }

    /// Generates the archive on the first call and returns it.
    ///
    /// Later calls ignore `source` and return the posts generated the first
    /// time.
    pub fn materialize(&self, source: &mut dyn PostSource) -> &[Post] {
        self.posts.get_or_init(|| {
            let _span = tracing::debug_span!("materialize_archive", size = self.size).entered();
            let posts = source.generate_many(self.size);
            tracing::debug!(generated = posts.len(), "archive materialized");
            posts
        })
    }

    #[must_use]
    pub fn is_materialized(&self) -> bool {
        self.posts.get().is_some()
    }

    /// Materialized posts; empty before the first [`materialize`](Self::materialize).
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        self.posts.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of posts currently available (zero before materialization).
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured size, whether or not the pool has been materialized.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts().get(index)
    }

    /// Copies entry `index` into `store` through [`PostStore::add_post`].
    ///
    /// Returns `false` without touching the store if there is no such entry.
    pub fn copy_into(&self, index: usize, store: &mut PostStore) -> bool {
        let Some(post) = self.get(index) else {
            tracing::debug!(index, available = self.len(), "no archive entry to copy");
            return false;
        };
        store.add_post(post.clone());
        true
    }
}

impl Default for ArchivePool {
    fn default() -> Self {
        Self::new(DEFAULT_ARCHIVE_SIZE)
    }
}
