//! The post store: single source of truth for the editable post list and
//! the active search query.
//!
//! # State
//!
//! - **Posts**: ordered list, newest first once posts are added
//! - **Search query**: stored verbatim, folded to lowercase only when the
//!   filter runs
//! - **Revision**: bumped on every observable change to the post list; it
//!   stands in for list identity when keying the filter cache
//!
//! # Derived State
//!
//! [`PostStore::visible_posts`] is recomputed on read from `(posts, query)`.
//! The result is memoized under `(revision, query)` and handed out as a
//! shared `Rc<[Post]>`, so repeated reads with unchanged inputs return the
//! same allocation.
//!
//! # Example
//!
//! ```rust
//! use atomic_blog::domain::Post;
//! use atomic_blog::generator::RandomPostGenerator;
//! use atomic_blog::store::PostStore;
//!
//! let mut store = PostStore::initialize(&mut RandomPostGenerator::seeded(1));
//! assert_eq!(store.posts().len(), 30);
//!
//! store.add_post(Post::new("A", "B"));
//! assert_eq!(store.posts()[0], Post::new("A", "B"));
//!
//! store.set_search_query("zzz_no_match");
//! assert!(store.visible_posts().is_empty());
//! ```

use super::memo::{Memo, MemoStats};
use crate::domain::Post;
use crate::generator::PostSource;
use std::cell::RefCell;
use std::rc::Rc;

/// Number of posts seeded by [`PostStore::initialize`].
pub const INITIAL_POST_COUNT: usize = 30;

/// Dependency key of the filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterKey {
    revision: u64,
    query: String,
}

/// Owns the post list and search query and derives the filtered view.
///
/// Every operation is total: nothing here validates posts or rejects input.
/// Refusing incomplete posts is the post form's job.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    search_query: String,
    revision: u64,
    visible: RefCell<Memo<FilterKey, Rc<[Post]>>>,
}

impl PostStore {
    /// Creates a store holding `posts` and an empty query.
    #[must_use]
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    /// Creates a store seeded with `count` posts drawn from `source`.
    #[must_use]
    pub fn seeded(source: &mut dyn PostSource, count: usize) -> Self {
        let _span = tracing::debug_span!("seed_posts", count).entered();
        Self::with_posts(source.generate_many(count))
    }

    /// Creates a store seeded with [`INITIAL_POST_COUNT`] posts.
    #[must_use]
    pub fn initialize(source: &mut dyn PostSource) -> Self {
        Self::seeded(source, INITIAL_POST_COUNT)
    }

    /// Prepends `post`; it becomes index 0 and existing posts keep their
    /// relative order.
    pub fn add_post(&mut self, post: Post) {
        tracing::debug!(title = %post.title, previous_len = self.posts.len(), "post added");
        self.posts.insert(0, post);
        self.revision += 1;
    }

    /// Removes every post. Clearing an empty store changes nothing.
    pub fn clear_posts(&mut self) {
        if self.posts.is_empty() {
            tracing::trace!("clear requested on empty store");
            return;
        }
        tracing::debug!(removed = self.posts.len(), "posts cleared");
        self.posts = Vec::new();
        self.revision += 1;
    }

    /// Replaces the search query verbatim.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        tracing::trace!(query = %self.search_query, "search query set");
    }

    /// Returns the posts matching the current query, in list order.
    ///
    /// With an empty query every post is returned. Otherwise a post is
    /// kept when its `title + " " + body` contains the query, ignoring
    /// case.
    #[must_use]
    pub fn visible_posts(&self) -> Rc<[Post]> {
        let key = FilterKey {
            revision: self.revision,
            query: self.search_query.clone(),
        };

        let mut cache = self.visible.borrow_mut();
        let visible = cache.get_or_compute(key, |key| self.filter(&key.query));
        Rc::clone(visible)
    }

    fn filter(&self, query: &str) -> Rc<[Post]> {
        let _span = tracing::debug_span!(
            "filter_posts",
            total_posts = self.posts.len(),
            query_len = query.len()
        )
        .entered();

        if query.is_empty() {
            return self.posts.clone().into();
        }

        let needle = query.to_lowercase();
        let visible: Rc<[Post]> = self
            .posts
            .iter()
            .filter(|post| post.matches_lowercase(&needle))
            .cloned()
            .collect();

        tracing::debug!(visible_count = visible.len(), "filter applied");
        visible
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Counter that changes whenever the post list changes.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Hit/miss counters of the filtered-view cache.
    #[must_use]
    pub fn filter_cache_stats(&self) -> MemoStats {
        self.visible.borrow().stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{RandomPostGenerator, ScriptedPosts};

    fn sample_store() -> PostStore {
        PostStore::with_posts(vec![
            Post::new("Quantum Driver", "We need to parse the SMTP bus!"),
            Post::new("Edge", "Case"),
            Post::new("virtual matrix", "Try to hack the quantum port"),
        ])
    }

    #[test]
    fn initialize_seeds_thirty_posts_and_empty_query() {
        let store = PostStore::initialize(&mut RandomPostGenerator::seeded(5));
        assert_eq!(store.posts().len(), INITIAL_POST_COUNT);
        assert_eq!(store.search_query(), "");
        assert_eq!(&*store.visible_posts(), store.posts());
    }

    #[test]
    fn add_post_prepends() {
        let mut store = sample_store();
        let before = store.posts().to_vec();

        store.add_post(Post::new("A", "B"));

        assert_eq!(store.posts().len(), before.len() + 1);
        assert_eq!(store.posts()[0], Post::new("A", "B"));
        assert_eq!(&store.posts()[1..], &before[..]);
    }

    #[test]
    fn add_post_accepts_incomplete_posts() {
        let mut store = PostStore::default();
        store.add_post(Post::new("", ""));
        assert_eq!(store.posts(), &[Post::new("", "")]);
    }

    #[test]
    fn clear_posts_is_idempotent() {
        let mut store = sample_store();
        store.clear_posts();
        assert!(store.posts().is_empty());
        let revision = store.revision();

        store.clear_posts();
        assert!(store.posts().is_empty());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn query_is_stored_verbatim() {
        let mut store = sample_store();
        store.set_search_query("  QuAnTuM ");
        assert_eq!(store.search_query(), "  QuAnTuM ");
    }

    #[test]
    fn filter_is_case_insensitive() {
        let mut store = sample_store();
        store.set_search_query("quantum");
        let lower: Vec<Post> = store.visible_posts().to_vec();
        store.set_search_query("QUANTUM");
        let upper: Vec<Post> = store.visible_posts().to_vec();

        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 2);
        assert_eq!(lower[0].title, "Quantum Driver");
        assert_eq!(lower[1].title, "virtual matrix");
    }

    #[test]
    fn filter_crosses_boundary_only_through_space() {
        let mut store = sample_store();
        store.set_search_query("dge cas");
        assert_eq!(&*store.visible_posts(), &[Post::new("Edge", "Case")]);

        store.set_search_query("gecas");
        assert!(store.visible_posts().is_empty());
    }

    #[test]
    fn unchanged_inputs_reuse_the_cached_view() {
        let mut store = sample_store();
        store.set_search_query("the");

        let first = store.visible_posts();
        let second = store.visible_posts();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(store.filter_cache_stats(), MemoStats { hits: 1, misses: 1 });
    }

    #[test]
    fn mutation_invalidates_the_cached_view() {
        let mut store = sample_store();
        store.set_search_query("edge");
        let before = store.visible_posts();

        store.add_post(Post::new("edge two", "body"));
        let after = store.visible_posts();

        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(after.len(), 2);
        assert_eq!(after[0].title, "edge two");
    }

    #[test]
    fn setting_the_same_query_keeps_the_cache() {
        let mut store = sample_store();
        store.set_search_query("bus");
        let first = store.visible_posts();
        store.set_search_query("bus");
        assert!(Rc::ptr_eq(&first, &store.visible_posts()));
    }

    #[test]
    fn seeded_draws_from_the_source_in_order() {
        let mut source = ScriptedPosts::new(vec![Post::new("1", "a"), Post::new("2", "b")]);
        let store = PostStore::seeded(&mut source, 3);
        let titles: Vec<&str> = store.posts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["1", "2", "1"]);
    }
}
