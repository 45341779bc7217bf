//! Application state.
//!
//! [`AppState`] is the composition root: it owns the [`PostStore`], the
//! [`ArchivePool`], the generator feeding both, and the presentation state
//! around them (focus, form draft, cursors, archive visibility, dark mode).
//! Every view reads the store through this one handle instead of keeping
//! copies, so a mutation is visible to all of them on the next render.
//!
//! # State Components
//!
//! - **Store**: posts and search query; the filtered view is derived
//! - **Archive**: read-only pool, materialized the first time it is shown
//! - **Form**: draft of the next post
//! - **Cursors**: selection within the visible posts and within the archive
//! - **Themes**: dark and light palettes plus the current mode
//!
//! # Example
//!
//! ```rust
//! use atomic_blog::app::AppState;
//! use atomic_blog::generator::RandomPostGenerator;
//! use atomic_blog::store::{ArchivePool, PostStore};
//! use atomic_blog::ui::ThemeSet;
//!
//! let mut generator = RandomPostGenerator::seeded(3);
//! let store = PostStore::initialize(&mut generator);
//! let mut state = AppState::new(store, ArchivePool::new(100), Box::new(generator), ThemeSet::default());
//!
//! state.show_archive();
//! assert_eq!(state.archive.len(), 100);
//! ```

use super::form::PostForm;
use super::modes::{FormField, Focus};
use crate::domain::{FormError, Post};
use crate::generator::PostSource;
use crate::store::{ArchivePool, Memo, MemoStats, PostStore};
use crate::ui::theme::{Theme, ThemeSet};
use crate::ui::viewmodel::{ArchivePanel, ArchiveSnapshot};
use std::cell::RefCell;
use std::rc::Rc;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Editable posts and the active search query.
    pub store: PostStore,

    /// Read-only archive; empty until first shown.
    pub archive: ArchivePool,

    /// Source for the archive pool.
    generator: Box<dyn PostSource>,

    /// Where keyboard input goes.
    pub focus: Focus,

    /// Draft of the next post.
    pub form: PostForm,

    /// Selected index within the visible posts.
    pub post_cursor: usize,

    /// Selected index within the archive.
    pub archive_cursor: usize,

    /// Whether the archive panel is shown.
    pub archive_visible: bool,

    pub themes: ThemeSet,
    pub dark_mode: bool,

    /// Last built archive panel, keyed by its input snapshot.
    pub(crate) archive_panel: RefCell<Memo<ArchiveSnapshot, Rc<ArchivePanel>>>,
}

impl AppState {
    /// Wires a store, an archive and the archive's post source together.
    ///
    /// Starts in browse focus, dark mode, with the archive hidden.
    #[must_use]
    pub fn new(
        store: PostStore,
        archive: ArchivePool,
        generator: Box<dyn PostSource>,
        themes: ThemeSet,
    ) -> Self {
        Self {
            store,
            archive,
            generator,
            focus: Focus::Browse,
            form: PostForm::default(),
            post_cursor: 0,
            archive_cursor: 0,
            archive_visible: false,
            themes,
            dark_mode: true,
            archive_panel: RefCell::new(Memo::new()),
        }
    }

    /// Palette for the current mode.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.active(self.dark_mode)
    }

    /// Posts matching the current search query.
    #[must_use]
    pub fn visible_posts(&self) -> Rc<[Post]> {
        self.store.visible_posts()
    }

    /// Number of posts matching the current search query.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_posts().len()
    }

    /// Currently selected visible post, if any.
    #[must_use]
    pub fn selected_post(&self) -> Option<Post> {
        self.visible_posts().get(self.post_cursor).cloned()
    }

    /// Currently selected archive entry, if the archive has been shown.
    #[must_use]
    pub fn selected_archive_post(&self) -> Option<&Post> {
        self.archive.get(self.archive_cursor)
    }

    fn focused_list_len(&self) -> usize {
        if self.focus == Focus::Archive {
            self.archive.len()
        } else {
            self.visible_count()
        }
    }

    fn focused_cursor_mut(&mut self) -> &mut usize {
        if self.focus == Focus::Archive {
            &mut self.archive_cursor
        } else {
            &mut self.post_cursor
        }
    }

    /// Moves the cursor of the focused list down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.focused_list_len();
        if len == 0 {
            return;
        }
        let cursor = self.focused_cursor_mut();
        *cursor = (*cursor + 1) % len;
    }

    /// Moves the cursor of the focused list up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.focused_list_len();
        if len == 0 {
            return;
        }
        let cursor = self.focused_cursor_mut();
        *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
    }

    /// Keeps the post cursor inside the visible list after it shrank.
    pub fn clamp_post_cursor(&mut self) {
        let len = self.visible_count();
        self.post_cursor = if len == 0 { 0 } else { self.post_cursor.min(len - 1) };
    }

    /// Appends `c` to the search query.
    pub fn push_search_char(&mut self, c: char) {
        let mut query = self.store.search_query().to_owned();
        query.push(c);
        self.store.set_search_query(query);
        self.clamp_post_cursor();
    }

    /// Removes the last character of the search query.
    pub fn pop_search_char(&mut self) {
        let mut query = self.store.search_query().to_owned();
        query.pop();
        self.store.set_search_query(query);
        self.clamp_post_cursor();
    }

    /// Resets the search query to empty.
    pub fn clear_search(&mut self) {
        self.store.set_search_query(String::new());
        self.clamp_post_cursor();
    }

    /// Hands the form draft to the store when complete.
    ///
    /// On success the new post is selected and focus returns to browsing.
    ///
    /// # Errors
    ///
    /// Returns the form's refusal; the store is not touched.
    pub fn submit_form(&mut self) -> Result<Post, FormError> {
        let post = self.form.submit()?;
        self.store.add_post(post.clone());
        self.focus = Focus::Browse;
        self.post_cursor = 0;
        Ok(post)
    }

    /// Opens the form with the title field active.
    pub fn start_compose(&mut self) {
        self.focus = Focus::Compose(FormField::Title);
    }

    /// Empties the post list.
    pub fn clear_posts(&mut self) {
        self.store.clear_posts();
        self.clamp_post_cursor();
    }

    /// Shows the archive, generating it on first display, and focuses it.
    pub fn show_archive(&mut self) {
        self.archive.materialize(self.generator.as_mut());
        self.archive_visible = true;
        self.focus = Focus::Archive;
        if self.archive_cursor >= self.archive.len() {
            self.archive_cursor = 0;
        }
    }

    /// Hides the archive; its posts stay generated.
    pub fn hide_archive(&mut self) {
        self.archive_visible = false;
        if self.focus == Focus::Archive {
            self.focus = Focus::Browse;
        }
    }

    pub fn toggle_archive(&mut self) {
        if self.archive_visible {
            self.hide_archive();
        } else {
            self.show_archive();
        }
    }

    /// Copies the selected archive entry to the front of the post list.
    pub fn add_selected_archive_post(&mut self) -> bool {
        let added = self.archive.copy_into(self.archive_cursor, &mut self.store);
        if added {
            self.clamp_post_cursor();
        }
        added
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Hit/miss counters of the memoized archive panel.
    #[must_use]
    pub fn archive_panel_stats(&self) -> MemoStats {
        self.archive_panel.borrow().stats()
    }
}
