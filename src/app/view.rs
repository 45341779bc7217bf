//! View model computation.
//!
//! Turns an [`AppState`] snapshot into a [`UIViewModel`] for a pane of the
//! given size: header counter, search bar, form, a window of the visible
//! posts with match highlights, and the archive panel when shown.
//!
//! The archive panel is the heavy, read-mostly part of the screen. It is
//! memoized on an [`ArchiveSnapshot`] of its inputs: typing in the search
//! box or the form leaves the snapshot unchanged and the previous panel is
//! reused as-is.

use super::modes::{FormField, Focus};
use super::state::AppState;
use crate::domain::{Post, SEARCH_SEPARATOR};
use crate::ui::helpers::{find_match_ranges, split_ranges, truncate, visible_window};
use crate::ui::layout::Layout;
use crate::ui::viewmodel::{
    ArchiveItem, ArchivePanel, ArchiveSnapshot, DisplayItem, EmptyState, FooterInfo, FormInfo,
    HeaderInfo, PostListView, SearchBarInfo, UIViewModel,
};
use std::rc::Rc;

/// Blog title shown in the header.
pub const BLOG_TITLE: &str = "The Atomic Blog";

/// Width of the title column in post and archive rows.
pub const TITLE_COLUMN_WIDTH: usize = 30;

impl AppState {
    /// Computes the view model for a `rows` x `cols` pane.
    ///
    /// # Example
    ///
    /// ```rust
    /// use atomic_blog::{initialize, Config};
    ///
    /// let state = initialize(&Config { seed: Some(1), ..Config::default() });
    /// let vm = state.compute_viewmodel(40, 100);
    /// assert_eq!(vm.header.results, "30 atomic posts found");
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let layout = Layout::compute(rows, self.archive_visible);
        let visible = self.visible_posts();

        UIViewModel {
            header: HeaderInfo {
                title: BLOG_TITLE.to_string(),
                results: results_label(visible.len()),
            },
            search_bar: SearchBarInfo {
                query: self.store.search_query().to_string(),
                is_focused: self.focus == Focus::Search,
            },
            form: self.compute_form(),
            posts: self.compute_post_list(&visible, layout.post_rows, cols),
            archive: self
                .archive_visible
                .then(|| self.compute_archive_panel(layout.archive_rows, cols)),
            footer: self.compute_footer(),
        }
    }

    fn compute_form(&self) -> FormInfo {
        FormInfo {
            title: self.form.title.clone(),
            body: self.form.body.clone(),
            active_field: match self.focus {
                Focus::Compose(field) => Some(field),
                _ => None,
            },
            error: self.form.error.map(|e| e.to_string()),
        }
    }

    fn compute_post_list(&self, visible: &[Post], rows: usize, cols: usize) -> PostListView {
        if visible.is_empty() {
            return PostListView {
                items: vec![],
                empty_state: Some(self.compute_empty_state()),
            };
        }

        let (start, end) = visible_window(self.post_cursor, visible.len(), rows);
        let body_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + 1);
        let query = self.store.search_query();

        let items = visible[start..end]
            .iter()
            .enumerate()
            .map(|(offset, post)| {
                let (title_highlights, body_highlights) = highlight_post(post, query);
                DisplayItem {
                    title: truncate(&post.title, TITLE_COLUMN_WIDTH - 2),
                    body: truncate(&post.body, body_width),
                    is_selected: start + offset == self.post_cursor && self.focus != Focus::Archive,
                    title_highlights,
                    body_highlights,
                }
            })
            .collect();

        PostListView {
            items,
            empty_state: None,
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.store.posts().is_empty() {
            EmptyState {
                message: "No posts yet".to_string(),
                subtitle: "Press n to write one or a to browse the archive".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No posts match \"{}\"", self.store.search_query()),
                subtitle: "Press / to edit the search or Esc to clear it".to_string(),
            }
        }
    }

    fn compute_archive_panel(&self, rows: usize, cols: usize) -> Rc<ArchivePanel> {
        let (window_start, _) = visible_window(self.archive_cursor, self.archive.len(), rows);
        let snapshot = ArchiveSnapshot {
            main_count: self.store.posts().len(),
            archive_len: self.archive.len(),
            window_start,
            rows,
            cursor: self.archive_cursor,
            cols,
            is_focused: self.focus == Focus::Archive,
        };

        let mut memo = self.archive_panel.borrow_mut();
        let panel = memo.get_or_compute(snapshot, |snapshot| Rc::new(self.build_archive_panel(snapshot)));
        Rc::clone(panel)
    }

    fn build_archive_panel(&self, snapshot: &ArchiveSnapshot) -> ArchivePanel {
        let _span = tracing::debug_span!("build_archive_panel", rows = snapshot.rows).entered();

        let end = (snapshot.window_start + snapshot.rows).min(snapshot.archive_len);
        let body_width = snapshot.cols.saturating_sub(TITLE_COLUMN_WIDTH + 1);
        let items = self.archive.posts()[snapshot.window_start.min(end)..end]
            .iter()
            .enumerate()
            .map(|(offset, post)| ArchiveItem {
                title: truncate(&post.title, TITLE_COLUMN_WIDTH - 2),
                body: truncate(&post.body, body_width),
                is_selected: snapshot.is_focused && snapshot.window_start + offset == snapshot.cursor,
            })
            .collect();

        ArchivePanel {
            title: format!("Post archive in addition to {} main posts", snapshot.main_count),
            items,
            is_focused: snapshot.is_focused,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            Focus::Search => "ESC: done  Enter: done  Backspace: delete  Type to filter".to_string(),
            Focus::Compose(FormField::Title) => {
                "Tab/Enter: body  ESC: leave form  Type the post title".to_string()
            }
            Focus::Compose(FormField::Body) => {
                "Enter: add post  Tab: title  ESC: leave form  Type the post body".to_string()
            }
            Focus::Archive => {
                "j/k: navigate  Enter: add as new post  Tab: posts  a: hide archive  q: quit".to_string()
            }
            Focus::Browse if self.archive_visible => {
                "j/k: navigate  /: search  n: new post  C: clear  Tab: archive  a: hide archive  d: theme  q: quit"
                    .to_string()
            }
            Focus::Browse => {
                "j/k: navigate  /: search  n: new post  C: clear  a: archive  d: theme  q: quit".to_string()
            }
        };
        FooterInfo { keybindings }
    }
}

/// "N atomic posts found".
#[must_use]
pub fn results_label(count: usize) -> String {
    format!("{count} atomic posts found")
}

fn highlight_post(post: &Post, query: &str) -> (Vec<(usize, usize)>, Vec<(usize, usize)>) {
    if query.is_empty() {
        return (vec![], vec![]);
    }
    let ranges = find_match_ranges(&post.searchable_text(), query);
    split_ranges(&ranges, post.title.chars().count(), SEARCH_SEPARATOR.chars().count())
}
