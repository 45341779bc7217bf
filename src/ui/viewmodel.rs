//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) by
//! `compute_viewmodel` and consumed by the renderer. They hold display-ready
//! strings, selection flags and highlight ranges, and no business logic.

use crate::app::FormField;
use std::rc::Rc;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub form: FormInfo,
    pub posts: PostListView,

    /// Archive panel when shown. Shared with the memo cache, so an
    /// unchanged panel is the same allocation frame after frame.
    pub archive: Option<Rc<ArchivePanel>>,

    pub footer: FooterInfo,
}

/// Blog title and results counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// "N atomic posts found".
    pub results: String,
}

/// Search input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub is_focused: bool,
}

/// New-post form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInfo {
    pub title: String,
    pub body: String,
    /// Field receiving input, `None` when the form is not focused.
    pub active_field: Option<FormField>,
    /// Refusal message of the last submission.
    pub error: Option<String>,
}

/// Windowed slice of the visible posts.
#[derive(Debug, Clone)]
pub struct PostListView {
    pub items: Vec<DisplayItem>,
    /// Shown instead of items when no post is visible.
    pub empty_state: Option<EmptyState>,
}

/// One post row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub body: String,
    pub is_selected: bool,

    /// Search match ranges within `title`, as `(start, end)` char indices.
    pub title_highlights: Vec<(usize, usize)>,
    /// Search match ranges within `body`, as `(start, end)` char indices.
    pub body_highlights: Vec<(usize, usize)>,
}

/// Message for an empty post list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Keybinding hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Inputs of the archive panel.
///
/// Two equal snapshots produce identical panels, so the panel is rebuilt
/// only when the snapshot changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveSnapshot {
    /// Length of the main post list, quoted in the panel title.
    pub main_count: usize,
    pub archive_len: usize,
    pub window_start: usize,
    pub rows: usize,
    pub cursor: usize,
    pub cols: usize,
    pub is_focused: bool,
}

/// Rendered archive section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePanel {
    /// "Post archive in addition to N main posts".
    pub title: String,
    pub items: Vec<ArchiveItem>,
    pub is_focused: bool,
}

/// One archive row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveItem {
    pub title: String,
    pub body: String,
    pub is_selected: bool,
}
