//! Composable UI component renderers.
//!
//! Each component draws one part of the pane into a [`Canvas`] at a given
//! row and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Blog title and results counter
//! - [`search`]: Search input box
//! - [`form`]: New-post form and its message line
//! - [`table`]: Post list with title and body columns
//! - [`empty`]: Message for an empty post list
//! - [`archive`]: Archive section below the posts
//! - [`footer`]: Keybinding hints
//!
//! [`render_frame`] lays them out following [`crate::ui::layout`].

mod archive;
mod empty;
mod footer;
mod form;
mod header;
mod search;
mod table;

use crate::ui::helpers::Canvas;
use crate::ui::layout::{Layout, POST_LIST_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use archive::render_archive;
use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use header::render_header;
use search::render_search_bar;
use table::render_post_rows;

/// Draws a full-width horizontal border and returns the next row.
fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.move_to(row, 1);
    canvas.put(&Theme::fg(color));
    canvas.put(&"─".repeat(cols));
    canvas.put(Theme::reset());
    row + 1
}

/// Writes `text` and pads the rest of a `width`-wide line.
fn put_padded(canvas: &mut Canvas, text: &str, width: usize) {
    canvas.put(text);
    canvas.pad(width.saturating_sub(text.chars().count()));
}

/// Writes `text` centered in a `width`-wide line.
fn put_centered(canvas: &mut Canvas, text: &str, width: usize) {
    let len = text.chars().count().min(width);
    let left = (width - len) / 2;
    canvas.pad(left);
    canvas.put(text);
    canvas.pad(width - left - len);
}

/// Draws one frame.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Form - 4 lines]
/// [Form message]
/// [Border]
/// [Post rows or empty state]
/// [Archive border, title, rows]    when shown
/// [Border]
/// [Footer]
/// ```
pub fn render_frame(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let layout = Layout::compute(rows, vm.archive.is_some());

    let mut current_row = 2;
    current_row = render_header(canvas, current_row, &vm.header, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(canvas, current_row, &vm.search_bar, theme, cols);
    current_row = render_form(canvas, current_row, &vm.form, theme, cols);
    let _ = render_border(canvas, current_row, &theme.colors.border, cols);

    if let Some(empty) = &vm.posts.empty_state {
        render_empty_state(canvas, POST_LIST_ROW, layout.post_rows, empty, theme, cols);
    } else {
        render_post_rows(canvas, POST_LIST_ROW, &vm.posts.items, theme, cols);
    }

    if let Some(panel) = &vm.archive {
        let archive_row = POST_LIST_ROW + layout.post_rows;
        let next = render_border(canvas, archive_row, &theme.colors.border, cols);
        render_archive(canvas, next, panel, theme, cols);
    }

    if rows >= 2 {
        let footer_row = rows;
        render_border(canvas, footer_row - 1, &theme.colors.border, cols);
        render_footer(canvas, footer_row, &vm.footer, theme, cols);
    }
}
