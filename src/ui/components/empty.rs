//! Empty state component renderer.
//!
//! Shown in place of the post rows when no post is visible: either the store
//! is empty or the search query matches nothing.

use super::put_centered;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Draws the centered message and, if `available` allows, its subtitle.
pub fn render_empty_state(
    canvas: &mut Canvas,
    row: usize,
    available: usize,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
) {
    if available == 0 {
        return;
    }

    canvas.move_to(row, 1);
    canvas.put(&Theme::fg(&theme.colors.empty_state_fg));
    put_centered(canvas, &empty.message, cols);
    canvas.put(Theme::reset());

    if available < 2 {
        return;
    }

    canvas.move_to(row + 1, 1);
    canvas.put(Theme::dim());
    canvas.put(&Theme::fg(&theme.colors.text_dim));
    put_centered(canvas, &empty.subtitle, cols);
    canvas.put(Theme::reset());
}
