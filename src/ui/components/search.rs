//! Search bar component renderer.

use super::put_padded;
use crate::ui::helpers::{truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Draws the 3-line search box and returns the row after it.
///
/// ```text
/// [margin] ┌─────────────────────┐ [margin]
/// [margin] │ Search posts: quer_ │ [margin]
/// [margin] └─────────────────────┘ [margin]
/// ```
///
/// The border takes the search color and a cursor is drawn while the box has
/// focus; otherwise it blends in with the other borders.
pub fn render_search_bar(canvas: &mut Canvas, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    canvas.move_to(row, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.put(&Theme::fg(border));
    canvas.put(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.put(Theme::reset());

    let cursor = if search.is_focused { "_" } else { "" };
    let search_text = truncate(&format!(" Search posts: {}{cursor}", search.query), inner_width);

    canvas.move_to(row + 1, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.put(&Theme::fg(border));
    canvas.put("│");
    canvas.put(&Theme::fg(&theme.colors.text_normal));
    put_padded(canvas, &search_text, inner_width);
    canvas.put(&Theme::fg(border));
    canvas.put("│");
    canvas.put(Theme::reset());

    canvas.move_to(row + 2, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.put(&Theme::fg(border));
    canvas.put(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.put(Theme::reset());

    row + 3
}
