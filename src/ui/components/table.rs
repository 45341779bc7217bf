//! Post list renderer.
//!
//! Each visible post is one row: the title in a fixed-width accent column,
//! then the body. Search matches are highlighted in both columns.

use crate::app::view::TITLE_COLUMN_WIDTH;
use crate::ui::helpers::{render_highlighted_text, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Draws `items` one per row starting at `row`; returns the row after the
/// last one.
pub fn render_post_rows(canvas: &mut Canvas, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_post_row(canvas, current_row, item, theme, cols);
    }
    current_row
}

/// Styling precedence: selection background, then match highlights (unless
/// selected), then the column colors. The row is padded to the full width so
/// the selection background spans it.
fn render_post_row(canvas: &mut Canvas, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    canvas.move_to(row, 1);

    let selection = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        String::new()
    };
    let title_style = if item.is_selected {
        selection.clone()
    } else {
        Theme::fg(&theme.colors.accent)
    };
    let body_style = if item.is_selected {
        selection
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    canvas.put(&title_style);
    canvas.put(" ");
    render_highlighted_text(canvas, &item.title, &item.title_highlights, theme, &title_style, item.is_selected);
    canvas.pad(TITLE_COLUMN_WIDTH.saturating_sub(item.title.chars().count() + 1));

    canvas.put(&body_style);
    render_highlighted_text(canvas, &item.body, &item.body_highlights, theme, &body_style, item.is_selected);
    canvas.pad(cols.saturating_sub(TITLE_COLUMN_WIDTH + item.body.chars().count()));

    canvas.put(Theme::reset());
    row + 1
}
