//! Archive section renderer.

use super::put_padded;
use crate::app::view::TITLE_COLUMN_WIDTH;
use crate::ui::helpers::{truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ArchivePanel;

/// Draws the archive title line and its rows; returns the row after the
/// last entry.
pub fn render_archive(canvas: &mut Canvas, row: usize, panel: &ArchivePanel, theme: &Theme, cols: usize) -> usize {
    canvas.move_to(row, 1);
    canvas.put(Theme::bold());
    canvas.put(&Theme::fg(if panel.is_focused {
        &theme.colors.header_fg
    } else {
        &theme.colors.text_dim
    }));
    put_padded(canvas, &truncate(&format!(" {}", panel.title), cols), cols);
    canvas.put(Theme::reset());

    let mut current_row = row + 1;
    for item in &panel.items {
        canvas.move_to(current_row, 1);
        if item.is_selected {
            canvas.put(&Theme::fg(&theme.colors.selection_fg));
            canvas.put(&Theme::bg(&theme.colors.selection_bg));
        } else {
            canvas.put(&Theme::fg(&theme.colors.archive_fg));
        }

        put_padded(canvas, &format!(" {}", item.title), TITLE_COLUMN_WIDTH);
        if !item.is_selected {
            canvas.put(&Theme::fg(&theme.colors.text_dim));
        }
        put_padded(canvas, &item.body, cols.saturating_sub(TITLE_COLUMN_WIDTH));

        canvas.put(Theme::reset());
        current_row += 1;
    }
    current_row
}
