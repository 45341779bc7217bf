//! Footer component renderer.

use super::put_centered;
use crate::ui::helpers::{truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Draws the keybinding hints centered and dimmed.
///
/// Hints wider than the pane are truncated so the line never wraps.
pub fn render_footer(canvas: &mut Canvas, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);

    canvas.move_to(row, 1);
    canvas.put(&Theme::fg(&theme.colors.text_dim));
    put_centered(canvas, &help_text, cols);
    canvas.put(Theme::reset());
    row + 1
}
