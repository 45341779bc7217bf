//! Header component renderer.

use super::put_padded;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Draws the blog title on the left and the results counter on the right.
///
/// ```text
///  The Atomic Blog                               30 atomic posts found
/// ```
///
/// On panes too narrow for both, the counter wins: it is the live part.
pub fn render_header(canvas: &mut Canvas, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {}", header.title);
    let results = format!("{} ", header.results);
    let results_len = results.chars().count();

    canvas.move_to(row, 1);
    canvas.put(Theme::bold());
    canvas.put(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        canvas.put(&Theme::bg(bg));
    }

    if title.chars().count() + results_len <= cols {
        put_padded(canvas, &title, cols - results_len);
    } else {
        canvas.pad(cols.saturating_sub(results_len));
    }
    canvas.put(&Theme::fg(&theme.colors.accent));
    canvas.put(&results);

    canvas.put(Theme::reset());
    row + 1
}
