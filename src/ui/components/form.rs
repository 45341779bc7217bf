//! New-post form renderer.

use super::put_padded;
use crate::app::FormField;
use crate::ui::helpers::{truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormInfo;

const FORM_MARGIN: usize = 5;

/// Draws the form box (4 lines) and the message line below it, returning
/// the row after the message.
///
/// ```text
/// [margin] ┌ New post ──────────────┐
/// [margin] │ > Title: Quantum leap_ │
/// [margin] │   Body:                │
/// [margin] └────────────────────────┘
///          a post needs a body
/// ```
pub fn render_form(canvas: &mut Canvas, row: usize, form: &FormInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(FORM_MARGIN * 2 + 2);
    let border = if form.active_field.is_some() {
        &theme.colors.form_border
    } else {
        &theme.colors.border
    };

    let label = " New post ";
    canvas.move_to(row, 1);
    canvas.pad(FORM_MARGIN);
    canvas.put(&Theme::fg(border));
    canvas.put("┌");
    canvas.put(label);
    canvas.put(&"─".repeat(inner_width.saturating_sub(label.chars().count())));
    canvas.put("┐");
    canvas.put(Theme::reset());

    let fields = [
        (FormField::Title, "Title:", form.title.as_str()),
        (FormField::Body, "Body: ", form.body.as_str()),
    ];
    for (offset, (field, name, value)) in fields.into_iter().enumerate() {
        let active = form.active_field == Some(field);
        let marker = if active { ">" } else { " " };
        let cursor = if active { "_" } else { "" };
        let line = truncate(&format!(" {marker} {name} {value}{cursor}"), inner_width);

        canvas.move_to(row + 1 + offset, 1);
        canvas.pad(FORM_MARGIN);
        canvas.put(&Theme::fg(border));
        canvas.put("│");
        canvas.put(&Theme::fg(if active {
            &theme.colors.text_normal
        } else {
            &theme.colors.text_dim
        }));
        put_padded(canvas, &line, inner_width);
        canvas.put(&Theme::fg(border));
        canvas.put("│");
        canvas.put(Theme::reset());
    }

    canvas.move_to(row + 3, 1);
    canvas.pad(FORM_MARGIN);
    canvas.put(&Theme::fg(border));
    canvas.put(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.put(Theme::reset());

    canvas.move_to(row + 4, 1);
    canvas.pad(FORM_MARGIN);
    if let Some(error) = &form.error {
        canvas.put(&Theme::fg(&theme.colors.error_fg));
        put_padded(canvas, &truncate(error, inner_width), cols.saturating_sub(FORM_MARGIN));
        canvas.put(Theme::reset());
    } else {
        canvas.pad(cols.saturating_sub(FORM_MARGIN));
    }

    row + 5
}
