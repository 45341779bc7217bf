//! Shared rendering utilities.
//!
//! - [`Canvas`]: frame buffer components draw into; the renderer prints it
//!   in one go
//! - [`render_highlighted_text`]: text with search matches highlighted
//! - [`find_match_ranges`] / [`split_ranges`]: case-insensitive match
//!   positions, in char indices, split across title and body
//! - [`truncate`] and [`visible_window`]: fitting content into the pane
//!
//! Ranges are always `(start, end)` char indices with exclusive end.

use crate::ui::theme::Theme;

/// An ANSI frame under construction.
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to a 1-indexed row and column.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn put(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Writes `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Draws `text`, highlighting `ranges` with the theme's match colors.
///
/// Selected rows skip match highlighting so the selection background stays
/// intact. Ranges past the end of `text` are clipped.
pub fn render_highlighted_text(
    canvas: &mut Canvas,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_style: &str,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        canvas.put(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.max(current_pos).min(chars.len());
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let plain: String = chars[current_pos..start].iter().collect();
        canvas.put(&plain);

        canvas.put(&Theme::fg(&theme.colors.match_highlight_fg));
        canvas.put(&Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start..end].iter().collect();
        canvas.put(&highlighted);
        canvas.put(Theme::reset());
        canvas.put(base_style);

        current_pos = end;
    }

    let remaining: String = chars[current_pos..].iter().collect();
    canvas.put(&remaining);
}

/// Finds non-overlapping case-insensitive occurrences of `query` in `text`.
///
/// Case folding is per character, so each folded char maps back to the
/// original char it came from even when folding changes its length.
///
/// # Example
///
/// ```rust
/// use atomic_blog::ui::helpers::find_match_ranges;
///
/// assert_eq!(find_match_ranges("Edge Case", "E"), vec![(0, 1), (3, 4), (8, 9)]);
/// assert!(find_match_ranges("Edge", "").is_empty());
/// ```
#[must_use]
pub fn find_match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut folded = Vec::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (index, c) in text.chars().enumerate() {
        for lower in c.to_lowercase() {
            folded.push(lower);
            origin.push(index);
        }
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        if folded[i..i + needle.len()] == needle[..] {
            let start = origin[i];
            let end = origin[i + needle.len() - 1] + 1;
            ranges.push((start, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Splits ranges over `title + separator + body` into title-relative and
/// body-relative ranges. The separator itself is never highlighted.
///
/// # Example
///
/// ```rust
/// use atomic_blog::ui::helpers::split_ranges;
///
/// // "Edge Case", match "dge cas" = (1, 8)
/// let (title, body) = split_ranges(&[(1, 8)], 4, 1);
/// assert_eq!(title, vec![(1, 4)]);
/// assert_eq!(body, vec![(0, 3)]);
/// ```
#[must_use]
pub fn split_ranges(
    ranges: &[(usize, usize)],
    title_len: usize,
    separator_len: usize,
) -> (Vec<(usize, usize)>, Vec<(usize, usize)>) {
    let body_start = title_len + separator_len;
    let mut title = Vec::new();
    let mut body = Vec::new();

    for &(start, end) in ranges {
        if start < title_len {
            title.push((start, end.min(title_len)));
        }
        if end > body_start {
            body.push((start.max(body_start) - body_start, end - body_start));
        }
    }
    (title, body)
}

/// Shortens `text` to at most `max_chars` chars, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let mut out: String = text.chars().take(max_chars - 3).collect();
    out.push_str("...");
    out
}

/// Picks the `[start, end)` slice of a `len`-long list to show in
/// `available` rows, keeping `selected` near the middle.
///
/// # Example
///
/// ```rust
/// use atomic_blog::ui::helpers::visible_window;
///
/// assert_eq!(visible_window(0, 100, 10), (0, 10));
/// assert_eq!(visible_window(50, 100, 10), (45, 55));
/// assert_eq!(visible_window(99, 100, 10), (90, 100));
/// ```
#[must_use]
pub fn visible_window(selected: usize, len: usize, available: usize) -> (usize, usize) {
    if available == 0 || len == 0 {
        return (0, 0);
    }
    let selected = selected.min(len - 1);
    let mut start = selected.saturating_sub(available / 2);
    let end = (start + available).min(len);
    if end - start < available && len >= available {
        start = end - available;
    }
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_ranges_ignore_case() {
        assert_eq!(find_match_ranges("Quantum quantum", "QUANTUM"), vec![(0, 7), (8, 15)]);
    }

    #[test]
    fn match_ranges_do_not_overlap() {
        assert_eq!(find_match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn match_ranges_map_back_through_length_changing_folds() {
        // 'İ' folds to two chars: 'i' + combining dot.
        let ranges = find_match_ranges("İx", "x");
        assert_eq!(ranges, vec![(1, 2)]);
    }

    #[test]
    fn split_keeps_single_side_matches_on_their_side() {
        let (title, body) = split_ranges(&[(0, 2), (7, 9)], 4, 1);
        assert_eq!(title, vec![(0, 2)]);
        assert_eq!(body, vec![(2, 4)]);
    }

    #[test]
    fn truncate_adds_ellipsis_only_when_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("a bit too long", 10), "a bit t...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn window_fits_short_lists() {
        assert_eq!(visible_window(2, 3, 10), (0, 3));
        assert_eq!(visible_window(0, 0, 10), (0, 0));
        assert_eq!(visible_window(5, 10, 0), (0, 0));
    }

    #[test]
    fn window_clamps_a_cursor_past_the_end() {
        assert_eq!(visible_window(7, 3, 10), (0, 3));
        assert_eq!(visible_window(500, 100, 10), (90, 100));
    }

    #[test]
    fn highlighted_text_clips_out_of_range() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "abc", &[(1, 2), (5, 9)], &theme, "", false);
        let out = canvas.into_string();
        assert!(out.starts_with('a'));
        assert!(out.ends_with('c'));
        assert!(out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn selected_rows_are_not_highlighted() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "abc", &[(0, 3)], &theme, "", true);
        assert_eq!(canvas.as_str(), "abc");
    }
}
