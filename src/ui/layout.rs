//! Vertical layout of the pane.
//!
//! ```text
//! row 1          blank
//! row 2          header (title, results)
//! row 3          border
//! rows 4-6       search bar
//! rows 7-10      new-post form
//! row 11         form message
//! row 12         border
//! rows 13..      post list
//!                [border, archive title, archive rows]   when shown
//! row rows-1     border
//! row rows       footer
//! ```

/// Rows used by everything except the two lists.
pub const CHROME_ROWS: usize = 14;

/// First row of the post list.
pub const POST_LIST_ROW: usize = 13;

/// Rows taken by the archive's border and title line.
pub const ARCHIVE_CHROME_ROWS: usize = 2;

/// Row budget of the post list and archive list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub post_rows: usize,
    pub archive_rows: usize,
}

impl Layout {
    /// Splits the rows left after chrome between the lists; the archive
    /// takes half (rounded down) when shown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use atomic_blog::ui::layout::Layout;
    ///
    /// assert_eq!(Layout::compute(24, false), Layout { post_rows: 10, archive_rows: 0 });
    /// assert_eq!(Layout::compute(24, true), Layout { post_rows: 4, archive_rows: 4 });
    /// ```
    #[must_use]
    pub const fn compute(rows: usize, archive_visible: bool) -> Self {
        let available = rows.saturating_sub(CHROME_ROWS);
        if !archive_visible {
            return Self {
                post_rows: available,
                archive_rows: 0,
            };
        }
        let lists = available.saturating_sub(ARCHIVE_CHROME_ROWS);
        let archive_rows = lists / 2;
        Self {
            post_rows: lists - archive_rows,
            archive_rows,
        }
    }
}
