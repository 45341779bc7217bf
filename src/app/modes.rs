//! Focus state types for the application.
//!
//! Focus decides which keybindings are live and where typed characters go:
//!
//! - **Browse**: navigate the post list, trigger commands
//! - **Search**: typing edits the search query
//! - **Compose**: typing edits one field of the new-post form
//! - **Archive**: navigate the archive list (only while it is shown)
//!
//! # Example
//!
//! ```rust
//! use atomic_blog::app::{FormField, Focus};
//!
//! let focus = Focus::Compose(FormField::Title);
//! assert!(focus.is_typing());
//! assert_eq!(FormField::Title.next(), FormField::Body);
//! ```

/// Field of the new-post form that receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Body,
}

impl FormField {
    /// The other field; Tab cycles between the two.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Body,
            Self::Body => Self::Title,
        }
    }
}

/// Where keyboard input currently goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Post list navigation and single-key commands.
    #[default]
    Browse,

    /// Search input; characters extend the query.
    Search,

    /// New-post form with the active field.
    Compose(FormField),

    /// Archive list navigation.
    Archive,
}

impl Focus {
    /// Whether printable keys should be treated as text rather than commands.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search | Self::Compose(_))
    }
}
