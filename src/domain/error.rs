//! Error types for the Atomic Blog plugin.
//!
//! This module defines the crate-wide error type [`BlogError`], the form
//! validation error [`FormError`], and a [`Result`] alias. Both enums derive
//! their `Error` implementations with `thiserror`.
//!
//! The post store itself never fails: every store operation is total. Errors
//! only arise at the edges (configuration parsing, theme loading, trace file
//! I/O) and in the post form, which refuses incomplete posts before the store
//! is ever called.

use thiserror::Error;

/// The main error type for plugin operations outside the post store.
///
/// # Examples
///
/// ```
/// use atomic_blog::domain::BlogError;
///
/// fn parse_size(raw: &str) -> Result<usize, BlogError> {
///     raw.parse()
///         .map_err(|_| BlogError::Config(format!("archive_size must be a number, got {raw:?}")))
/// }
///
/// assert!(parse_size("ten").is_err());
/// ```
#[derive(Debug, Error)]
pub enum BlogError {
    /// A theme could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from the trace file writer and theme file reads.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The post form refused a submission.
    #[error("Form error: {0}")]
    Form(#[from] FormError),
}

/// Reasons the post form refuses to hand a post to the store.
///
/// The store accepts any post; completeness is checked here, before
/// `add_post` is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// The title field is empty.
    #[error("a post needs a title")]
    EmptyTitle,

    /// The body field is empty.
    #[error("a post needs a body")]
    EmptyBody,
}

/// A specialized `Result` type for Atomic Blog operations.
pub type Result<T> = std::result::Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_errors_convert_into_blog_errors() {
        let err: BlogError = FormError::EmptyBody.into();
        assert_eq!(err.to_string(), "Form error: a post needs a body");
    }

    #[test]
    fn io_errors_convert_into_blog_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BlogError = io.into();
        assert!(matches!(err, BlogError::Io(_)));
        assert_eq!(err.to_string(), "IO error: missing");
    }
}
