//! The new-post form.
//!
//! The form owns the draft title and body and is the only gate between user
//! input and [`PostStore::add_post`](crate::store::PostStore::add_post): a
//! submission with an empty title or body is refused here and never reaches
//! the store. Drafts survive leaving and re-entering the form; they are reset
//! only by a successful submission.

use super::modes::FormField;
use crate::domain::{FormError, Post};

/// Draft state of the new-post form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub body: String,
    /// Why the last submission was refused, cleared by the next edit.
    pub error: Option<FormError>,
}

impl PostForm {
    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Body => &mut self.body,
        }
    }

    pub fn push(&mut self, field: FormField, c: char) {
        self.field_mut(field).push(c);
        self.error = None;
    }

    pub fn pop(&mut self, field: FormField) {
        self.field_mut(field).pop();
        self.error = None;
    }

    /// Turns the draft into a post and resets both fields.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::EmptyTitle`] or [`FormError::EmptyBody`] and
    /// keeps the draft when a field is empty. The error is also recorded in
    /// [`PostForm::error`] for display.
    ///
    /// # Example
    ///
    /// ```rust
    /// use atomic_blog::app::{FormField, PostForm};
    /// use atomic_blog::domain::FormError;
    ///
    /// let mut form = PostForm::default();
    /// form.push(FormField::Title, 'A');
    /// assert_eq!(form.submit(), Err(FormError::EmptyBody));
    ///
    /// form.push(FormField::Body, 'B');
    /// let post = form.submit().unwrap();
    /// assert_eq!((post.title.as_str(), post.body.as_str()), ("A", "B"));
    /// assert!(form.title.is_empty());
    /// ```
    pub fn submit(&mut self) -> Result<Post, FormError> {
        let refusal = if self.title.is_empty() {
            Some(FormError::EmptyTitle)
        } else if self.body.is_empty() {
            Some(FormError::EmptyBody)
        } else {
            None
        };

        if let Some(err) = refusal {
            tracing::debug!(error = %err, "post form refused submission");
            self.error = Some(err);
            return Err(err);
        }

        self.error = None;
        Ok(Post {
            title: std::mem::take(&mut self.title),
            body: std::mem::take(&mut self.body),
        })
    }
}
