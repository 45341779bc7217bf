//! Post domain model.
//!
//! A [`Post`] is a `{ title, body }` text pair. Posts carry no identifier:
//! their position in the list is their only identity, and they are replaced
//! as whole values rather than edited in place.

/// Separator inserted between title and body when a post is searched.
///
/// A query can match across the boundary only through this separator, so
/// `"dge cas"` finds `Edge` / `Case` while `"gecas"` does not.
pub const SEARCH_SEPARATOR: &str = " ";

/// A single blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Post {
    pub title: String,
    pub body: String,
}

impl Post {
    /// Creates a post from any string-like title and body.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomic_blog::domain::Post;
    ///
    /// let post = Post::new("Quantum Driver", "Try to parse the SMTP bus.");
    /// assert_eq!(post.title, "Quantum Driver");
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Returns the text a search query is matched against: title, one space,
    /// body.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        let mut text = String::with_capacity(self.title.len() + SEARCH_SEPARATOR.len() + self.body.len());
        text.push_str(&self.title);
        text.push_str(SEARCH_SEPARATOR);
        text.push_str(&self.body);
        text
    }

    /// Returns `true` if `needle_lower` occurs in the searchable text,
    /// ignoring case.
    ///
    /// `needle_lower` must already be lowercased; callers filtering a whole
    /// list fold the query once instead of once per post. An empty needle
    /// matches every post.
    #[must_use]
    pub fn matches_lowercase(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.searchable_text().to_lowercase().contains(needle_lower)
    }

    /// Case-insensitive substring test against the searchable text.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomic_blog::domain::Post;
    ///
    /// let post = Post::new("Edge", "Case");
    /// assert!(post.matches("DGE CAS"));
    /// assert!(!post.matches("gecas"));
    /// ```
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}
