//! Domain layer for the Atomic Blog plugin.
//!
//! Core types independent of Zellij APIs and rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`post`]: The `Post` value and its search semantics
//!
//! # Examples
//!
//! ```
//! use atomic_blog::domain::{Post, Result};
//!
//! fn draft() -> Result<Post> {
//!     Ok(Post::new("virtual matrix", "We need to hack the online SSL port!"))
//! }
//! # assert!(draft().is_ok());
//! ```

pub mod error;
pub mod post;

pub use error::{BlogError, FormError, Result};
pub use post::{Post, SEARCH_SEPARATOR};
