//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the store/generator layers.
//!
//! ```text
//! User Input → Events → Event Handler → Store / Form / Cursors → Actions
//!                                              ↓
//!                                compute_viewmodel → renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Draft of the next post and its submission rule
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Focus state machine types
//! - [`state`]: Central application state container
//! - [`view`]: View model computation, including the memoized archive panel
//!
//! # Example
//!
//! ```rust
//! use atomic_blog::app::{handle_event, Event};
//! use atomic_blog::{initialize, Config};
//!
//! let mut state = initialize(&Config::default());
//! let (should_render, _actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! # Ok::<(), atomic_blog::BlogError>(())
//! ```

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;
pub mod view;

pub use actions::Action;
pub use form::PostForm;
pub use handler::{handle_event, Event};
pub use modes::{Focus, FormField};
pub use state::AppState;
