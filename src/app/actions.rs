//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler mutates [`AppState`](crate::app::AppState) directly
//! (every store operation is synchronous and total) and returns the
//! effects that need the Zellij host as [`Action`]s. The plugin shim in
//! `main.rs` executes them in order.

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sets the pane title shown by Zellij, e.g. the current post count.
    RenamePane(String),
}
