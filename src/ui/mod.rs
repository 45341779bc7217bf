//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → Canvas → stdout
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Canvas, match highlighting, truncation, list windowing
//! - [`layout`]: Row budget of the post list and archive
//! - [`theme`]: Color palettes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::{Theme, ThemeSet};
pub use viewmodel::{
    ArchiveItem, ArchivePanel, DisplayItem, EmptyState, FooterInfo, FormInfo, HeaderInfo,
    SearchBarInfo, UIViewModel,
};
