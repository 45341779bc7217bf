//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the [`UIViewModel`] from [`AppState`],
//! then let the components draw it into a [`Canvas`]. The finished frame is
//! printed in one write.
//!
//! # Example
//!
//! ```rust
//! use atomic_blog::{initialize, Config};
//! use atomic_blog::ui::render_to_string;
//!
//! let state = initialize(&Config { seed: Some(2), ..Config::default() });
//! let frame = render_to_string(&state, 30, 100);
//! assert!(frame.contains("The Atomic Blog"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders one frame as an ANSI string.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut canvas = Canvas::new();
    render_viewmodel(&mut canvas, &viewmodel, state.theme(), rows, cols);
    canvas.into_string()
}

fn render_viewmodel(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    components::render_frame(canvas, vm, theme, rows, cols);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::domain::Post;
    use crate::generator::ScriptedPosts;
    use crate::store::{ArchivePool, PostStore};
    use crate::ui::ThemeSet;

    fn state() -> AppState {
        AppState::new(
            PostStore::with_posts(vec![
                Post::new("Quantum Driver", "hack the bus"),
                Post::new("Edge Case", "nothing to see"),
            ]),
            ArchivePool::new(5),
            Box::new(ScriptedPosts::new(vec![Post::new("Vault entry", "old news")])),
            ThemeSet::default(),
        )
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).expect("events never fail");
        }
    }

    #[test]
    fn frame_shows_header_counter_and_posts() {
        let frame = render_to_string(&state(), 30, 100);
        assert!(frame.contains("The Atomic Blog"));
        assert!(frame.contains("2 atomic posts found"));
        assert!(frame.contains("Quantum Driver"));
        assert!(frame.contains("nothing to see"));
        assert!(frame.contains("Search posts:"));
    }

    #[test]
    fn cleared_store_shows_empty_state() {
        let mut state = state();
        send(&mut state, &[Event::ClearPosts]);
        let frame = render_to_string(&state, 30, 100);
        assert!(frame.contains("0 atomic posts found"));
        assert!(frame.contains("No posts yet"));
    }

    #[test]
    fn unmatched_query_is_quoted_in_empty_state() {
        let mut state = state();
        state.store.set_search_query("zzz_no_match");
        let frame = render_to_string(&state, 30, 100);
        assert!(frame.contains("No posts match \"zzz_no_match\""));
    }

    #[test]
    fn form_error_is_shown_below_form() {
        let mut state = state();
        send(&mut state, &[Event::ComposePost, Event::Char('T'), Event::Confirm, Event::Confirm]);
        let frame = render_to_string(&state, 30, 100);
        assert!(frame.contains("a post needs a body"));
        assert!(frame.contains("> Body:"));
    }

    #[test]
    fn archive_section_appears_when_toggled() {
        let mut state = state();
        assert!(!render_to_string(&state, 40, 100).contains("Post archive"));

        send(&mut state, &[Event::ToggleArchive]);
        let frame = render_to_string(&state, 40, 100);
        assert!(frame.contains("Post archive in addition to 2 main posts"));
        assert!(frame.contains("Vault entry"));
    }

    #[test]
    fn tiny_panes_do_not_panic() {
        let mut state = state();
        send(&mut state, &[Event::ToggleArchive]);
        for (rows, cols) in [(0, 0), (1, 1), (5, 10), (14, 20)] {
            let _ = render_to_string(&state, rows, cols);
        }
    }
}
