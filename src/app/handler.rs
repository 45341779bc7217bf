//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for user input. It applies the
//! event to [`AppState`] (store operations are synchronous and total, so
//! every change is visible to the very next read) and reports whether the
//! pane must re-render plus any [`Action`]s for the plugin runtime.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `SwitchList`
//! - **Text input**: `Char`, `Backspace` (search query or form field,
//!   depending on focus)
//! - **Focus**: `FocusSearch`, `ComposePost`, `NextField`, `Confirm`, `Escape`
//! - **Commands**: `ClearPosts`, `ToggleArchive`, `ToggleDarkMode`,
//!   `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use atomic_blog::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config { seed: Some(4), ..Config::default() });
//! handle_event(&mut state, &Event::FocusSearch)?;
//! for c in "zzz_no_match".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! assert_eq!(state.visible_count(), 0);
//! # Ok::<(), atomic_blog::BlogError>(())
//! ```

use super::modes::{FormField, Focus};
use super::view::results_label;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Discrete user inputs, already mapped from keys by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the focused list's cursor down (wraps).
    KeyDown,
    /// Moves the focused list's cursor up (wraps).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Starts editing the search query.
    FocusSearch,
    /// Opens the new-post form on the title field.
    ComposePost,
    /// Switches between the form's title and body fields.
    NextField,
    /// Enter: advances or submits the form, adds the selected archive post,
    /// or leaves the search box.
    Confirm,
    /// Leaves the current input; in browse focus clears the search query.
    Escape,
    /// Types a character into the focused input.
    Char(char),
    /// Deletes the last character of the focused input.
    Backspace,
    /// Empties the post list.
    ClearPosts,
    /// Shows or hides the archive.
    ToggleArchive,
    /// Moves focus between the post list and the shown archive.
    SwitchList,
    /// Swaps the light and dark palettes.
    ToggleDarkMode,
}

/// Processes an event, mutates application state, and returns
/// `(should_render, actions)`.
///
/// Events that do not apply to the current focus (e.g. `Char` while
/// browsing) are ignored and report `false`.
///
/// # Errors
///
/// Returns an error if a state transition fails.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, focus = ?state.focus).entered();

    let count_before = state.visible_count();
    let should_render = apply(state, event);

    let mut actions = Vec::new();
    if *event == Event::CloseFocus {
        actions.push(Action::CloseFocus);
    }

    let count_after = state.visible_count();
    if count_after != count_before {
        tracing::debug!(count_before, count_after, "visible post count changed");
        actions.push(Action::RenamePane(pane_title(count_after)));
    }

    Ok((should_render, actions))
}

/// Pane title reflecting the results counter.
#[must_use]
pub fn pane_title(visible_count: usize) -> String {
    format!("The Atomic Blog: {}", results_label(visible_count))
}

#[allow(clippy::too_many_lines)]
fn apply(state: &mut AppState, event: &Event) -> bool {
    match event {
        Event::KeyDown => {
            state.move_selection_down();
            true
        }
        Event::KeyUp => {
            state.move_selection_up();
            true
        }
        Event::CloseFocus => false,
        Event::FocusSearch => {
            tracing::debug!("entering search");
            state.focus = Focus::Search;
            true
        }
        Event::ComposePost => {
            tracing::debug!("opening post form");
            state.start_compose();
            true
        }
        Event::NextField => match state.focus {
            Focus::Compose(field) => {
                state.focus = Focus::Compose(field.next());
                true
            }
            _ => false,
        },
        Event::Confirm => match state.focus {
            Focus::Compose(FormField::Title) => {
                state.focus = Focus::Compose(FormField::Body);
                true
            }
            Focus::Compose(FormField::Body) => {
                match state.submit_form() {
                    Ok(post) => tracing::debug!(title = %post.title, "post submitted"),
                    Err(err) => tracing::debug!(error = %err, "post submission refused"),
                }
                true
            }
            Focus::Archive => {
                let added = state.add_selected_archive_post();
                tracing::debug!(added, index = state.archive_cursor, "archive post copied");
                added
            }
            Focus::Search => {
                state.focus = Focus::Browse;
                true
            }
            Focus::Browse => false,
        },
        Event::Escape => match state.focus {
            Focus::Browse => {
                if state.store.search_query().is_empty() {
                    false
                } else {
                    tracing::debug!(query = %state.store.search_query(), "clearing search");
                    state.clear_search();
                    true
                }
            }
            Focus::Search | Focus::Compose(_) | Focus::Archive => {
                state.focus = Focus::Browse;
                true
            }
        },
        Event::Char(c) => match state.focus {
            Focus::Search => {
                state.push_search_char(*c);
                tracing::trace!(query = %state.store.search_query(), "search query updated");
                true
            }
            Focus::Compose(field) => {
                state.form.push(field, *c);
                true
            }
            Focus::Browse | Focus::Archive => false,
        },
        Event::Backspace => match state.focus {
            Focus::Search => {
                state.pop_search_char();
                true
            }
            Focus::Compose(field) => {
                state.form.pop(field);
                true
            }
            Focus::Browse | Focus::Archive => false,
        },
        Event::ClearPosts => {
            if state.store.posts().is_empty() {
                return false;
            }
            state.clear_posts();
            true
        }
        Event::ToggleArchive => {
            state.toggle_archive();
            tracing::debug!(visible = state.archive_visible, "archive toggled");
            true
        }
        Event::SwitchList => match state.focus {
            Focus::Browse if state.archive_visible => {
                state.focus = Focus::Archive;
                true
            }
            Focus::Archive => {
                state.focus = Focus::Browse;
                true
            }
            _ => false,
        },
        Event::ToggleDarkMode => {
            state.toggle_dark_mode();
            tracing::debug!(dark_mode = state.dark_mode, "theme toggled");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Post;
    use crate::generator::ScriptedPosts;
    use crate::store::{ArchivePool, PostStore};
    use crate::ui::ThemeSet;

    fn state() -> AppState {
        AppState::new(
            PostStore::with_posts(vec![Post::new("Quantum Driver", "hack it"), Post::new("Edge", "Case")]),
            ArchivePool::new(3),
            Box::new(ScriptedPosts::new(vec![Post::new("from", "archive")])),
            ThemeSet::default(),
        )
    }

    fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|event| handle_event(state, event).expect("events never fail").1)
            .collect()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).expect("events never fail");
        }
    }

    #[test]
    fn typing_in_search_filters_and_renames_pane() {
        let mut state = state();
        send(&mut state, &[Event::FocusSearch]);
        let actions = send(&mut state, &[Event::Char('Q')]);

        assert_eq!(state.store.search_query(), "Q");
        assert_eq!(state.visible_count(), 1);
        assert_eq!(actions, vec![Action::RenamePane(pane_title(1))]);
    }

    #[test]
    fn chars_are_ignored_while_browsing() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).expect("ok");
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.store.search_query(), "");
    }

    #[test]
    fn escape_keeps_query_then_clears_it() {
        let mut state = state();
        send(&mut state, &[Event::FocusSearch]);
        type_text(&mut state, "edge");
        send(&mut state, &[Event::Escape]);
        assert_eq!(state.focus, Focus::Browse);
        assert_eq!(state.store.search_query(), "edge");

        send(&mut state, &[Event::Escape]);
        assert_eq!(state.store.search_query(), "");
        assert_eq!(state.visible_count(), 2);
    }

    #[test]
    fn compose_flow_adds_post_at_front() {
        let mut state = state();
        send(&mut state, &[Event::ComposePost]);
        type_text(&mut state, "A");
        send(&mut state, &[Event::Confirm]);
        type_text(&mut state, "B");
        let actions = send(&mut state, &[Event::Confirm]);

        assert_eq!(state.store.posts()[0], Post::new("A", "B"));
        assert_eq!(state.store.posts().len(), 3);
        assert_eq!(state.focus, Focus::Browse);
        assert_eq!(actions, vec![Action::RenamePane(pane_title(3))]);
    }

    #[test]
    fn incomplete_post_stays_in_form() {
        let mut state = state();
        send(&mut state, &[Event::ComposePost, Event::NextField]);
        type_text(&mut state, "body without title");
        send(&mut state, &[Event::Confirm]);

        assert_eq!(state.store.posts().len(), 2);
        assert_eq!(state.focus, Focus::Compose(FormField::Body));
        assert!(state.form.error.is_some());
    }

    #[test]
    fn clear_posts_renders_once() {
        let mut state = state();
        let (first, _) = handle_event(&mut state, &Event::ClearPosts).expect("ok");
        let (second, actions) = handle_event(&mut state, &Event::ClearPosts).expect("ok");
        assert!(first);
        assert!(!second);
        assert!(actions.is_empty());
        assert!(state.store.posts().is_empty());
    }

    #[test]
    fn archive_enter_copies_selected_entry() {
        let mut state = state();
        send(&mut state, &[Event::ToggleArchive, Event::KeyDown, Event::Confirm]);

        assert_eq!(state.archive_cursor, 1);
        assert_eq!(state.store.posts()[0], Post::new("from", "archive"));
        assert_eq!(state.store.posts().len(), 3);
    }

    #[test]
    fn switch_list_needs_a_shown_archive() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::SwitchList).expect("ok");
        assert!(!render);

        send(&mut state, &[Event::ToggleArchive, Event::SwitchList]);
        assert_eq!(state.focus, Focus::Browse);
        send(&mut state, &[Event::SwitchList]);
        assert_eq!(state.focus, Focus::Archive);
    }

    #[test]
    fn close_focus_emits_action_without_render() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).expect("ok");
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn dark_mode_toggle_renders() {
        let mut state = state();
        let dark = state.dark_mode;
        let (render, _) = handle_event(&mut state, &Event::ToggleDarkMode).expect("ok");
        assert!(render);
        assert_ne!(state.dark_mode, dark);
    }
}
