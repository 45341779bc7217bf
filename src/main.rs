//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Atomic Blog library and the Zellij
//! plugin system: maps Zellij key events to library [`Event`]s, runs the
//! resulting [`Action`]s against the Zellij API, and delegates rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Update**: Map keys by focus, delegate to `handle_event`
//! 4. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! Browsing the posts or the archive:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `/`: Edit the search query
//! - `n`: Write a new post
//! - `C` (shift): Clear all posts
//! - `a`: Show or hide the archive
//! - `Tab`: Switch between posts and archive
//! - `Enter`: Add the selected archive post
//! - `d`: Toggle dark mode
//! - `Esc`: Clear the search query
//! - `q`: Close plugin
//!
//! Typing in the search box or the form:
//! - Characters and `Backspace` edit the text
//! - `Tab`: Next form field
//! - `Enter`: Next field / add post / leave search
//! - `Esc`: Stop typing

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use atomic_blog::{handle_event, Action, Config, Event, Focus};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns.
struct State {
    /// Core application state from library layer.
    app: atomic_blog::AppState,

    /// Whether `ChangeApplicationState` was granted; pane renames need it.
    can_rename: bool,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config {
            initial_posts: 0,
            archive_size: 0,
            ..Config::default()
        };
        Self {
            app: atomic_blog::initialize(&default_config),
            can_rename: false,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and application state,
    /// requests permissions and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        atomic_blog::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            initial_posts = config.initial_posts,
            archive_size = config.archive_size,
            "parsed configuration"
        );
        self.app = atomic_blog::initialize(&config);

        request_permission(&[PermissionType::ChangeApplicationState]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    /// Translates Zellij events, delegates to `handle_event`, and executes
    /// the resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        atomic_blog::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events, depending on whether
    /// the user is typing (search box, form) or browsing a list.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, focus = ?self.app.focus, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        if self.app.focus.is_typing() {
            return Some(match key.bare_key {
                BareKey::Esc => Event::Escape,
                BareKey::Enter => Event::Confirm,
                BareKey::Backspace => Event::Backspace,
                BareKey::Tab if matches!(self.app.focus, Focus::Compose(_)) => Event::NextField,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Esc => Event::Escape,
            BareKey::Enter => Event::Confirm,
            BareKey::Tab => Event::SwitchList,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char('/') => Event::FocusSearch,
            BareKey::Char('n') => Event::ComposePost,
            BareKey::Char('C') => Event::ClearPosts,
            BareKey::Char('a') => Event::ToggleArchive,
            BareKey::Char('d') => Event::ToggleDarkMode,
            _ => return None,
        })
    }

    fn handle_permission_result(&mut self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                self.can_rename = true;
                let title = atomic_blog::app::handler::pane_title(self.app.visible_count());
                self.execute_action(&Action::RenamePane(title));
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - pane title will not track results");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `RenamePane`: Show the results counter in the pane title
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::RenamePane(ref title) => {
                if self.can_rename {
                    rename_plugin_pane(get_plugin_ids().plugin_id, title);
                } else {
                    tracing::trace!(title = %title, "skipping pane rename without permission");
                }
            }
        }
    }
}
