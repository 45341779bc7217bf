//! Atomic Blog: a Zellij plugin hosting a small in-memory blog.
//!
//! The plugin keeps an editable list of posts, filters it with a
//! case-insensitive search, offers a large read-only archive of generated
//! posts that can be copied into the list, and reuses derived views
//! (filtered posts, archive panel) for as long as their inputs stay the same.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, focus, post form                 │
//! │  - View model computation (memoized archive panel)  │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store Layer   │   │ Generator     │
//! │ (ui/)         │   │ (store/)      │   │ (generator/)  │
//! │ - Rendering   │   │ - Post store  │   │ - Random posts│
//! │ - Theming     │   │ - Archive pool│   │ - Word lists  │
//! │ - Components  │   │ - Memo cache  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Post, errors (domain/)                           │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/atomic-blog.wasm" {
//!         initial_posts "30"
//!         archive_size "10000"
//!         seed "42"
//!         dark_mode "true"
//!         theme "catppuccin-mocha"
//!         light_theme "catppuccin-latte"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use atomic_blog::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config { seed: Some(7), ..Config::default() });
//! assert_eq!(state.store.posts().len(), 30);
//!
//! handle_event(&mut state, &Event::ComposePost)?;
//! for event in [Event::Char('A'), Event::Confirm, Event::Char('B'), Event::Confirm] {
//!     handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.store.posts().len(), 31);
//! assert_eq!(state.store.posts()[0].title, "A");
//! # Ok::<(), atomic_blog::BlogError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod generator;
pub mod infrastructure;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Focus, FormField};
pub use domain::{BlogError, FormError, Post, Result};
pub use store::{ArchivePool, PostStore};
pub use ui::{Theme, ThemeSet};

use generator::RandomPostGenerator;
use std::collections::BTreeMap;
use std::str::FromStr;
use store::{DEFAULT_ARCHIVE_SIZE, INITIAL_POST_COUNT};
use ui::theme::{DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};

/// Default tracing filter directive.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Posts generated into the store at startup. Default: 30
    pub initial_posts: usize,

    /// Size of the archive pool, generated on first display. Default: 10000
    pub archive_size: usize,

    /// Seed for the post generator; entropy when `None`.
    pub seed: Option<u64>,

    /// Whether the plugin starts with the dark palette. Default: `true`
    pub dark_mode: bool,

    /// Built-in palette for dark mode. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Built-in palette for light mode.
    pub light_theme_name: Option<String>,

    /// Path to a custom TOML palette, used for dark mode.
    pub theme_file: Option<String>,

    /// Tracing filter directive (`trace`, `debug`, `info`, ...). Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_posts: INITIAL_POST_COUNT,
            archive_size: DEFAULT_ARCHIVE_SIZE,
            seed: None,
            dark_mode: true,
            theme_name: None,
            light_theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map, falling back to
    /// defaults for malformed values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use atomic_blog::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("archive_size".to_string(), "500".to_string());
    /// map.insert("seed".to_string(), "not a number".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.archive_size, 500);
    /// assert_eq!(config.seed, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            initial_posts: parse_lenient(config, "initial_posts").unwrap_or(defaults.initial_posts),
            archive_size: parse_lenient(config, "archive_size").unwrap_or(defaults.archive_size),
            seed: parse_lenient(config, "seed"),
            dark_mode: parse_lenient(config, "dark_mode").unwrap_or(defaults.dark_mode),
            ..Self::strings(config)
        }
    }

    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Config`] naming the first malformed key.
    pub fn try_from_zellij(config: &BTreeMap<String, String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            initial_posts: parse_key(config, "initial_posts")?.unwrap_or(defaults.initial_posts),
            archive_size: parse_key(config, "archive_size")?.unwrap_or(defaults.archive_size),
            seed: parse_key(config, "seed")?,
            dark_mode: parse_key(config, "dark_mode")?.unwrap_or(defaults.dark_mode),
            ..Self::strings(config)
        })
    }

    /// Filter directive for the tracing subscriber.
    #[must_use]
    pub fn trace_directive(&self) -> &str {
        self.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL)
    }

    fn strings(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        Self {
            theme_name: text("theme"),
            light_theme_name: text("light_theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            ..Self::default()
        }
    }
}

fn parse_key<T: FromStr>(config: &BTreeMap<String, String>, key: &str) -> Result<Option<T>> {
    config
        .get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| BlogError::Config(format!("invalid value for {key}: {raw:?}")))
        })
        .transpose()
}

fn parse_lenient<T: FromStr>(config: &BTreeMap<String, String>, key: &str) -> Option<T> {
    parse_key(config, key).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring configuration value");
        None
    })
}

/// Loads the dark and light palettes named by `config`.
///
/// A `theme_file` takes precedence over `theme` for the dark slot. Unknown
/// names and unreadable files fall back to the built-in palettes.
#[must_use]
pub fn load_themes(config: &Config) -> ThemeSet {
    let builtin = |name: Option<&String>, fallback: &str| {
        let name = name.map_or(fallback, String::as_str);
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %name, "unknown theme, using default");
            Theme::from_name(fallback).unwrap_or_default()
        })
    };

    let dark = config.theme_file.as_ref().map_or_else(
        || builtin(config.theme_name.as_ref(), DEFAULT_DARK_THEME),
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                builtin(config.theme_name.as_ref(), DEFAULT_DARK_THEME)
            })
        },
    );
    let light = builtin(config.light_theme_name.as_ref(), DEFAULT_LIGHT_THEME);

    ThemeSet { dark, light }
}

/// Builds the application state described by `config`.
///
/// Seeds the store with `initial_posts` generated posts and prepares an
/// archive of `archive_size` posts that stays ungenerated until first shown.
/// The archive draws from the same generator, after the initial posts.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!(
        "initialize",
        initial_posts = config.initial_posts,
        archive_size = config.archive_size,
        seeded = config.seed.is_some()
    )
    .entered();

    let mut generator = RandomPostGenerator::from_seed(config.seed);
    let store = PostStore::seeded(&mut generator, config.initial_posts);
    let archive = ArchivePool::new(config.archive_size);

    let mut state = AppState::new(store, archive, Box::new(generator), load_themes(config));
    state.dark_mode = config.dark_mode;

    tracing::debug!(posts = state.store.posts().len(), "atomic blog initialized");
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
        assert_eq!(Config::try_from_zellij(&BTreeMap::new()).expect("valid"), Config::default());
    }

    #[test]
    fn all_keys_are_parsed() {
        let config = Config::try_from_zellij(&map(&[
            ("initial_posts", "5"),
            ("archive_size", " 200 "),
            ("seed", "42"),
            ("dark_mode", "false"),
            ("theme", "catppuccin-latte"),
            ("light_theme", "catppuccin-mocha"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
        ]))
        .expect("valid");

        assert_eq!(config.initial_posts, 5);
        assert_eq!(config.archive_size, 200);
        assert_eq!(config.seed, Some(42));
        assert!(!config.dark_mode);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.light_theme_name.as_deref(), Some("catppuccin-mocha"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_directive(), "debug");
    }

    #[test]
    fn malformed_values_are_reported_or_defaulted() {
        let raw = map(&[("initial_posts", "many"), ("archive_size", "12")]);

        let err = Config::try_from_zellij(&raw).expect_err("malformed");
        assert!(matches!(err, BlogError::Config(ref msg) if msg.contains("initial_posts")));

        let config = Config::from_zellij(&raw);
        assert_eq!(config.initial_posts, INITIAL_POST_COUNT);
        assert_eq!(config.archive_size, 12);
    }

    #[test]
    fn blank_strings_are_unset() {
        let config = Config::from_zellij(&map(&[("theme", "  "), ("trace_level", "")]));
        assert_eq!(config.theme_name, None);
        assert_eq!(config.trace_directive(), DEFAULT_TRACE_LEVEL);
    }

    #[test]
    fn initialize_seeds_store_and_defers_archive() {
        let state = initialize(&Config {
            initial_posts: 4,
            archive_size: 50,
            seed: Some(9),
            ..Config::default()
        });
        assert_eq!(state.store.posts().len(), 4);
        assert!(!state.archive.is_materialized());
        assert_eq!(state.archive.capacity(), 50);
    }

    #[test]
    fn same_seed_gives_same_posts() {
        let config = Config { seed: Some(11), ..Config::default() };
        assert_eq!(initialize(&config).store.posts(), initialize(&config).store.posts());
    }

    #[test]
    fn unknown_themes_fall_back_to_builtins() {
        let themes = load_themes(&Config {
            theme_name: Some("no-such-theme".to_string()),
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        });
        assert_eq!(themes.dark.name, ThemeSet::default().dark.name);
        assert_eq!(themes.light.name, ThemeSet::default().light.name);
    }

    #[test]
    fn light_start_is_honored() {
        let state = initialize(&Config { dark_mode: false, seed: Some(1), ..Config::default() });
        assert!(!state.dark_mode);
        assert_eq!(state.theme().name, state.themes.light.name);
    }
}
