//! Pokédex: a Zellij plugin for browsing Pokémon cards from `PokeAPI`.
//!
//! The plugin pages through the `PokeAPI` list endpoint, fetches every
//! Pokémon on the current page concurrently, and renders the results as a
//! grid of cards that can be narrowed with a name search.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐       ┌───────────────────────┐
//! │ UI Layer (ui/)        │       │ Fetch Layer (fetch/)  │
//! │ - Rendering           │       │ - Request tagging     │
//! │ - Theming             │       │ - Page orchestration  │
//! │ - Card grid           │       │ - Generation guard    │
//! └───────────────────────┘       └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Pokémon model (domain/pokemon)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - Plain-text tracing to a rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/pokedex.wasm" {
//!         api_url "https://pokeapi.co/api/v2/pokemon"
//!         page_size "24"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Page Loading
//!
//! 1. The list endpoint is requested for the current cursor.
//! 2. Every summary on the page gets its own detail request, all in flight
//!    at once.
//! 3. The page is committed only when every detail succeeded, in list
//!    order. One failure fails the whole page.
//! 4. Each load carries a generation number; responses from a superseded
//!    load are dropped.
//!
//! # Example
//!
//! ```rust
//! use pokedex::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(matches!(actions[0], Action::Fetch(_)));
//! # Ok::<(), pokedex::PokedexError>(())
//! ```

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Direction, Event, InputMode, LoadPhase};
pub use domain::{PokedexError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default `PokeAPI` list endpoint.
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Default number of Pokémon per page.
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// List endpoint, without query string or trailing slash.
    pub api_url: String,

    /// Page size sent as `limit`. Default: 24
    pub page_size: u32,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Log filter directive: `trace`, `debug`, `info`, `warn` or `error`.
    /// Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `api_url`: trailing `/` removed; blank falls back to the default
    /// - `page_size`: `u32`, falls back to 24 when unparsable or zero
    /// - `theme`: `Option<String>`
    /// - `theme_file`: `Option<String>`, `~` mapped onto `/host`
    /// - `trace_level`: `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use pokedex::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "12".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, 12);
    /// assert_eq!(config.list_url(), "https://pokeapi.co/api/v2/pokemon?limit=12");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let api_url = config
            .get("api_url")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            api_url,
            page_size,
            theme_name: config.get("theme").cloned(),
            theme_file: config
                .get("theme_file")
                .map(|path| infrastructure::expand_tilde(path)),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// URL of the first page.
    #[must_use]
    pub fn list_url(&self) -> String {
        format!("{}?limit={}", self.api_url, self.page_size)
    }
}

/// Builds the initial [`AppState`] from configuration.
///
/// The theme comes from `theme_file` if set, else `theme_name`, else the
/// default. A theme that fails to load is logged and replaced by the
/// default. No request is issued until [`Event::Mount`].
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        api_url = %config.api_url,
        page_size = config.page_size,
        "initializing pokedex plugin"
    );

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(
                    theme_file = %theme_file,
                    error = %e,
                    "failed to load theme from file, using default"
                );
                Theme::default()
            })
        },
    );

    AppState::new(theme, config.list_url())
}
