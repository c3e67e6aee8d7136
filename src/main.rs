//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Pokédex library and the Zellij plugin
//! system. All host calls live here; the library only sees [`Event`]s and
//! returns [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; granting it mounts the browser
//! 3. **Subscribe**: Key, `WebRequestResult`, `Timer`, `PermissionRequestResult`
//! 4. **Update**: Map host events, delegate to `handle_event`, run actions
//! 5. **Render**: Record the pane size and call the library renderer
//!
//! # Event Mapping
//!
//! - `PermissionRequestResult(Granted)` → `Event::Mount`
//! - `PermissionRequestResult(Denied)` → `Event::PermissionDenied`
//! - `WebRequestResult` → `Event::FetchCompleted`
//! - `Timer` → `Event::Tick`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`/`Right`/`PageDown`: Next page
//! - `Ctrl+p`/`Left`/`PageUp`: Previous page
//! - `Down`/`Up`: Scroll cards
//!
//! In normal mode:
//! - `l`/`h`: Next/previous page
//! - `j`/`k`: Scroll cards
//! - `/`: Enter search mode
//! - `r`: Reload the current page
//! - `Esc`: Clear the search
//! - `q`: Close plugin
//!
//! In search mode:
//! - `h`/`j`/`k`/`l`/etc.: Type characters
//! - `Enter`: Keep the query, leave typing mode
//! - `Esc`: Clear the query and leave search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use pokedex::app::SPINNER_INTERVAL_SECS;
use pokedex::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: pokedex::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: pokedex::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the application state, requests web
    /// access and subscribes to events. Nothing is fetched until permission
    /// is granted.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        pokedex::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(list_url = %config.list_url(), "parsed configuration");
        self.app = pokedex::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates the host event, delegates to `handle_event` and executes
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
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                tracing::debug!(status, body_len = body.len(), "web request result");
                Event::FetchCompleted {
                    status,
                    body,
                    context,
                }
            }
            zellij_tile::prelude::Event::Timer(_) => Event::Tick,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => {
                    tracing::debug!("web access granted - loading first page");
                    Event::Mount
                }
                PermissionStatus::Denied => Event::PermissionDenied,
            },
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
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        pokedex::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");
        pokedex::app::map_key(key, self.app.input_mode)
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(request) => {
                tracing::debug!(url = %request.url, "issuing web request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context(),
                );
            }
            Action::ScheduleTick => set_timeout(SPINNER_INTERVAL_SECS),
        }
    }
}
