//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place application state changes in response
//! to the outside world. It pattern-matches the event, calls the matching
//! `AppState` transition and returns whether to re-render together with the
//! side effects the runtime must perform.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `PermissionDenied`, `CloseFocus`
//! - **Paging**: `Navigate`, `Reload`, `FetchCompleted`
//! - **Search**: `SearchMode`, `Char`, `Backspace`, `FocusResults`, `ExitSearch`, `Escape`
//! - **Grid**: `ScrollDown`, `ScrollUp`
//! - **Timer**: `Tick`
//!
//! # Example
//!
//! ```rust
//! use pokedex::app::{handle_event, Action, AppState, Event};
//! use pokedex::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), "https://pokeapi.co/api/v2/pokemon?limit=24");
//! let (should_render, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(should_render);
//! assert!(matches!(actions[0], Action::Fetch(_)));
//! # Ok::<(), pokedex::PokedexError>(())
//! ```

use std::collections::BTreeMap;

use super::modes::{Direction, InputMode};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::fetch::{FetchRequest, LoadOutcome, RequestTag};

/// Message shown when the host refuses network access.
pub const PERMISSION_DENIED_MESSAGE: &str = "Web access permission denied";

/// Events triggered by user input, host completions or timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The plugin may use the network; load the first page.
    Mount,
    /// Web access was refused.
    PermissionDenied,
    /// Hides the plugin pane.
    CloseFocus,

    /// Loads the adjacent page when a cursor exists in that direction.
    Navigate(Direction),
    /// Re-requests the last URL.
    Reload,
    /// A host web request finished.
    FetchCompleted {
        /// HTTP status reported by the host.
        status: u16,
        /// Response body.
        body: Vec<u8>,
        /// Context map the request was issued with.
        context: BTreeMap<String, String>,
    },

    /// Enters search typing mode.
    SearchMode,
    /// Leaves typing mode, keeping the query.
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the search query and returns to normal mode.
    Escape,

    /// Scrolls the card grid down one row.
    ScrollDown,
    /// Scrolls the card grid up one row.
    ScrollUp,

    /// Spinner timer fired.
    Tick,
}

fn fetch_actions(state: &mut AppState, request: FetchRequest) -> Vec<Action> {
    let mut actions = vec![Action::Fetch(request)];
    if !state.ticking {
        state.ticking = true;
        actions.push(Action::ScheduleTick);
    }
    actions
}

fn clear_search(state: &mut AppState) {
    state.input_mode = InputMode::Normal;
    state.set_search_query(String::new());
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`. Actions are executed in order.
///
/// # Errors
///
/// None of the current events fail.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::Mount => {
            tracing::debug!(url = %state.list_url, "loading first page");
            let request = state.begin_initial_load();
            Ok((true, fetch_actions(state, request)))
        }
        Event::PermissionDenied => {
            tracing::warn!("web access denied");
            state.deny_web_access(PERMISSION_DENIED_MESSAGE.to_string());
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::Navigate(direction) => {
            let Some(request) = state.begin_navigation(*direction) else {
                tracing::debug!(direction = ?direction, "no page in that direction");
                return Ok((false, vec![]));
            };
            tracing::debug!(direction = ?direction, url = %request.url, "navigating");
            Ok((true, fetch_actions(state, request)))
        }
        Event::Reload => {
            let Some(request) = state.begin_reload() else {
                tracing::debug!("reload refused without web access");
                return Ok((false, vec![]));
            };
            tracing::debug!(url = %request.url, "reloading page");
            Ok((true, fetch_actions(state, request)))
        }
        Event::FetchCompleted {
            status,
            body,
            context,
        } => {
            let Some(tag) = RequestTag::from_context(context) else {
                tracing::debug!("web request result without a page loader tag");
                return Ok((false, vec![]));
            };

            match state.loader.on_response(tag, *status, body) {
                LoadOutcome::Stale | LoadOutcome::Ignored => Ok((false, vec![])),
                LoadOutcome::Pending { received, expected } => {
                    tracing::trace!(received, expected, "waiting for details");
                    Ok((false, vec![]))
                }
                LoadOutcome::Dispatch(requests) => {
                    tracing::debug!(request_count = requests.len(), "fetching details");
                    Ok((false, requests.into_iter().map(Action::Fetch).collect()))
                }
                LoadOutcome::Completed(page) => {
                    state.commit_page(page);
                    Ok((true, vec![]))
                }
                LoadOutcome::Failed(error) => {
                    state.fail_load(&error);
                    Ok((true, vec![]))
                }
            }
        }

        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.search_query, "leaving search input");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.search_query, "clearing search");
            clear_search(state);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut query = state.search_query.clone();
            query.push(*c);
            tracing::trace!(query = %query, char = %c, "search query updated");
            state.set_search_query(query);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut query = state.search_query.clone();
            query.pop();
            state.set_search_query(query);
            Ok((true, vec![]))
        }

        Event::ScrollDown => Ok((state.scroll_down(), vec![])),
        Event::ScrollUp => Ok((state.scroll_up(), vec![])),

        Event::Tick => {
            if state.is_loading() {
                state.advance_spinner();
                Ok((true, vec![Action::ScheduleTick]))
            } else {
                state.ticking = false;
                Ok((false, vec![]))
            }
        }
    }
}

/// Logs an event without dumping response bodies.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::FetchCompleted { status, body, .. } => f
                .debug_struct("FetchCompleted")
                .field("status", status)
                .field("body_len", &body.len())
                .finish(),
            other => std::fmt::Debug::fmt(other, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LoadPhase;
    use crate::domain::pokemon::fixtures::{detail_body, list_body};
    use crate::ui::Theme;

    const LIST_URL: &str = "https://pokeapi.test/pokemon?limit=3";

    fn state() -> AppState {
        AppState::new(Theme::default(), LIST_URL)
    }

    fn requests(actions: &[Action]) -> Vec<FetchRequest> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Fetch(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }

    fn complete(
        state: &mut AppState,
        request: &FetchRequest,
        status: u16,
        body: Vec<u8>,
    ) -> (bool, Vec<Action>) {
        handle_event(
            state,
            &Event::FetchCompleted {
                status,
                body,
                context: request.context(),
            },
        )
        .unwrap()
    }

    #[test]
    fn mount_requests_first_page_and_starts_spinner() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Mount).unwrap();

        assert!(render);
        assert_eq!(requests(&actions)[0].url, LIST_URL);
        assert!(actions.contains(&Action::ScheduleTick));
        assert_eq!(state.phase(), LoadPhase::InitialLoading);
    }

    #[test]
    fn failed_list_fetch_clears_flags_and_sets_error() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        let list = requests(&actions).remove(0);

        let (render, actions) = complete(&mut state, &list, 503, Vec::new());

        assert!(render);
        assert!(actions.is_empty());
        assert!(state.items.is_empty());
        assert_eq!(state.error_message.as_deref(), Some("Failed to fetch data"));
        assert!(!state.initial_loading);
        assert!(!state.navigation_loading);
        assert_eq!(state.phase(), LoadPhase::Error);
    }

    #[test]
    fn list_dispatches_details_without_rendering() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        let list = requests(&actions).remove(0);

        let (render, actions) = complete(
            &mut state,
            &list,
            200,
            list_body(&["bulbasaur", "ivysaur"], None, None),
        );

        assert!(!render);
        assert_eq!(requests(&actions).len(), 2);
        assert!(state.initial_loading);
    }

    #[test]
    fn unknown_context_is_ignored() {
        let mut state = state();
        handle_event(&mut state, &Event::Mount).unwrap();

        let (render, actions) = handle_event(
            &mut state,
            &Event::FetchCompleted {
                status: 200,
                body: detail_body(1, "bulbasaur"),
                context: BTreeMap::new(),
            },
        )
        .unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.initial_loading);
    }

    #[test]
    fn navigate_without_cursor_is_a_no_op() {
        let mut state = state();
        state.initial_loading = false;

        let (render, actions) =
            handle_event(&mut state, &Event::Navigate(Direction::Next)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(!state.navigation_loading);
    }

    #[test]
    fn permission_denied_shows_error() {
        let mut state = state();
        handle_event(&mut state, &Event::PermissionDenied).unwrap();

        assert_eq!(state.phase(), LoadPhase::Error);
        assert_eq!(
            state.error_message.as_deref(),
            Some(PERMISSION_DENIED_MESSAGE)
        );
    }

    #[test]
    fn reload_after_denied_access_issues_no_request() {
        let mut state = state();
        handle_event(&mut state, &Event::PermissionDenied).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Reload).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.phase(), LoadPhase::Error);
        assert!(!state.compute_viewmodel(40, 120).footer.keybindings.contains("reload"));

        let (_, actions) = handle_event(&mut state, &Event::Navigate(Direction::Next)).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn failed_page_while_searching_returns_to_normal_keys() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        let list = requests(&actions).remove(0);
        complete(
            &mut state,
            &list,
            200,
            list_body(&[], None, Some("https://pokeapi.test/pokemon?offset=3&limit=3")),
        );

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('p')).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Navigate(Direction::Next)).unwrap();
        let next = requests(&actions).remove(0);
        complete(&mut state, &next, 500, Vec::new());

        assert_eq!(state.phase(), LoadPhase::Error);
        assert_eq!(state.input_mode, InputMode::Normal);

        let (_, actions) = handle_event(&mut state, &Event::Reload).unwrap();
        assert_eq!(requests(&actions)[0].url, next.url);
        assert_eq!(state.search_query, "p");
    }

    #[test]
    fn typing_only_edits_query_in_search_mode() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.search_query.is_empty());

        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "pika".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.search_query, "pik");

        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_query, "pik");

        handle_event(&mut state, &Event::Escape).unwrap();
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn search_never_fetches() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Char('c')).unwrap();
        assert!(actions.is_empty());
        let (_, actions) = handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn tick_reschedules_only_while_loading() {
        let mut state = state();
        handle_event(&mut state, &Event::Mount).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::ScheduleTick]);
        assert_eq!(state.spinner_frame, 1);

        state.fail_with_message("offline".to_string());
        let (render, actions) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(!state.ticking);
    }

    #[test]
    fn second_load_does_not_double_the_timer() {
        let mut state = state();
        handle_event(&mut state, &Event::Mount).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Reload).unwrap();
        assert!(!actions.contains(&Action::ScheduleTick));
    }

    #[test]
    fn q_closes_the_pane() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
