//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the host. It returns a `Vec<Action>` and
//! the runtime in `main.rs` turns each one into a host call, in order.
//!
//! # Example
//!
//! ```rust
//! use pokedex::app::Action;
//! use pokedex::fetch::PageLoader;
//!
//! let mut loader = PageLoader::new();
//! let actions = vec![
//!     Action::Fetch(loader.begin("https://pokeapi.co/api/v2/pokemon?limit=24")),
//!     Action::ScheduleTick,
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::fetch::FetchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly asks to leave (pressing 'q').
    CloseFocus,

    /// Issues a GET request through the host.
    ///
    /// The request's tag must travel in the web request context so the
    /// completion can be routed back to the page loader.
    Fetch(FetchRequest),

    /// Arms the spinner timer.
    ///
    /// The runtime answers with an `Event::Tick` after [`SPINNER_INTERVAL_SECS`].
    ScheduleTick,
}

/// Delay between spinner frames.
pub const SPINNER_INTERVAL_SECS: f64 = 0.1;
