//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the domain and
//! fetch layers. It owns all mutable view state and never calls the host
//! directly.
//!
//! # Architecture
//!
//! ```text
//! Keys / Web results / Timer → Event → handle_event → AppState transitions → Actions → Host calls
//!                                 ↑                                              │
//!                                 └──────────────── WebRequestResult ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Pure name filter and match highlighting
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keys`]: Key press to event mapping
//! - [`modes`]: Input mode, load phase and paging direction
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod state;

pub use actions::{Action, SPINNER_INTERVAL_SECS};
pub use filter::{filter_by_name, match_ranges};
pub use handler::{handle_event, Event};
pub use keys::map_key;
pub use modes::{Direction, InputMode, LoadPhase};
pub use state::{AppState, Cursors};
