//! Page fetching on top of host-performed web requests.
//!
//! - [`request`]: Request tags carried through the web request context
//! - [`loader`]: The list-then-details page load state machine

pub mod loader;
pub mod request;

pub use loader::{LoadOutcome, LoadedPage, PageLoader};
pub use request::{FetchRequest, RequestKind, RequestTag};
