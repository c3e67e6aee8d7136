//! Domain layer for the Pokédex plugin.
//!
//! Core data types and errors, independent of Zellij APIs and rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`pokemon`]: List pages, summaries and full Pokémon records
//!
//! # Examples
//!
//! ```
//! use pokedex::domain::ItemDetail;
//!
//! let detail = ItemDetail::from_json(br#"{"id": 4, "name": "charmander"}"#).unwrap();
//! assert_eq!(detail.name, "charmander");
//! assert_eq!(detail.speed(), None);
//! ```

pub mod error;
pub mod pokemon;

pub use error::{FetchError, PokedexError, Result};
pub use pokemon::{ItemDetail, ItemSummary, ListPage, Stat};
