//! Error types for the Pokédex plugin.
//!
//! This module defines the crate-wide error type [`PokedexError`], the network
//! error type [`FetchError`] surfaced by page loads, and a [`Result`] alias.
//! All errors derive their `Error` implementations through `thiserror`.

use thiserror::Error;

/// A failed page load.
///
/// Every variant aborts the whole page: the caller clears the card grid and
/// shows the `Display` text as a single error line. Variants exist for the
/// trace log only; the view controller handles them identically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The host answered with a non-success HTTP status.
    ///
    /// Transport failures (DNS, refused connections, timeouts) arrive from the
    /// Zellij host as non-2xx statuses as well, so they land here too.
    #[error("Failed to fetch data")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status reported by the host.
        status: u16,
    },

    /// The response body could not be decoded into the expected record.
    #[error("Failed to read response from {url}: {reason}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Decoder message.
        reason: String,
    },
}

impl FetchError {
    /// Returns the URL of the request that failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokedex::domain::FetchError;
    ///
    /// let err = FetchError::Status {
    ///     url: "https://pokeapi.co/api/v2/pokemon".into(),
    ///     status: 503,
    /// };
    /// assert_eq!(err.url(), "https://pokeapi.co/api/v2/pokemon");
    /// assert_eq!(err.to_string(), "Failed to fetch data");
    /// ```
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }
}

/// The main error type for Pokédex plugin operations.
#[derive(Debug, Error)]
pub enum PokedexError {
    /// A page load failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Pokédex operations.
pub type Result<T> = std::result::Result<T, PokedexError>;
