//! Tracing initialization and subscriber setup.

use std::sync::Arc;

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the plugin data directory.
pub const LOG_FILE_NAME: &str = "pokedex.log";

/// Installs the global subscriber: an [`EnvFilter`] from `trace_level`
/// (default `"info"`) in front of a plain-text fmt layer writing to
/// `<data_dir>/pokedex.log` through a rotating [`FileWriter`].
///
/// Logging is optional in the sandbox, so any failure (no data directory, a
/// subscriber already installed) leaves tracing disabled without reporting
/// an error. Calling this more than once is harmless.
///
/// # Example
///
/// ```rust
/// use pokedex::observability::init_tracing;
/// use pokedex::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = Arc::new(FileWriter::new(data_dir.join(LOG_FILE_NAME)));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer)
        .try_init();
}
