//! Structured logging to a rotating file.
//!
//! ```text
//! tracing macros → EnvFilter(trace_level) → fmt layer → FileWriter → <data_dir>/pokedex.log
//! ```
//!
//! The log rotates at 10 MB and keeps three backups (`pokedex.log.1` ..
//! `pokedex.log.3`).
//!
//! # Configuration
//!
//! The filter comes from the `trace_level` plugin option (any `EnvFilter`
//! directive, e.g. `"debug"` or `"pokedex=trace"`), defaulting to `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
