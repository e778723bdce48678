//! Configuration for zonewatch, organized by concern:
//! - `root`: top-level `Config`, file loading and CLI overrides
//! - `probe`: resolution and concurrency settings
//! - `logging`: log level
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod probe;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use probe::ProbeConfig;
pub use root::{CliOverrides, Config};
