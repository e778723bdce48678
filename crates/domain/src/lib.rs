//! Zonewatch domain layer: zone specifications, snapshots, outcomes and
//! the configuration model. No I/O, no async.
pub mod config;
pub mod errors;
pub mod outcome;
pub mod severity;
pub mod snapshot;
pub mod zone_spec;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use outcome::{Classification, ZoneOutcome};
pub use severity::Severity;
pub use snapshot::ZoneSnapshot;
pub use zone_spec::{ZoneSpec, DEFAULT_SUBDOMAIN_LABELS};
