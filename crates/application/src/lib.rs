//! Zonewatch application layer: the lookup ports and the use cases that
//! turn zone specifications into fingerprinted outcomes and a report.
pub mod fingerprint;
pub mod ports;
pub mod use_cases;

pub use ports::{LookupError, MxEntry, RecordSource, RecordSourceFactory, SrvEntry};
pub use use_cases::{
    CheckReport, RecordCollector, ReportBuilder, SnapshotBuilder, ZoneCheckRunner,
};
