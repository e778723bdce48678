pub mod build_report;
pub mod build_snapshot;
pub mod check_zones;
pub mod collect_records;

pub use build_report::{CheckReport, ReportBuilder};
pub use build_snapshot::SnapshotBuilder;
pub use check_zones::ZoneCheckRunner;
pub use collect_records::RecordCollector;
