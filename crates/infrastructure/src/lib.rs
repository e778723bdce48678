//! Zonewatch infrastructure layer: the hickory-resolver adapter behind the
//! lookup ports and the baseline file store.
pub mod baseline;
pub mod dns;

pub use baseline::BaselineFileStore;
pub use dns::{HickoryRecordSource, HickorySourceFactory};
