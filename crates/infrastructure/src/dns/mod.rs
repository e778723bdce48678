pub mod hickory_source;

pub use hickory_source::{HickoryRecordSource, HickorySourceFactory};
