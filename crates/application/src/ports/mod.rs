pub mod record_source;

pub use record_source::{LookupError, MxEntry, RecordSource, RecordSourceFactory, SrvEntry};
