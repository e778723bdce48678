pub mod mock_record_source;

pub use mock_record_source::{MockRecordSource, MockSourceFactory};
