pub mod record;

pub use record::{AdmissionRecord, RawRecord, RecordError};
