pub mod columns;
pub mod store;

pub use columns::ColumnMap;
pub use store::{DatasetInfo, RecordStore, StoreError};
