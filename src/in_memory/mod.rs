mod store;

pub use store::{ExecutionError, RecordStore};
