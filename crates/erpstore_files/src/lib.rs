pub mod service;
pub mod store;

pub use service::build_router;
pub use store::{DiskStore, PendingFile, StoreError, DEFAULT_MAX_FILE_BYTES};
