pub mod handle;
pub mod repository;
pub mod service;

pub use handle::{MetadataConfig, MetadataHandle};
pub use repository::MetadataRepository;
pub use service::build_router;
