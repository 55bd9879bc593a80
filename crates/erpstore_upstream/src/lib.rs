pub mod client;
pub mod rest;

pub use client::{ByteStream, FetchedFile, FileServer, MetadataService, UpstreamError};
pub use rest::{HttpFileServer, HttpMetadataService};
