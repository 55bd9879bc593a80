use async_trait::async_trait;
use bytes::Bytes;
use erpstore_contract::{Ack, FileRecord, FindResponse, UploadResponse};
use futures::stream::BoxStream;
use thiserror::Error;

/// Body chunks flowing through the gateway without being buffered.
pub type ByteStream = BoxStream<'static, Result<Bytes, std::io::Error>>;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid upstream base URL {0}")]
    InvalidBaseUrl(String),
    #[error("upstream request failed: {0}")]
    Transport(String),
    #[error("upstream reply could not be decoded: {0}")]
    Decode(String),
    #[error("record path {0:?} does not name a stored file")]
    InvalidRecordPath(String),
}

/// A stored file on its way back to a client.
pub struct FetchedFile {
    pub status: u16,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub body: ByteStream,
}

impl std::fmt::Debug for FetchedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchedFile")
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// The service that owns uploaded bytes.
#[async_trait]
pub trait FileServer: Send + Sync {
    /// Forwards a multipart body, boundary included in `content_type`.
    async fn upload(
        &self,
        category: &str,
        content_type: &str,
        body: ByteStream,
    ) -> Result<UploadResponse, UpstreamError>;

    async fn fetch(&self, category: &str, name: &str) -> Result<FetchedFile, UpstreamError>;

    async fn remove(&self, record: &FileRecord) -> Result<Ack, UpstreamError>;

    async fn probe(&self) -> Result<(), UpstreamError>;
}

/// The service that owns file records.
#[async_trait]
pub trait MetadataService: Send + Sync {
    async fn insert(&self, records: &[FileRecord]) -> Result<Ack, UpstreamError>;

    async fn find(&self) -> Result<FindResponse, UpstreamError>;

    async fn probe(&self) -> Result<(), UpstreamError>;
}
