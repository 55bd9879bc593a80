use async_trait::async_trait;
use erpstore_contract::{Ack, FileRecord, FindResponse, InsertRequest, UploadResponse};
use futures::{StreamExt, TryStreamExt};
use reqwest::{header, Client, Url};
use tracing::debug;

use crate::client::{ByteStream, FetchedFile, FileServer, MetadataService, UpstreamError};

fn parse_base(base_url: &str) -> Result<Url, UpstreamError> {
    let url = Url::parse(base_url).map_err(|_| UpstreamError::InvalidBaseUrl(base_url.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(UpstreamError::InvalidBaseUrl(base_url.to_string()));
    }
    Ok(url)
}

fn join(base: &Url, segments: &[&str]) -> Result<Url, UpstreamError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| UpstreamError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn transport(err: reqwest::Error) -> UpstreamError {
    UpstreamError::Transport(err.to_string())
}

fn decode(err: reqwest::Error) -> UpstreamError {
    UpstreamError::Decode(err.to_string())
}

/// Storage service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFileServer {
    client: Client,
    base: Url,
}

impl HttpFileServer {
    pub fn new(base_url: &str) -> Result<Self, UpstreamError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, UpstreamError> {
        Ok(Self {
            client,
            base: parse_base(base_url)?,
        })
    }
}

#[async_trait]
impl FileServer for HttpFileServer {
    async fn upload(
        &self,
        category: &str,
        content_type: &str,
        body: ByteStream,
    ) -> Result<UploadResponse, UpstreamError> {
        let url = join(&self.base, &["upload", category])?;
        debug!(%url, "forwarding upload");
        self.client
            .post(url)
            .header(header::CONTENT_TYPE, content_type)
            .body(reqwest::Body::wrap_stream(body))
            .send()
            .await
            .map_err(transport)?
            .json::<UploadResponse>()
            .await
            .map_err(decode)
    }

    async fn fetch(&self, category: &str, name: &str) -> Result<FetchedFile, UpstreamError> {
        let url = join(&self.base, &[category, name])?;
        let response = self.client.get(url).send().await.map_err(transport)?;

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        Ok(FetchedFile {
            status: response.status().as_u16(),
            content_type,
            content_length: response.content_length(),
            body: response.bytes_stream().map_err(std::io::Error::other).boxed(),
        })
    }

    async fn remove(&self, record: &FileRecord) -> Result<Ack, UpstreamError> {
        let (category, name) = record
            .segments()
            .ok_or_else(|| UpstreamError::InvalidRecordPath(record.path.clone()))?;
        let url = join(&self.base, &["upload", category, name])?;
        self.client
            .delete(url)
            .send()
            .await
            .map_err(transport)?
            .json::<Ack>()
            .await
            .map_err(decode)
    }

    async fn probe(&self) -> Result<(), UpstreamError> {
        let url = join(&self.base, &["health", "live"])?;
        self.client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(transport)?;
        Ok(())
    }
}

/// Metadata store reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpMetadataService {
    client: Client,
    base: Url,
}

impl HttpMetadataService {
    pub fn new(base_url: &str) -> Result<Self, UpstreamError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, UpstreamError> {
        Ok(Self {
            client,
            base: parse_base(base_url)?,
        })
    }
}

#[async_trait]
impl MetadataService for HttpMetadataService {
    async fn insert(&self, records: &[FileRecord]) -> Result<Ack, UpstreamError> {
        let url = join(&self.base, &["storageMap", "insert"])?;
        let request = InsertRequest {
            files_info: records.to_vec(),
        };
        self.client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(transport)?
            .json::<Ack>()
            .await
            .map_err(decode)
    }

    async fn find(&self) -> Result<FindResponse, UpstreamError> {
        let url = join(&self.base, &["storageMap", "find"])?;
        self.client
            .post(url)
            .send()
            .await
            .map_err(transport)?
            .json::<FindResponse>()
            .await
            .map_err(decode)
    }

    async fn probe(&self) -> Result<(), UpstreamError> {
        let url = join(&self.base, &["health", "live"])?;
        self.client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(transport)?;
        Ok(())
    }
}
