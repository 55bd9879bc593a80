use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use erpstore_contract::Ack;
use erpstore_upstream::{FileServer, MetadataService, UpstreamError};
use futures::{StreamExt, TryStreamExt};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::workflow::{InsertOutcome, InsertWorkflow};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";
const STORAGE_NAMESPACE: &str = "storage";

#[derive(Clone)]
pub struct AppState {
    pub files: Arc<dyn FileServer>,
    pub metadata: Arc<dyn MetadataService>,
}

impl AppState {
    pub fn new(files: Arc<dyn FileServer>, metadata: Arc<dyn MetadataService>) -> Self {
        Self { files, metadata }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .route("/{dir}/{operation}", post(dispatch))
        .route("/{first}/{second}/{name}", get(passthrough))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_live() -> impl IntoResponse {
    Json(json!({
        "status": "live",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let files_ready = state.files.probe().await.is_ok();
    let metadata_ready = state.metadata.probe().await.is_ok();
    let ready = files_ready && metadata_ready;
    let payload = Json(json!({
        "status": if ready { "ready" } else { "degraded" },
        "file_server": files_ready,
        "metadata": metadata_ready,
        "timestamp": Utc::now().to_rfc3339()
    }));

    if ready {
        (StatusCode::OK, payload).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, payload).into_response()
    }
}

async fn dispatch(
    State(state): State<AppState>,
    Path((dir, operation)): Path<(String, String)>,
    request: Request,
) -> Result<Response, (StatusCode, Json<Value>)> {
    match operation.as_str() {
        "insert" => insert(&state, &dir, request).await,
        "find" => find(&state).await,
        _ => {
            info!(dir = %dir, operation = %operation, "unknown operation");
            Ok(Json(Ack::not_found()).into_response())
        }
    }
}

async fn insert(
    state: &AppState,
    dir: &str,
    request: Request,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(FALLBACK_CONTENT_TYPE)
        .to_string();
    let body = request
        .into_body()
        .into_data_stream()
        .map_err(std::io::Error::other)
        .boxed();

    let outcome = InsertWorkflow::new(state.files.as_ref(), state.metadata.as_ref())
        .run(dir, &content_type, body)
        .await
        .map_err(upstream_error)?;

    Ok(match outcome {
        InsertOutcome::UploadRejected(reply) => Json(reply).into_response(),
        InsertOutcome::Inserted(reply) | InsertOutcome::MetadataRejected { reply, .. } => {
            Json(reply).into_response()
        }
    })
}

async fn find(state: &AppState) -> Result<Response, (StatusCode, Json<Value>)> {
    let reply = state.metadata.find().await.map_err(upstream_error)?;
    Ok(Json(reply).into_response())
}

/// Which stored category a read addresses. `/storage/{category}/{name}`
/// names it in the second segment; every other form
/// (`/{category}/{operation}/{name}`) names it in the first.
fn read_category<'a>(first: &'a str, second: &'a str) -> &'a str {
    if first == STORAGE_NAMESPACE {
        second
    } else {
        first
    }
}

/// Streams a stored file from the storage service.
async fn passthrough(
    State(state): State<AppState>,
    Path((first, second, name)): Path<(String, String, String)>,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let category = read_category(&first, &second);
    let fetched = state
        .files
        .fetch(category, &name)
        .await
        .map_err(upstream_error)?;

    let status = StatusCode::from_u16(fetched.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = Response::builder().status(status);
    if let Some(content_type) = fetched.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    if let Some(length) = fetched.content_length {
        builder = builder.header(header::CONTENT_LENGTH, length);
    }

    builder.body(Body::from_stream(fetched.body)).map_err(|err| {
        error!(error = %err, "failed to build passthrough response");
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": "upstream_error", "detail": err.to_string() })),
        )
    })
}

fn upstream_error(error: UpstreamError) -> (StatusCode, Json<Value>) {
    error!(error = %error, "upstream request failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "error": "upstream_error", "detail": error.to_string() })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use bytes::Bytes;
    use erpstore_contract::{FileRecord, FindResponse, UploadResponse};
    use erpstore_upstream::{ByteStream, FetchedFile};
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeFiles {
        reject_uploads: bool,
        uploads: Mutex<Vec<(String, String, Vec<u8>)>>,
        removed: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl FileServer for FakeFiles {
        async fn upload(
            &self,
            category: &str,
            content_type: &str,
            body: ByteStream,
        ) -> Result<UploadResponse, UpstreamError> {
            let chunks: Vec<Bytes> = body
                .try_collect()
                .await
                .map_err(|err| UpstreamError::Transport(err.to_string()))?;
            self.uploads.lock().unwrap().push((
                category.to_string(),
                content_type.to_string(),
                chunks.concat(),
            ));
            if self.reject_uploads {
                return Ok(UploadResponse::failed());
            }
            Ok(UploadResponse::succeeded(vec![FileRecord::new(
                "photo.png",
                FileRecord::public_path(category, "stored.png"),
            )]))
        }

        async fn fetch(&self, category: &str, name: &str) -> Result<FetchedFile, UpstreamError> {
            if name != "stored.png" {
                return Ok(FetchedFile {
                    status: 404,
                    content_type: Some("text/plain".to_string()),
                    content_length: None,
                    body: futures::stream::empty().boxed(),
                });
            }
            let bytes = Bytes::from(format!("bytes of {category}/{name}"));
            Ok(FetchedFile {
                status: 200,
                content_type: Some("image/png".to_string()),
                content_length: Some(bytes.len() as u64),
                body: futures::stream::iter(vec![Ok(bytes)]).boxed(),
            })
        }

        async fn remove(&self, record: &FileRecord) -> Result<Ack, UpstreamError> {
            self.removed.lock().unwrap().push(record.path.clone());
            Ok(Ack::deleted())
        }

        async fn probe(&self) -> Result<(), UpstreamError> {
            Ok(())
        }
    }

    enum InsertBehaviour {
        Accept,
        Reject,
        Unreachable,
    }

    struct FakeMetadata {
        insert_behaviour: InsertBehaviour,
        records: Mutex<Vec<FileRecord>>,
        calls: Mutex<usize>,
    }

    impl FakeMetadata {
        fn new(insert_behaviour: InsertBehaviour) -> Self {
            Self {
                insert_behaviour,
                records: Mutex::new(Vec::new()),
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl MetadataService for FakeMetadata {
        async fn insert(&self, records: &[FileRecord]) -> Result<Ack, UpstreamError> {
            *self.calls.lock().unwrap() += 1;
            match self.insert_behaviour {
                InsertBehaviour::Accept => {
                    self.records.lock().unwrap().extend_from_slice(records);
                    Ok(Ack::inserted())
                }
                InsertBehaviour::Reject => Ok(Ack::insert_failed()),
                InsertBehaviour::Unreachable => {
                    Err(UpstreamError::Transport("connection refused".to_string()))
                }
            }
        }

        async fn find(&self) -> Result<FindResponse, UpstreamError> {
            *self.calls.lock().unwrap() += 1;
            Ok(FindResponse::found(self.records.lock().unwrap().clone()))
        }

        async fn probe(&self) -> Result<(), UpstreamError> {
            match self.insert_behaviour {
                InsertBehaviour::Unreachable => {
                    Err(UpstreamError::Transport("connection refused".to_string()))
                }
                _ => Ok(()),
            }
        }
    }

    fn server(files: Arc<FakeFiles>, metadata: Arc<FakeMetadata>) -> TestServer {
        TestServer::new(build_router(AppState::new(files, metadata))).expect("test server")
    }

    fn photo_form() -> MultipartForm {
        MultipartForm::new().add_part(
            "file",
            Part::bytes(b"png-bytes".to_vec()).file_name("photo.png"),
        )
    }

    #[tokio::test]
    async fn unknown_operation_is_not_found_without_upstream_calls() {
        let files = Arc::new(FakeFiles::default());
        let metadata = Arc::new(FakeMetadata::new(InsertBehaviour::Accept));
        let server = server(files.clone(), metadata.clone());

        let response = server.post("/anycat/bogus").multipart(photo_form()).await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "code": 404, "messages": "not found" })
        );
        assert!(files.uploads.lock().unwrap().is_empty());
        assert_eq!(*metadata.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn insert_forwards_body_then_records_files() {
        let files = Arc::new(FakeFiles::default());
        let metadata = Arc::new(FakeMetadata::new(InsertBehaviour::Accept));
        let server = server(files.clone(), metadata.clone());

        let response = server.post("/phones/insert").multipart(photo_form()).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Ack>(), Ack::inserted());

        let uploads = files.uploads.lock().unwrap();
        assert_eq!(uploads.len(), 1);
        let (category, content_type, body) = &uploads[0];
        assert_eq!(category, "phones");
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        assert!(String::from_utf8_lossy(body).contains("png-bytes"));

        assert_eq!(
            *metadata.records.lock().unwrap(),
            vec![FileRecord::new("photo.png", "/phones/stored.png")]
        );
        assert!(files.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_upload_stops_before_metadata() {
        let files = Arc::new(FakeFiles {
            reject_uploads: true,
            ..FakeFiles::default()
        });
        let metadata = Arc::new(FakeMetadata::new(InsertBehaviour::Accept));
        let server = server(files, metadata.clone());

        let response = server.post("/phones/insert").multipart(photo_form()).await;
        assert_eq!(response.json::<UploadResponse>(), UploadResponse::failed());
        assert_eq!(*metadata.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn rejected_records_remove_stored_files() {
        let files = Arc::new(FakeFiles::default());
        let metadata = Arc::new(FakeMetadata::new(InsertBehaviour::Reject));
        let server = server(files.clone(), metadata);

        let response = server.post("/phones/insert").multipart(photo_form()).await;
        assert_eq!(response.json::<Ack>(), Ack::insert_failed());
        assert_eq!(*files.removed.lock().unwrap(), vec!["/phones/stored.png".to_string()]);
    }

    #[tokio::test]
    async fn unreachable_metadata_compensates_and_reports_upstream_error() {
        let files = Arc::new(FakeFiles::default());
        let metadata = Arc::new(FakeMetadata::new(InsertBehaviour::Unreachable));
        let server = server(files.clone(), metadata);

        let response = server
            .post("/phones/insert")
            .multipart(photo_form())
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_GATEWAY);
        assert_eq!(response.json::<Value>()["error"], "upstream_error");
        assert_eq!(files.removed.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_reads_metadata_only() {
        let files = Arc::new(FakeFiles::default());
        let metadata = Arc::new(FakeMetadata::new(InsertBehaviour::Accept));
        metadata
            .records
            .lock()
            .unwrap()
            .push(FileRecord::new("photo.png", "/phones/stored.png"));
        let server = server(files.clone(), metadata);

        let response = server.post("/phones/find").await;
        response.assert_status_ok();
        let body: FindResponse = response.json();
        assert_eq!(
            body,
            FindResponse::found(vec![FileRecord::new("photo.png", "/phones/stored.png")])
        );
        assert!(files.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn passthrough_streams_file_with_headers() {
        let server = server(
            Arc::new(FakeFiles::default()),
            Arc::new(FakeMetadata::new(InsertBehaviour::Accept)),
        );

        let response = server.get("/phones/insert/stored.png").await;
        response.assert_status_ok();
        assert_eq!(response.header(header::CONTENT_TYPE), "image/png");
        assert_eq!(response.text(), "bytes of phones/stored.png");

        server
            .get("/phones/insert/missing.png")
            .expect_failure()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn storage_prefix_names_the_category_second() {
        let server = server(
            Arc::new(FakeFiles::default()),
            Arc::new(FakeMetadata::new(InsertBehaviour::Accept)),
        );

        let response = server.get("/storage/tablets/stored.png").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "bytes of tablets/stored.png");

        let response = server.get("/tablets/find/stored.png").await;
        assert_eq!(response.text(), "bytes of tablets/stored.png");
    }

    #[test]
    fn read_category_picks_the_addressed_segment() {
        assert_eq!(read_category("phones", "insert"), "phones");
        assert_eq!(read_category("storage", "phones"), "phones");
        assert_eq!(read_category("storage", "storage"), "storage");
    }

    #[tokio::test]
    async fn readiness_reflects_upstreams() {
        let healthy = server(
            Arc::new(FakeFiles::default()),
            Arc::new(FakeMetadata::new(InsertBehaviour::Accept)),
        );
        healthy.get("/health/ready").await.assert_status_ok();

        let degraded = server(
            Arc::new(FakeFiles::default()),
            Arc::new(FakeMetadata::new(InsertBehaviour::Unreachable)),
        );
        let response = degraded.get("/health/ready").expect_failure().await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.json::<Value>()["metadata"], false);
    }
}
