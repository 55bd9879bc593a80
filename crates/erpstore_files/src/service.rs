use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, Path, State},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use erpstore_contract::{Ack, FileRecord, UploadResponse};
use serde_json::json;
use thiserror::Error;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::store::{DiskStore, PendingFile, StoreError};

const FILE_FIELD: &str = "file";

#[derive(Debug, Error)]
enum UploadError {
    #[error("request is not a readable multipart body: {0}")]
    Rejected(#[from] MultipartRejection),
    #[error("multipart parse failure: {0}")]
    Parse(#[from] axum::extract::multipart::MultipartError),
    #[error("no `file` part in request")]
    NoFiles,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Upload, delete and static download routes over `store`.
pub fn build_router(store: DiskStore, max_request_bytes: usize) -> Router {
    let static_files = ServeDir::new(store.root());
    Router::new()
        .route("/health/live", get(health_live))
        .route("/upload/{category}", post(upload))
        .route("/upload/{category}/{name}", delete(remove))
        .layer(DefaultBodyLimit::max(max_request_bytes))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

async fn health_live() -> impl IntoResponse {
    Json(json!({
        "status": "live",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

async fn upload(
    State(store): State<DiskStore>,
    Path(category): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Json<UploadResponse> {
    let mut stored = Vec::new();
    match receive_files(&store, &category, multipart, &mut stored).await {
        Ok(()) => {
            info!(category = %category, count = stored.len(), "upload stored");
            Json(UploadResponse::succeeded(stored))
        }
        Err(err) => {
            match &err {
                UploadError::Store(StoreError::Io(_)) => {
                    error!(category = %category, error = %err, "upload failed")
                }
                _ => warn!(category = %category, error = %err, "upload rejected"),
            }
            discard_stored(&store, &stored).await;
            Json(UploadResponse::failed())
        }
    }
}

/// Streams every `file` part to disk. Records of completed files are
/// pushed to `stored` so the caller can undo them when a later part fails.
async fn receive_files(
    store: &DiskStore,
    category: &str,
    multipart: Result<Multipart, MultipartRejection>,
    stored: &mut Vec<FileRecord>,
) -> Result<(), UploadError> {
    let mut multipart = multipart?;
    store.check_category(category)?;

    while let Some(mut field) = multipart.next_field().await? {
        let original_filename = if field.name() == Some(FILE_FIELD) {
            field.file_name().map(str::to_string)
        } else {
            None
        };
        let Some(original_filename) = original_filename else {
            while field.chunk().await?.is_some() {}
            continue;
        };

        let mut pending = store.begin(category, &original_filename).await?;
        if let Err(err) = copy_field(&mut field, &mut pending).await {
            pending.discard().await;
            // the reply goes out only after the request body is consumed
            while let Ok(Some(_)) = field.chunk().await {}
            drop(field);
            drain(&mut multipart).await;
            return Err(err);
        }
        stored.push(pending.commit().await?);
    }

    if stored.is_empty() {
        return Err(UploadError::NoFiles);
    }
    Ok(())
}

async fn copy_field(
    field: &mut axum::extract::multipart::Field<'_>,
    pending: &mut PendingFile,
) -> Result<(), UploadError> {
    while let Some(chunk) = field.chunk().await? {
        pending.write_chunk(&chunk).await?;
    }
    Ok(())
}

async fn drain(multipart: &mut Multipart) {
    while let Ok(Some(mut field)) = multipart.next_field().await {
        while let Ok(Some(_)) = field.chunk().await {}
    }
}

async fn discard_stored(store: &DiskStore, stored: &[FileRecord]) {
    for record in stored {
        if let Err(err) = store.remove_record(record).await {
            warn!(path = %record.path, error = %err, "failed to remove file of rejected upload");
        }
    }
}

async fn remove(
    State(store): State<DiskStore>,
    Path((category, name)): Path<(String, String)>,
) -> Json<Ack> {
    match store.remove(&category, &name).await {
        Ok(true) => {
            info!(category = %category, name = %name, "stored file removed");
            Json(Ack::deleted())
        }
        Ok(false) => {
            warn!(category = %category, name = %name, "delete of unknown file");
            Json(Ack::delete_failed())
        }
        Err(err) => {
            warn!(category = %category, name = %name, error = %err, "delete failed");
            Json(Ack::delete_failed())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DEFAULT_MAX_FILE_BYTES;
    use axum::http::{header, StatusCode};
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use erpstore_contract::ResultCode;

    async fn test_server(limit: u64) -> (tempfile::TempDir, DiskStore, TestServer) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = DiskStore::open(dir.path().join("storage"), limit)
            .await
            .expect("open store");
        let server =
            TestServer::new(build_router(store.clone(), 8 * 1024 * 1024)).expect("test server");
        (dir, store, server)
    }

    fn files_in(store: &DiskStore, category: &str) -> usize {
        match std::fs::read_dir(store.root().join(category)) {
            Ok(entries) => entries.count(),
            Err(_) => 0,
        }
    }

    #[tokio::test]
    async fn upload_stores_files_and_reports_relative_paths() {
        let (_dir, store, server) = test_server(DEFAULT_MAX_FILE_BYTES).await;
        let form = MultipartForm::new()
            .add_text("note", "ignored")
            .add_part("file", Part::bytes(b"png-bytes".to_vec()).file_name("photo.png"))
            .add_part("file", Part::bytes(b"jpg-bytes".to_vec()).file_name("other.jpg"));

        let response = server.post("/upload/phones").multipart(form).await;
        response.assert_status_ok();
        let body: UploadResponse = response.json();

        assert_eq!(body.code, ResultCode::SUCCESS);
        assert!(body.success);
        assert_eq!(body.messages, "upload succeeded");
        let files = body.files_info.expect("filesInfo");
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].original_filename, "photo.png");
        assert_eq!(files[1].original_filename, "other.jpg");
        assert!(files[0].path.starts_with("/phones/") && files[0].path.ends_with(".png"));

        let (category, name) = files[0].segments().expect("segments");
        let bytes = std::fs::read(store.root().join(category).join(name)).expect("read");
        assert_eq!(bytes, b"png-bytes");
    }

    #[tokio::test]
    async fn stored_file_is_served_with_inferred_content_type() {
        let (_dir, _store, server) = test_server(DEFAULT_MAX_FILE_BYTES).await;
        let form = MultipartForm::new()
            .add_part("file", Part::bytes(b"{\"a\":1}".to_vec()).file_name("data.json"));
        let body: UploadResponse = server.post("/upload/docs").multipart(form).await.json();
        let path = body.files_info.expect("filesInfo")[0].path.clone();

        let response = server.get(&path).await;
        response.assert_status_ok();
        assert_eq!(response.as_bytes().as_ref(), b"{\"a\":1}");
        let content_type = response.header(header::CONTENT_TYPE);
        assert!(content_type.to_str().expect("ascii").starts_with("application/json"));

        server
            .get("/docs/missing.json")
            .expect_failure()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn oversized_file_is_rejected_once_without_leftovers() {
        let (_dir, store, server) = test_server(16).await;
        let form = MultipartForm::new()
            .add_part("file", Part::bytes(b"small".to_vec()).file_name("first.txt"))
            .add_part("file", Part::bytes(vec![7u8; 64]).file_name("big.bin"));

        let response = server.post("/upload/phones").multipart(form).await;
        response.assert_status_ok();
        // the failure envelope is the whole body: no second reply with filesInfo follows it
        assert_eq!(
            response.json::<serde_json::Value>(),
            json!({ "code": 4000, "success": false, "messages": "upload failed" })
        );
        assert_eq!(files_in(&store, "phones"), 0);
    }

    #[tokio::test]
    async fn non_multipart_body_gets_failure_envelope() {
        let (_dir, store, server) = test_server(DEFAULT_MAX_FILE_BYTES).await;

        let response = server.post("/upload/phones").text("plain").await;
        response.assert_status_ok();
        assert_eq!(response.json::<UploadResponse>(), UploadResponse::failed());
        assert!(!store.root().join("phones").exists());
    }

    #[tokio::test]
    async fn route_names_cannot_be_categories() {
        let (_dir, store, server) = test_server(DEFAULT_MAX_FILE_BYTES).await;

        for category in ["upload", "health"] {
            let form = MultipartForm::new()
                .add_part("file", Part::bytes(b"a".to_vec()).file_name("a.txt"));
            let body: UploadResponse = server
                .post(&format!("/upload/{category}"))
                .multipart(form)
                .await
                .json();
            assert_eq!(body, UploadResponse::failed());
            assert!(!store.root().join(category).exists());
        }
    }

    #[tokio::test]
    async fn request_without_file_part_fails() {
        let (_dir, store, server) = test_server(DEFAULT_MAX_FILE_BYTES).await;
        let form = MultipartForm::new()
            .add_text("file", "no filename here")
            .add_part("avatar", Part::bytes(b"x".to_vec()).file_name("a.png"));

        let body: UploadResponse = server.post("/upload/phones").multipart(form).await.json();
        assert_eq!(body, UploadResponse::failed());
        assert_eq!(files_in(&store, "phones"), 0);
    }

    #[tokio::test]
    async fn uploads_stay_inside_their_category() {
        let (_dir, store, server) = test_server(DEFAULT_MAX_FILE_BYTES).await;
        std::fs::create_dir(store.root().join("tablets")).expect("mkdir");
        std::fs::write(store.root().join("tablets").join("keep.txt"), b"keep").expect("seed");

        let form = MultipartForm::new()
            .add_part("file", Part::bytes(b"a".to_vec()).file_name("a.txt"));
        let body: UploadResponse = server.post("/upload/phones").multipart(form).await.json();
        assert!(body.success);

        assert_eq!(files_in(&store, "tablets"), 1);
        assert_eq!(
            std::fs::read(store.root().join("tablets").join("keep.txt")).expect("read"),
            b"keep"
        );
    }

    #[tokio::test]
    async fn delete_removes_a_stored_file() {
        let (_dir, store, server) = test_server(DEFAULT_MAX_FILE_BYTES).await;
        let form = MultipartForm::new()
            .add_part("file", Part::bytes(b"a".to_vec()).file_name("a.txt"));
        let body: UploadResponse = server.post("/upload/phones").multipart(form).await.json();
        let path = body.files_info.expect("filesInfo")[0].path.clone();

        let ack: Ack = server.delete(&format!("/upload{path}")).await.json();
        assert_eq!(ack, Ack::deleted());
        assert_eq!(files_in(&store, "phones"), 0);

        let ack: Ack = server.delete(&format!("/upload{path}")).await.json();
        assert_eq!(ack, Ack::delete_failed());
    }
}
