//! Gateway in front of real storage and metadata services on loopback ports.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::Router;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use erpstore_contract::{Ack, FindResponse, ResultCode, UploadResponse};
use erpstore_files::{DiskStore, DEFAULT_MAX_FILE_BYTES};
use erpstore_gateway::{build_router, AppState};
use erpstore_metadata::{MetadataConfig, MetadataHandle};
use erpstore_upstream::{HttpFileServer, HttpMetadataService};
use serde_json::{json, Value};

struct Stack {
    _dir: tempfile::TempDir,
    storage_root: PathBuf,
    gateway: TestServer,
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

async fn stack_with_metadata_at(sqlite_path: impl FnOnce(&Path) -> PathBuf) -> Stack {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage_root = dir.path().join("storage");

    let store = DiskStore::open(&storage_root, DEFAULT_MAX_FILE_BYTES)
        .await
        .expect("open store");
    let files_url = spawn(erpstore_files::build_router(store, 32 * 1024 * 1024)).await;

    let handle = MetadataHandle::open(MetadataConfig {
        sqlite_path: sqlite_path(dir.path()).to_str().expect("utf-8").to_string(),
        max_connections: 2,
        reconnect_interval: Duration::from_secs(3600),
    })
    .await;
    let metadata_url = spawn(erpstore_metadata::build_router(handle)).await;

    let state = AppState::new(
        Arc::new(HttpFileServer::new(&files_url).expect("file server client")),
        Arc::new(HttpMetadataService::new(&metadata_url).expect("metadata client")),
    );
    let gateway = TestServer::new(build_router(state)).expect("gateway");

    Stack {
        _dir: dir,
        storage_root,
        gateway,
    }
}

async fn stack() -> Stack {
    stack_with_metadata_at(|root| root.join("metadata.db")).await
}

fn photo(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

fn form_with(name: &str, bytes: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(bytes).file_name(name).mime_type("image/png"),
    )
}

fn stored_files(root: &Path, category: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = match std::fs::read_dir(root.join(category)) {
        Ok(entries) => entries
            .map(|entry| entry.expect("dir entry").path())
            .collect(),
        Err(_) => Vec::new(),
    };
    files.sort();
    files
}

async fn find(stack: &Stack, category: &str) -> FindResponse {
    let response = stack.gateway.post(&format!("/{category}/find")).await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn insert_find_and_read_back() {
    let stack = stack().await;
    let original = photo(500 * 1024);

    // scenario A
    let response = stack
        .gateway
        .post("/phones/insert")
        .multipart(form_with("photo.png", original.clone()))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "code": 9000, "messages": "insert succeeded" })
    );
    let on_disk = stored_files(&stack.storage_root, "phones");
    assert_eq!(on_disk.len(), 1);
    assert_eq!(std::fs::read(&on_disk[0]).expect("read"), original);

    // scenario B
    let found = find(&stack, "phones").await;
    assert_eq!(found.code, ResultCode::SUCCESS);
    assert_eq!(found.messages, "query succeeded");
    let records = found.result.expect("result");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].original_filename, "photo.png");
    let (category, name) = records[0].segments().expect("segments");
    assert_eq!(category, "phones");
    assert!(name.ends_with(".png"));

    // scenario C
    let response = stack.gateway.get(&format!("/phones/insert/{name}")).await;
    response.assert_status_ok();
    assert_eq!(response.header(header::CONTENT_TYPE), "image/png");
    assert_eq!(response.as_bytes().as_ref(), original.as_slice());

    let response = stack.gateway.get(&format!("/storage/phones/{name}")).await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), original.as_slice());
}

#[tokio::test]
async fn oversized_upload_is_rejected_without_leftovers() {
    let stack = stack().await;

    let response = stack
        .gateway
        .post("/phones/insert")
        .multipart(form_with("huge.png", photo(3 * 1024 * 1024)))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<UploadResponse>(), UploadResponse::failed());

    assert!(stored_files(&stack.storage_root, "phones").is_empty());
    assert_eq!(find(&stack, "phones").await.result, Some(Vec::new()));
}

#[tokio::test]
async fn uploads_do_not_touch_other_categories() {
    let stack = stack().await;

    for category in ["tablets", "phones"] {
        stack
            .gateway
            .post(&format!("/{category}/insert"))
            .multipart(form_with("a.png", photo(64)))
            .await
            .assert_status_ok();
    }
    let tablets_before = stored_files(&stack.storage_root, "tablets");

    stack
        .gateway
        .post("/phones/insert")
        .multipart(form_with("b.png", photo(128)))
        .await
        .assert_status_ok();

    assert_eq!(stored_files(&stack.storage_root, "tablets"), tablets_before);
    assert_eq!(stored_files(&stack.storage_root, "phones").len(), 2);
}

#[tokio::test]
async fn find_returns_every_insert_including_duplicates() {
    let stack = stack().await;

    for _ in 0..2 {
        let ack: Ack = stack
            .gateway
            .post("/phones/insert")
            .multipart(form_with("same.png", photo(32)))
            .await
            .json();
        assert_eq!(ack, Ack::inserted());
    }

    let records = find(&stack, "phones").await.result.expect("result");
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.original_filename == "same.png"));
}

#[tokio::test]
async fn unknown_operation_has_no_side_effects() {
    let stack = stack().await;

    let response = stack
        .gateway
        .post("/anycat/bogus")
        .multipart(form_with("a.png", photo(16)))
        .await;
    assert_eq!(
        response.json::<Value>(),
        json!({ "code": 404, "messages": "not found" })
    );
    assert!(!stack.storage_root.join("anycat").exists());
    assert_eq!(find(&stack, "anycat").await.result, Some(Vec::new()));
}

#[tokio::test]
async fn failed_metadata_insert_removes_the_stored_file() {
    let stack = stack_with_metadata_at(|root| root.join("missing").join("metadata.db")).await;

    let response = stack
        .gateway
        .post("/phones/insert")
        .multipart(form_with("photo.png", photo(256)))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Ack>(), Ack::insert_failed());
    assert!(stored_files(&stack.storage_root, "phones").is_empty());
}

#[tokio::test]
async fn reading_an_unknown_file_passes_the_status_through() {
    let stack = stack().await;

    stack
        .gateway
        .get("/phones/insert/nothing-here.png")
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
