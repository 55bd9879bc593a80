use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use erpstore_contract::{Ack, FindResponse, InsertRequest};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::handle::MetadataHandle;

pub fn build_router(handle: MetadataHandle) -> Router {
    Router::new()
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .route("/storageMap/insert", post(insert))
        .route("/storageMap/find", post(find))
        .layer(TraceLayer::new_for_http())
        .with_state(handle)
}

async fn health_live() -> impl IntoResponse {
    Json(json!({
        "status": "live",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

async fn health_ready(State(handle): State<MetadataHandle>) -> impl IntoResponse {
    let ready = match handle.repository().await {
        Some(repository) => repository.ping().await.is_ok(),
        None => false,
    };
    let payload = Json(json!({
        "status": if ready { "ready" } else { "degraded" },
        "timestamp": Utc::now().to_rfc3339()
    }));

    if ready {
        (StatusCode::OK, payload).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, payload).into_response()
    }
}

async fn insert(
    State(handle): State<MetadataHandle>,
    payload: Result<Json<InsertRequest>, JsonRejection>,
) -> Json<Ack> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "insert body rejected");
            return Json(Ack::insert_failed());
        }
    };

    if request.files_info.is_empty() {
        warn!("insert called without filesInfo");
        return Json(Ack::insert_failed());
    }

    let Some(repository) = handle.repository().await else {
        error!("insert failed: metadata store unavailable");
        return Json(Ack::insert_failed());
    };

    match repository.insert_files(&request.files_info).await {
        Ok(count) => {
            info!(count, "file records inserted");
            Json(Ack::inserted())
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "insert failed");
            Json(Ack::insert_failed())
        }
    }
}

async fn find(State(handle): State<MetadataHandle>) -> Json<FindResponse> {
    let Some(repository) = handle.repository().await else {
        error!("query failed: metadata store unavailable");
        return Json(FindResponse::failed());
    };

    match repository.list_files().await {
        Ok(records) => Json(FindResponse::found(records)),
        Err(err) => {
            error!(error = %format!("{err:#}"), "query failed");
            Json(FindResponse::failed())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::MetadataConfig;
    use axum_test::TestServer;
    use erpstore_contract::{FileRecord, ResultCode};
    use std::time::Duration;

    async fn server_at(path: std::path::PathBuf) -> TestServer {
        let handle = MetadataHandle::open(MetadataConfig {
            sqlite_path: path.to_str().expect("utf-8 path").to_string(),
            max_connections: 2,
            reconnect_interval: Duration::from_secs(3600),
        })
        .await;
        TestServer::new(build_router(handle)).expect("test server")
    }

    #[tokio::test]
    async fn insert_then_find_returns_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let server = server_at(dir.path().join("m.db")).await;
        let record = FileRecord::new("photo.png", "/phones/a.png");

        let response = server
            .post("/storageMap/insert")
            .json(&json!({ "filesInfo": [record.clone()] }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Ack>(), Ack::inserted());

        let response = server.post("/storageMap/find").await;
        response.assert_status_ok();
        let body: FindResponse = response.json();
        assert_eq!(body.code, ResultCode::SUCCESS);
        assert_eq!(body.messages, "query succeeded");
        assert_eq!(body.result, Some(vec![record]));
    }

    #[tokio::test]
    async fn find_on_empty_store_returns_empty_result() {
        let dir = tempfile::tempdir().expect("tempdir");
        let server = server_at(dir.path().join("m.db")).await;

        let body: FindResponse = server.post("/storageMap/find").await.json();
        assert_eq!(body, FindResponse::found(Vec::new()));
    }

    #[tokio::test]
    async fn empty_or_malformed_insert_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let server = server_at(dir.path().join("m.db")).await;

        let body: Ack = server
            .post("/storageMap/insert")
            .json(&json!({ "filesInfo": [] }))
            .await
            .json();
        assert_eq!(body, Ack::insert_failed());

        let body: Ack = server
            .post("/storageMap/insert")
            .text("not json")
            .await
            .json();
        assert_eq!(body, Ack::insert_failed());
    }

    #[tokio::test]
    async fn unavailable_store_degrades_to_failure_envelopes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let server = server_at(dir.path().join("missing").join("m.db")).await;

        let body: Ack = server
            .post("/storageMap/insert")
            .json(&json!({ "filesInfo": [FileRecord::new("a", "/c/a")] }))
            .await
            .json();
        assert_eq!(body, Ack::insert_failed());

        let body: FindResponse = server.post("/storageMap/find").await.json();
        assert_eq!(body, FindResponse::failed());

        server
            .get("/health/ready")
            .expect_failure()
            .await
            .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }
}
