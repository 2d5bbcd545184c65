use std::time::Duration;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::json;

use docrelay::application::ports::{AttachmentSource, AttachmentSourceError};
use docrelay::domain::AttachmentRef;
use docrelay::infrastructure::storage::SmartsheetClient;

use crate::helpers::{bind_local, serve, unreachable_base_url};

const API_KEY: &str = "ss-test-key";
const FILE_BODY: &[u8] = b"attachment body bytes";

fn is_authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some("Bearer ss-test-key")
}

async fn attachment_metadata(
    State(base_url): State<String>,
    headers: HeaderMap,
    Path((sheet_id, attachment_id)): Path<(String, String)>,
) -> impl IntoResponse {
    if !is_authorized(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            axum::Json(json!({"errorCode": 1002, "message": "Your Access Token is invalid."})),
        )
            .into_response();
    }
    if sheet_id == "missing" {
        return (
            StatusCode::NOT_FOUND,
            axum::Json(json!({"errorCode": 1006, "message": "Not Found"})),
        )
            .into_response();
    }

    axum::Json(json!({
        "id": attachment_id.parse::<u64>().unwrap_or(0),
        "name": "budget.xlsx",
        "mimeType": "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "sizeInKb": 18,
        "url": format!("{base_url}/files/{attachment_id}"),
        "urlExpiresInMillis": 120000,
    }))
    .into_response()
}

async fn signed_file(headers: HeaderMap, Path(attachment_id): Path<String>) -> impl IntoResponse {
    if headers.contains_key(header::AUTHORIZATION) {
        return (StatusCode::BAD_REQUEST, "unexpected credentials").into_response();
    }
    if attachment_id == "expired" {
        return (StatusCode::FORBIDDEN, "Request has expired").into_response();
    }
    FILE_BODY.to_vec().into_response()
}

async fn direct_download(headers: HeaderMap, Path(_id): Path<String>) -> impl IntoResponse {
    if !is_authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    (
        StatusCode::FOUND,
        [(header::LOCATION, "https://files.example.test/signed/xyz")],
        "R".repeat(300),
    )
        .into_response()
}

async fn start_storage() -> String {
    let (listener, base_url) = bind_local().await;
    let router = Router::new()
        .route(
            "/sheets/{sheet_id}/attachments/{attachment_id}",
            get(attachment_metadata),
        )
        .route("/files/{attachment_id}", get(signed_file))
        .route("/attachments/{attachment_id}/download", get(direct_download))
        .with_state(base_url.clone());
    serve(listener, router);
    base_url
}

fn client(base_url: &str, api_key: &str) -> SmartsheetClient {
    SmartsheetClient::new(
        base_url,
        api_key,
        Duration::from_secs(2),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn given_valid_key_when_fetching_metadata_then_maps_attachment_fields() {
    let base_url = start_storage().await;
    let client = client(&base_url, API_KEY);

    let metadata = client
        .fetch_metadata(&AttachmentRef::new("123", "456"))
        .await
        .unwrap();

    assert_eq!(metadata.name, "budget.xlsx");
    assert_eq!(
        metadata.mime_type,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(metadata.size_in_kb, Some(18));
    assert_eq!(
        metadata.download_url.as_deref(),
        Some(format!("{base_url}/files/456").as_str())
    );
}

#[tokio::test]
async fn given_invalid_key_when_fetching_metadata_then_returns_upstream_status() {
    let base_url = start_storage().await;
    let client = client(&base_url, "wrong-key");

    let result = client.fetch_metadata(&AttachmentRef::new("123", "456")).await;

    match result {
        Err(AttachmentSourceError::UpstreamStatus { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("1002"));
        }
        other => panic!("expected upstream status error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_unknown_sheet_when_fetching_metadata_then_returns_404_status() {
    let base_url = start_storage().await;
    let client = client(&base_url, API_KEY);

    let result = client
        .fetch_metadata(&AttachmentRef::new("missing", "456"))
        .await;

    assert!(matches!(
        result,
        Err(AttachmentSourceError::UpstreamStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn given_signed_url_when_downloading_then_returns_bytes_without_sending_credentials() {
    let base_url = start_storage().await;
    let client = client(&base_url, API_KEY);

    let data = client
        .download(&format!("{base_url}/files/456"))
        .await
        .unwrap();

    assert_eq!(data.as_ref(), FILE_BODY);
}

#[tokio::test]
async fn given_expired_signed_url_when_downloading_then_returns_upstream_status() {
    let base_url = start_storage().await;
    let client = client(&base_url, API_KEY);

    let result = client.download(&format!("{base_url}/files/expired")).await;

    assert!(matches!(
        result,
        Err(AttachmentSourceError::UpstreamStatus { status: 403, .. })
    ));
}

#[tokio::test]
async fn given_redirecting_download_when_probing_then_reports_redirect_without_following() {
    let base_url = start_storage().await;
    let client = client(&base_url, API_KEY);

    let probe = client.probe_download("456").await.unwrap();

    assert_eq!(probe.status_code, 302);
    assert_eq!(
        probe.headers.get("location").map(String::as_str),
        Some("https://files.example.test/signed/xyz")
    );
    assert_eq!(probe.text_snippet, "R".repeat(200));
}

#[tokio::test]
async fn given_unreachable_host_when_fetching_metadata_then_returns_request_failed() {
    let base_url = unreachable_base_url().await;
    let client = client(&base_url, API_KEY);

    let result = client.fetch_metadata(&AttachmentRef::new("123", "456")).await;

    assert!(matches!(result, Err(AttachmentSourceError::RequestFailed(_))));
}
