use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AttachmentSource, FileLoader, LlmClient};
use crate::domain::AttachmentRef;
use crate::presentation::state::AppState;

use super::error::{ApiError, storage_error_summary};

#[derive(Serialize)]
pub struct DownloadProbeResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub text_snippet: String,
}

#[derive(Serialize)]
pub struct AttachmentMetadataResponse {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub url: Option<String>,
    pub size: Option<u64>,
}

/// Manual troubleshooting: what the storage service answers on a direct download.
#[tracing::instrument(skip(state))]
pub async fn test_download_handler<S, F, L>(
    State(state): State<AppState<S, F, L>>,
    Path(attachment_id): Path<String>,
) -> impl IntoResponse
where
    S: AttachmentSource + 'static,
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    match state.attachment_source.probe_download(&attachment_id).await {
        Ok(probe) => (
            StatusCode::OK,
            Json(DownloadProbeResponse {
                status_code: probe.status_code,
                headers: probe.headers,
                text_snippet: probe.text_snippet,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Download probe failed");
            ApiError::BadGateway(storage_error_summary(&e)).into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn debug_attachment_handler<S, F, L>(
    State(state): State<AppState<S, F, L>>,
    Path((sheet_id, attachment_id)): Path<(String, String)>,
) -> impl IntoResponse
where
    S: AttachmentSource + 'static,
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let attachment = AttachmentRef::new(sheet_id, attachment_id);

    match state.attachment_source.fetch_metadata(&attachment).await {
        Ok(metadata) => (
            StatusCode::OK,
            Json(AttachmentMetadataResponse {
                name: metadata.name,
                mime_type: metadata.mime_type,
                url: metadata.download_url,
                size: metadata.size_in_kb,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(attachment = %attachment, error = ?e, "Metadata lookup failed");
            ApiError::Internal(storage_error_summary(&e)).into_response()
        }
    }
}
