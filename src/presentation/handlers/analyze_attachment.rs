use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AttachmentSource, FileLoader, LlmClient};
use crate::domain::{AttachmentAnalysis, AttachmentRef};
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Serialize)]
pub struct AttachmentAnalysisResponse {
    pub analysis: String,
}

#[derive(Serialize)]
pub struct CompressionNoticeResponse {
    pub note: String,
    pub filename: String,
}

#[tracing::instrument(skip(state))]
pub async fn analyze_attachment_handler<S, F, L>(
    State(state): State<AppState<S, F, L>>,
    Path((sheet_id, attachment_id)): Path<(String, String)>,
) -> impl IntoResponse
where
    S: AttachmentSource + 'static,
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let attachment = AttachmentRef::new(sheet_id, attachment_id);

    match state.analysis_service.analyze_attachment(&attachment).await {
        Ok(AttachmentAnalysis::Analyzed(completion)) => {
            tracing::info!(
                attachment = %attachment,
                total_tokens = completion.usage.total_tokens,
                "Attachment analysis successful"
            );
            (
                StatusCode::OK,
                Json(AttachmentAnalysisResponse {
                    analysis: completion.text,
                }),
            )
                .into_response()
        }
        Ok(AttachmentAnalysis::Compressed(notice)) => (
            StatusCode::OK,
            Json(CompressionNoticeResponse {
                note: "File was compressed due to size.".to_string(),
                filename: notice.filename,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(attachment = %attachment, error = ?e, "Attachment analysis failed");
            ApiError::from(e).into_response()
        }
    }
}
