use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AttachmentSource, FileLoader, LlmClient};
use crate::domain::TokenUsage;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub response: String,
    pub usage: TokenUsage,
}

#[tracing::instrument(skip(state, payload))]
pub async fn analyze_handler<S, F, L>(
    State(state): State<AppState<S, F, L>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> impl IntoResponse
where
    S: AttachmentSource + 'static,
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Malformed analyze request");
            return ApiError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
                .into_response();
        }
    };

    let content = request.content.unwrap_or_default();
    let query = request.query.unwrap_or_default();

    tracing::debug!(
        query = %sanitize_prompt(&query),
        content_chars = content.chars().count(),
        "Processing analyze request"
    );

    match state.analysis_service.analyze_content(&content, &query).await {
        Ok(completion) => {
            tracing::info!(total_tokens = completion.usage.total_tokens, "Analysis successful");
            (
                StatusCode::OK,
                Json(AnalyzeResponse {
                    response: completion.text,
                    usage: completion.usage,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Analysis failed");
            ApiError::from(e).into_response()
        }
    }
}
