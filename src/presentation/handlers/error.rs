use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::AttachmentSourceError;
use crate::application::services::AnalysisError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Client-facing failure. Messages carry a stable prefix and never include
/// upstream response bodies.
#[derive(Debug)]
pub enum ApiError {
    Forbidden,
    BadRequest(String),
    AttachmentFetch(String),
    NotFound(String),
    UnsupportedMediaType(String),
    Unprocessable(String),
    BadGateway(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::BadRequest(_) | Self::AttachmentFetch(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Forbidden => "Unauthorized. Invalid internal access code.".to_string(),
            Self::AttachmentFetch(detail) => format!("Attachment fetch failed: {detail}"),
            Self::BadRequest(message)
            | Self::NotFound(message)
            | Self::UnsupportedMediaType(message)
            | Self::Unprocessable(message)
            | Self::BadGateway(message)
            | Self::Internal(message) => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.message(),
            }),
        )
            .into_response()
    }
}

/// Names the failure class without echoing URLs or bodies from the storage service.
pub fn storage_error_summary(error: &AttachmentSourceError) -> String {
    match error {
        AttachmentSourceError::RequestFailed(_) => "storage service unreachable".to_string(),
        AttachmentSourceError::UpstreamStatus { status, .. } => {
            format!("storage service returned HTTP {status}")
        }
        AttachmentSourceError::InvalidResponse(_) => {
            "unexpected response from storage service".to_string()
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::InvalidRequest(message) => Self::BadRequest(message),
            AnalysisError::AttachmentFetch(e) => Self::AttachmentFetch(storage_error_summary(&e)),
            AnalysisError::MissingDownloadUrl => {
                Self::NotFound("Attachment object missing URL.".to_string())
            }
            AnalysisError::Archive(e) => Self::AttachmentFetch(e.to_string()),
            AnalysisError::UnsupportedMediaType(mime) => {
                Self::UnsupportedMediaType(format!("Unsupported file type: {mime}"))
            }
            AnalysisError::Parsing(e) => {
                Self::Unprocessable(format!("Document parsing failed: {e}"))
            }
            AnalysisError::EmptyText => Self::Unprocessable("Failed to extract text.".to_string()),
            AnalysisError::Completion(e) => Self::BadGateway(format!("OpenAI error: {e}")),
        }
    }
}
