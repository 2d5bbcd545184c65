use async_trait::async_trait;

use crate::domain::Document;

/// Turns a fully buffered attachment into plain text.
///
/// Implementations reject documents whose [`ContentType`](crate::domain::ContentType)
/// they do not handle with [`FileLoaderError::UnsupportedContentType`], carrying the
/// declared MIME type.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("{0}")]
    ExtractionFailed(String),
    #[error("no text found in {0}")]
    NoTextFound(String),
}
