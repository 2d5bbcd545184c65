use std::sync::Arc;

use crate::application::ports::{
    ArchiveError, AttachmentSource, AttachmentSourceError, FileLoader, FileLoaderError, LlmClient,
    LlmClientError,
};
use crate::application::services::size_guard::{SizeCheck, SizeGuard};
use crate::domain::{
    ATTACHMENT_INSTRUCTION, AttachmentAnalysis, AttachmentRef, Completion, ContentType, Document,
    Prompt,
};

/// Runs the fetch → size guard → extract → complete pipeline.
pub struct AnalysisService<S, F, L>
where
    S: AttachmentSource,
    F: FileLoader,
    L: LlmClient,
{
    attachment_source: Arc<S>,
    file_loader: Arc<F>,
    llm_client: Arc<L>,
    size_guard: SizeGuard,
}

impl<S, F, L> AnalysisService<S, F, L>
where
    S: AttachmentSource,
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(
        attachment_source: Arc<S>,
        file_loader: Arc<F>,
        llm_client: Arc<L>,
        size_guard: SizeGuard,
    ) -> Self {
        Self {
            attachment_source,
            file_loader,
            llm_client,
            size_guard,
        }
    }

    pub async fn analyze_content(
        &self,
        content: &str,
        query: &str,
    ) -> Result<Completion, AnalysisError> {
        if content.is_empty() || query.is_empty() {
            return Err(AnalysisError::InvalidRequest(
                "Both 'content' and 'query' are required.".to_string(),
            ));
        }

        let prompt = Prompt::for_document(query, content);
        self.llm_client
            .complete(&prompt)
            .await
            .map_err(AnalysisError::Completion)
    }

    #[tracing::instrument(skip(self, attachment), fields(attachment = %attachment))]
    pub async fn analyze_attachment(
        &self,
        attachment: &AttachmentRef,
    ) -> Result<AttachmentAnalysis, AnalysisError> {
        let metadata = self
            .attachment_source
            .fetch_metadata(attachment)
            .await
            .map_err(AnalysisError::AttachmentFetch)?;

        let url = metadata
            .usable_download_url()
            .ok_or(AnalysisError::MissingDownloadUrl)?;

        let data = self
            .attachment_source
            .download(url)
            .await
            .map_err(AnalysisError::AttachmentFetch)?;

        tracing::debug!(
            filename = %metadata.name,
            mime_type = %metadata.mime_type,
            bytes = data.len(),
            "Attachment downloaded"
        );

        let data = match self.size_guard.inspect(data, &metadata.name).await? {
            SizeCheck::PassThrough(data) => data,
            SizeCheck::Compressed(notice) => return Ok(AttachmentAnalysis::Compressed(notice)),
        };

        let content_type = ContentType::from_mime(&metadata.mime_type)
            .ok_or_else(|| AnalysisError::UnsupportedMediaType(metadata.mime_type.clone()))?;

        let document = Document::new(
            metadata.name,
            metadata.mime_type,
            content_type,
            data.len() as u64,
        );

        let text = match self.file_loader.extract_text(&data, &document).await {
            Ok(text) => text,
            Err(FileLoaderError::NoTextFound(_)) => return Err(AnalysisError::EmptyText),
            Err(FileLoaderError::UnsupportedContentType(_)) => {
                return Err(AnalysisError::UnsupportedMediaType(document.mime_type));
            }
            Err(e) => return Err(AnalysisError::Parsing(e)),
        };

        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyText);
        }

        tracing::info!(
            content_type = content_type.as_str(),
            chars = text.chars().count(),
            "Text extracted from attachment"
        );

        let prompt = Prompt::for_document(ATTACHMENT_INSTRUCTION, &text);
        let completion = self
            .llm_client
            .complete(&prompt)
            .await
            .map_err(AnalysisError::Completion)?;

        Ok(AttachmentAnalysis::Analyzed(completion))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("attachment fetch: {0}")]
    AttachmentFetch(AttachmentSourceError),
    #[error("attachment has no download url")]
    MissingDownloadUrl,
    #[error("archive: {0}")]
    Archive(#[from] ArchiveError),
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("parsing: {0}")]
    Parsing(FileLoaderError),
    #[error("no text extracted")]
    EmptyText,
    #[error("completion: {0}")]
    Completion(LlmClientError),
}
