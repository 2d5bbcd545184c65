use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{AttachmentMetadata, AttachmentRef, DownloadProbe};

/// Read access to attachments held by the document-collaboration service.
#[async_trait]
pub trait AttachmentSource: Send + Sync {
    async fn fetch_metadata(
        &self,
        attachment: &AttachmentRef,
    ) -> Result<AttachmentMetadata, AttachmentSourceError>;

    async fn download(&self, url: &str) -> Result<Bytes, AttachmentSourceError>;

    /// Hits the service's download endpoint without following redirects.
    async fn probe_download(
        &self,
        attachment_id: &str,
    ) -> Result<DownloadProbe, AttachmentSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AttachmentSourceError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("storage service returned HTTP {status}")]
    UpstreamStatus { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
