use std::collections::BTreeMap;
use std::fmt;

/// Identifies a file stored by the collaboration service: the owning container
/// (a sheet) plus the attachment itself. Both ids are opaque and unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttachmentRef {
    pub container_id: String,
    pub attachment_id: String,
}

impl AttachmentRef {
    pub fn new(container_id: impl Into<String>, attachment_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            attachment_id: attachment_id.into(),
        }
    }
}

impl fmt::Display for AttachmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.container_id, self.attachment_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentMetadata {
    pub name: String,
    pub mime_type: String,
    pub size_in_kb: Option<u64>,
    pub download_url: Option<String>,
}

impl AttachmentMetadata {
    /// Returns the download URL only when it is present and non-empty.
    pub fn usable_download_url(&self) -> Option<&str> {
        self.download_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Raw outcome of a direct, non-redirecting download attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadProbe {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub text_snippet: String,
}
