use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{ArchiveError, Archiver};
use crate::domain::CompressionNotice;

/// Attachments strictly larger than this are archived instead of analyzed.
pub const MAX_ATTACHMENT_BYTES: usize = 75 * 1024 * 1024;

pub enum SizeCheck {
    PassThrough(Bytes),
    Compressed(CompressionNotice),
}

pub struct SizeGuard {
    archiver: Arc<dyn Archiver>,
    threshold_bytes: usize,
}

impl SizeGuard {
    pub fn new(archiver: Arc<dyn Archiver>) -> Self {
        Self::with_threshold(archiver, MAX_ATTACHMENT_BYTES)
    }

    pub fn with_threshold(archiver: Arc<dyn Archiver>, threshold_bytes: usize) -> Self {
        Self {
            archiver,
            threshold_bytes,
        }
    }

    pub fn threshold_bytes(&self) -> usize {
        self.threshold_bytes
    }

    pub async fn inspect(&self, data: Bytes, filename: &str) -> Result<SizeCheck, ArchiveError> {
        if data.len() <= self.threshold_bytes {
            return Ok(SizeCheck::PassThrough(data));
        }

        let original_bytes = data.len();

        // The archive is built but has no destination yet; only its size leaves here.
        let archiver = Arc::clone(&self.archiver);
        let entry_name = filename.to_string();
        let archive = tokio::task::spawn_blocking(move || archiver.archive(&entry_name, &data))
            .await
            .map_err(|e| ArchiveError::TaskFailed(e.to_string()))??;

        let notice = CompressionNotice {
            filename: format!("{filename}.zip"),
            archive_size_bytes: archive.len() as u64,
        };

        tracing::warn!(
            filename = %filename,
            original_bytes,
            archive_bytes = notice.archive_size_bytes,
            threshold_bytes = self.threshold_bytes,
            "Attachment over size limit, archived and skipped extraction"
        );

        Ok(SizeCheck::Compressed(notice))
    }
}
