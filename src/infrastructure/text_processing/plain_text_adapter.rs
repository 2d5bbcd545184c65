use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// Decodes the whole buffer as UTF-8. No lossy fallback and no BOM handling.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                document.mime_type.clone(),
            ));
        }

        match std::str::from_utf8(data) {
            Ok(text) => Ok(text.to_owned()),
            Err(e) => {
                tracing::debug!(
                    filename = %document.filename,
                    valid_up_to = e.valid_up_to(),
                    "Rejected non UTF-8 text attachment"
                );
                Err(FileLoaderError::ExtractionFailed(format!(
                    "invalid UTF-8 at byte {}",
                    e.valid_up_to()
                )))
            }
        }
    }
}
