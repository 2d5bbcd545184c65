use super::content_type::ContentType;

/// A downloaded attachment ready for text extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: String,
    pub mime_type: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(
        filename: String,
        mime_type: String,
        content_type: ContentType,
        size_bytes: u64,
    ) -> Self {
        Self {
            filename,
            mime_type,
            content_type,
            size_bytes,
        }
    }
}
