use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::{DocxAdapter, PdfAdapter, PlainTextAdapter, SpreadsheetAdapter};

pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// One adapter per supported format.
    pub fn with_default_adapters() -> Self {
        let pdf_adapter: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        let spreadsheet_adapter: Arc<dyn FileLoader> = Arc::new(SpreadsheetAdapter::new());
        let docx_adapter: Arc<dyn FileLoader> = Arc::new(DocxAdapter::new());

        Self::new(vec![
            (ContentType::Pdf, pdf_adapter),
            (ContentType::Text, text_adapter),
            (ContentType::Spreadsheet, spreadsheet_adapter),
            (ContentType::WordProcessing, docx_adapter),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.content_type).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(document.mime_type.clone())
        })?;

        adapter.extract_text(data, document).await
    }
}
