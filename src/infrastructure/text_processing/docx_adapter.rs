use async_trait::async_trait;
use docx_rs::{
    DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, read_docx,
};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::blocking::run_blocking_extraction;

/// Joins the trimmed text of every non-empty body paragraph with newlines.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn read_paragraphs(data: Vec<u8>) -> Result<String, FileLoaderError> {
        let docx = read_docx(&data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to parse document: {e}"))
        })?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        tracing::debug!(paragraphs = paragraphs.len(), "Word document read");

        Ok(paragraphs.join("\n"))
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    collect_children(&paragraph.children, &mut text);
    text
}

// Hyperlinks and tracked insertions wrap their runs one level down.
fn collect_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            ParagraphChild::Hyperlink(link) => collect_children(&link.children, text),
            ParagraphChild::Insert(insert) => {
                for insert_child in &insert.children {
                    if let InsertChild::Run(run) = insert_child {
                        push_run(run, text);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run(run: &Run, text: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(filename = %document.filename, bytes = document.size_bytes)
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::WordProcessing {
            return Err(FileLoaderError::UnsupportedContentType(
                document.mime_type.clone(),
            ));
        }

        let data = data.to_vec();
        run_blocking_extraction(move || Self::read_paragraphs(data)).await
    }
}
