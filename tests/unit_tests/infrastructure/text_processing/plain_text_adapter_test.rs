use docrelay::application::ports::{FileLoader, FileLoaderError};
use docrelay::domain::{ContentType, Document};
use docrelay::infrastructure::text_processing::PlainTextAdapter;

fn text_document(data: &[u8]) -> Document {
    Document::new(
        "notes.txt".to_string(),
        "text/plain".to_string(),
        ContentType::Text,
        data.len() as u64,
    )
}

#[tokio::test]
async fn given_valid_utf8_bytes_when_extracting_then_returns_string() {
    let adapter = PlainTextAdapter;
    let data = "Grüße aus Oslo".as_bytes();

    let result = adapter.extract_text(data, &text_document(data)).await;

    assert_eq!(result.unwrap(), "Grüße aus Oslo");
}

#[tokio::test]
async fn given_invalid_utf8_bytes_when_extracting_then_returns_extraction_failed() {
    let adapter = PlainTextAdapter;
    let invalid: &[u8] = &[0x48, 0x69, 0xC3, 0x28];

    let result = adapter.extract_text(invalid, &text_document(invalid)).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_non_text_content_type_when_extracting_then_returns_unsupported() {
    let adapter = PlainTextAdapter;
    let data = b"%PDF-1.4";
    let document = Document::new(
        "file.pdf".to_string(),
        "application/pdf".to_string(),
        ContentType::Pdf,
        data.len() as u64,
    );

    let result = adapter.extract_text(data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
