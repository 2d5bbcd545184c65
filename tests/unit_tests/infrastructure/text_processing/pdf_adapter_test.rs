use docrelay::application::ports::{FileLoader, FileLoaderError};
use docrelay::domain::{ContentType, Document};
use docrelay::infrastructure::text_processing::PdfAdapter;

fn pdf_document(name: &str, data: &[u8]) -> Document {
    Document::new(
        name.to_string(),
        "application/pdf".to_string(),
        ContentType::Pdf,
        data.len() as u64,
    )
}

#[tokio::test]
async fn given_two_page_pdf_when_extracting_then_returns_text_of_both_pages_in_order() {
    let adapter = PdfAdapter::new();
    let pdf_bytes = include_bytes!("../../../fixtures/sample.pdf");

    let text = adapter
        .extract_text(pdf_bytes, &pdf_document("sample.pdf", pdf_bytes))
        .await
        .unwrap();

    let first = text.find("Quarterly revenue report").unwrap();
    let second = text.find("Second page summary").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let garbage = b"not a pdf at all";

    let result = adapter
        .extract_text(garbage, &pdf_document("corrupt.pdf", garbage))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_pdf_without_text_layer_when_extracting_then_returns_no_text_found() {
    let adapter = PdfAdapter::new();
    let pdf_bytes = include_bytes!("../../../fixtures/blank.pdf");

    let result = adapter
        .extract_text(pdf_bytes, &pdf_document("blank.pdf", pdf_bytes))
        .await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[tokio::test]
async fn given_non_pdf_content_type_when_extracting_then_returns_unsupported() {
    let adapter = PdfAdapter::new();
    let data = b"plain";
    let document = Document::new(
        "notes.txt".to_string(),
        "text/plain".to_string(),
        ContentType::Text,
        data.len() as u64,
    );

    let result = adapter.extract_text(data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
