use std::io::Cursor;

use async_trait::async_trait;
use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::blocking::run_blocking_extraction;

const COLUMN_GAP: &str = "  ";

/// Renders the first worksheet of an xlsx/xls/ods workbook as an aligned table.
#[derive(Default)]
pub struct SpreadsheetAdapter;

impl SpreadsheetAdapter {
    pub fn new() -> Self {
        Self
    }

    fn read_first_sheet(data: Vec<u8>) -> Result<String, FileLoaderError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to open workbook: {e}"))
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| {
                FileLoaderError::ExtractionFailed("workbook has no worksheets".to_string())
            })?
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to read sheet: {e}")))?;

        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(render_cell).collect())
            .collect();

        tracing::debug!(rows = rows.len(), "Worksheet read");

        Ok(render_aligned_table(&rows))
    }
}

fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Right-aligns every column to its widest cell. The first row is the header;
/// rows carry no index labels.
pub fn render_aligned_table(rows: &[Vec<String>]) -> String {
    let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; column_count];
    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(column, &width)| {
                    let cell = row.get(column).map(String::as_str).unwrap_or("");
                    format!("{cell:>width$}")
                })
                .collect::<Vec<_>>()
                .join(COLUMN_GAP)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl FileLoader for SpreadsheetAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(filename = %document.filename, bytes = document.size_bytes)
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Spreadsheet {
            return Err(FileLoaderError::UnsupportedContentType(
                document.mime_type.clone(),
            ));
        }

        let data = data.to_vec();
        run_blocking_extraction(move || Self::read_first_sheet(data)).await
    }
}
