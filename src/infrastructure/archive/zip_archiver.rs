use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::application::ports::{ArchiveError, Archiver};

/// Single-entry, deflate-compressed zip archives built in memory.
#[derive(Default)]
pub struct ZipArchiver;

impl ZipArchiver {
    pub fn new() -> Self {
        Self
    }
}

impl Archiver for ZipArchiver {
    fn archive(&self, entry_name: &str, data: &[u8]) -> Result<Vec<u8>, ArchiveError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .large_file(data.len() as u64 >= u32::MAX as u64);

        writer
            .start_file(entry_name, options)
            .map_err(|e| ArchiveError::WriteFailed(e.to_string()))?;
        writer
            .write_all(data)
            .map_err(|e| ArchiveError::WriteFailed(e.to_string()))?;

        let cursor = writer
            .finish()
            .map_err(|e| ArchiveError::WriteFailed(e.to_string()))?;

        Ok(cursor.into_inner())
    }
}
