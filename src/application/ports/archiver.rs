/// Packs a single named buffer into an archive.
pub trait Archiver: Send + Sync {
    fn archive(&self, entry_name: &str, data: &[u8]) -> Result<Vec<u8>, ArchiveError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("archive write failed: {0}")]
    WriteFailed(String),
    #[error("archive task failed: {0}")]
    TaskFailed(String),
}
