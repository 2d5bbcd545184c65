mod archiver;
mod attachment_source;
mod file_loader;
mod llm_client;

pub use archiver::{ArchiveError, Archiver};
pub use attachment_source::{AttachmentSource, AttachmentSourceError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
