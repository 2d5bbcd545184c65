mod analysis;
mod attachment;
mod content_type;
mod document;
mod prompt;

pub use analysis::{AttachmentAnalysis, Completion, CompressionNotice, TokenUsage};
pub use attachment::{AttachmentMetadata, AttachmentRef, DownloadProbe};
pub use content_type::ContentType;
pub use document::Document;
pub use prompt::{
    ANALYST_SYSTEM_PROMPT, ATTACHMENT_INSTRUCTION, MAX_PROMPT_CHARS, MessageRole, Prompt,
    PromptMessage, truncate_chars,
};
