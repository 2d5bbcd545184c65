use serde::{Deserialize, Serialize};

/// Token counters reported by the completion API, passed through as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub usage: TokenUsage,
}

/// Terminal outcome of the attachment pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentAnalysis {
    Analyzed(Completion),
    Compressed(CompressionNotice),
}

/// Emitted instead of an analysis when the attachment exceeds the size limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionNotice {
    pub filename: String,
    pub archive_size_bytes: u64,
}
