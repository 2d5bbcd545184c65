use std::fmt;

/// Upper bound on the characters of document text handed to the model.
pub const MAX_PROMPT_CHARS: usize = 8000;

pub const ANALYST_SYSTEM_PROMPT: &str = "You are a document analyst.";

pub const ATTACHMENT_INSTRUCTION: &str = "Analyze this document:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageRole {
    System,
    User,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessage {
    pub role: MessageRole,
    pub content: String,
}

/// The two-message exchange submitted for every analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: PromptMessage,
    pub user: PromptMessage,
}

impl Prompt {
    /// Wraps `text`, cut to [`MAX_PROMPT_CHARS`], behind `instruction`.
    pub fn for_document(instruction: &str, text: &str) -> Self {
        Self {
            system: PromptMessage {
                role: MessageRole::System,
                content: ANALYST_SYSTEM_PROMPT.to_string(),
            },
            user: PromptMessage {
                role: MessageRole::User,
                content: format!(
                    "{}\n\n{}",
                    instruction,
                    truncate_chars(text, MAX_PROMPT_CHARS)
                ),
            },
        }
    }

    pub fn messages(&self) -> [&PromptMessage; 2] {
        [&self.system, &self.user]
    }
}

/// Hard cut after `max_chars` Unicode scalar values. Never splits a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
