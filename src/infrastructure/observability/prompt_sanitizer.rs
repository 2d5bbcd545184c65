use crate::domain::truncate_chars;

const MAX_VISIBLE_CHARS: usize = 100;

const SENSITIVE_PREFIXES: &[&str] = &[
    "Bearer ",
    "api_key=",
    "password=",
    "secret=",
    "token=",
    "sk-",
];

/// Shortens prompt text and masks credential-looking tokens before it is logged.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        format!(
            "{}... ({} chars total)",
            truncate_chars(trimmed, MAX_VISIBLE_CHARS),
            total_chars
        )
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&visible)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let mut result = text.to_string();

    for prefix in SENSITIVE_PREFIXES {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(prefix) {
            let value_start = search_from + found + prefix.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
                .map(|i| value_start + i)
                .unwrap_or(result.len());

            result.replace_range(value_start..value_end, "[REDACTED]");
            search_from = value_start + "[REDACTED]".len();
        }
    }

    result
}
