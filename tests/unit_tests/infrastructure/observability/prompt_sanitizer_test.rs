use docrelay::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_unchanged() {
    let prompt = "Summarize the quarterly numbers";
    assert_eq!(sanitize_prompt(prompt), prompt);
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length() {
    let prompt = "a".repeat(150);
    let result = sanitize_prompt(&prompt);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_long_multibyte_prompt_when_sanitizing_then_cuts_on_char_boundary() {
    let prompt = "ü".repeat(120);
    let result = sanitize_prompt(&prompt);
    assert!(result.starts_with(&"ü".repeat(100)));
    assert!(result.contains("(120 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer abc123xyz");
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("abc123xyz"));
}

#[test]
fn given_openai_key_when_sanitizing_then_redacts_key() {
    let result = sanitize_prompt("use sk-proj-123456 for this");
    assert!(result.contains("sk-[REDACTED]"));
    assert!(!result.contains("proj-123456"));
}

#[test]
fn given_repeated_credentials_when_sanitizing_then_redacts_every_occurrence() {
    let result = sanitize_prompt("password=one and password=two");
    assert_eq!(result, "password=[REDACTED] and password=[REDACTED]");
}
