use docrelay::domain::{
    ANALYST_SYSTEM_PROMPT, ATTACHMENT_INSTRUCTION, MAX_PROMPT_CHARS, MessageRole, Prompt,
    truncate_chars,
};

#[test]
fn given_text_shorter_than_limit_when_truncating_then_returns_unchanged() {
    assert_eq!(truncate_chars("hello", 10), "hello");
    assert_eq!(truncate_chars("", 10), "");
}

#[test]
fn given_text_at_boundary_when_truncating_then_keeps_exactly_limit() {
    let text = "x".repeat(MAX_PROMPT_CHARS + 1);
    assert_eq!(
        truncate_chars(&text, MAX_PROMPT_CHARS).len(),
        MAX_PROMPT_CHARS
    );
    let exact = "x".repeat(MAX_PROMPT_CHARS);
    assert_eq!(truncate_chars(&exact, MAX_PROMPT_CHARS), exact);
}

#[test]
fn given_multibyte_text_when_truncating_then_counts_characters_not_bytes() {
    let text = "日本語のテキスト";
    assert_eq!(truncate_chars(text, 3), "日本語");
}

#[test]
fn given_document_text_when_building_prompt_then_produces_system_and_user_messages() {
    let prompt = Prompt::for_document(ATTACHMENT_INSTRUCTION, "body text");

    let [system, user] = prompt.messages();
    assert_eq!(system.role, MessageRole::System);
    assert_eq!(system.content, ANALYST_SYSTEM_PROMPT);
    assert_eq!(user.role, MessageRole::User);
    assert_eq!(user.content, "Analyze this document:\n\nbody text");
}

#[test]
fn given_oversized_text_when_building_prompt_then_user_message_carries_truncated_text() {
    let text = format!("{}{}", "a".repeat(MAX_PROMPT_CHARS), "overflow");
    let prompt = Prompt::for_document("Summarize", &text);

    assert_eq!(
        prompt.user.content,
        format!("Summarize\n\n{}", "a".repeat(MAX_PROMPT_CHARS))
    );
}

#[test]
fn given_message_roles_when_rendered_then_use_wire_names() {
    assert_eq!(MessageRole::System.as_str(), "system");
    assert_eq!(MessageRole::User.to_string(), "user");
}
