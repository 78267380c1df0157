use narvik::infrastructure::observability::{redact_url, sanitize_transcript};

#[test]
fn given_empty_transcript_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_transcript(""), "[EMPTY]");
    assert_eq!(sanitize_transcript("   "), "[EMPTY]");
}

#[test]
fn given_short_transcript_when_sanitizing_then_returns_unchanged() {
    let text = "What is the weather today?";
    assert_eq!(sanitize_transcript(text), text);
}

#[test]
fn given_long_transcript_when_sanitizing_then_truncates_with_length() {
    let text = "a".repeat(150);
    let result = sanitize_transcript(&text);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_transcript_at_limit_when_sanitizing_then_returns_unchanged() {
    let text = "a".repeat(100);
    assert_eq!(sanitize_transcript(&text), text);
}

#[test]
fn given_multibyte_transcript_when_sanitizing_then_truncates_on_char_boundary() {
    let text = "é".repeat(150);
    let result = sanitize_transcript(&text);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"é".repeat(100)));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let text = "Authorization: Bearer sk-abc123xyz";
    let result = sanitize_transcript(text);
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_api_key_when_sanitizing_then_redacts_key() {
    let text = "Send request with api_key=secret123";
    let result = sanitize_transcript(text);
    assert!(result.contains("api_key=[REDACTED]"));
    assert!(!result.contains("secret123"));
}

#[test]
fn given_password_when_sanitizing_then_redacts_password() {
    let text = "Login with password=hunter2";
    let result = sanitize_transcript(text);
    assert!(result.contains("password=[REDACTED]"));
    assert!(!result.contains("hunter2"));
}

#[test]
fn given_whitespace_padded_transcript_when_sanitizing_then_trims() {
    let text = "  Hello world  ";
    assert_eq!(sanitize_transcript(text), "Hello world");
}

#[test]
fn given_url_without_query_when_redacting_then_returns_unchanged() {
    let url = "https://cdn.example.com/recordings/call.mp3";
    assert_eq!(redact_url(url), url);
}

#[test]
fn given_url_with_token_param_when_redacting_then_hides_value() {
    let url = "https://cdn.example.com/call.mp3?token=abc123&lang=en";
    let result = redact_url(url);
    assert_eq!(
        result,
        "https://cdn.example.com/call.mp3?token=[REDACTED]&lang=en"
    );
}

#[test]
fn given_url_with_signed_params_when_redacting_then_hides_each_value() {
    let url = "https://bucket.s3.amazonaws.com/audio.mp3?X-Amz-Signature=deadbeef&X-Amz-Date=20240101";
    let result = redact_url(url);
    assert!(result.contains("X-Amz-Signature=[REDACTED]"));
    assert!(!result.contains("deadbeef"));
    assert!(result.contains("X-Amz-Date=20240101"));
}

#[test]
fn given_url_with_valueless_param_when_redacting_then_leaves_it_alone() {
    let url = "https://cdn.example.com/call.mp3?download&key=shh";
    let result = redact_url(url);
    assert!(result.contains("download"));
    assert!(result.contains("key=[REDACTED]"));
    assert!(!result.contains("shh"));
}
