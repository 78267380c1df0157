const MAX_VISIBLE_LENGTH: usize = 100;

/// Sanitizes transcript or prompt text for safe logging: trims, truncates to
/// a short preview, and redacts credential-looking patterns. Truncation cuts
/// on a character boundary, so multibyte text never panics.
pub fn sanitize_transcript(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let sanitized = match trimmed.char_indices().nth(MAX_VISIBLE_LENGTH) {
        Some((byte_offset, _)) => format!(
            "{}... ({} chars total)",
            &trimmed[..byte_offset],
            trimmed.chars().count()
        ),
        None => trimmed.to_string(),
    };

    redact_sensitive_patterns(&sanitized)
}

/// Redacts credential-bearing query parameter values in a caller-supplied
/// URL before it is logged. The path and non-sensitive parameters are left
/// intact.
pub fn redact_url(url: &str) -> String {
    match url.split_once('?') {
        None => url.to_string(),
        Some((base, query)) => {
            let redacted = query
                .split('&')
                .map(|pair| match pair.split_once('=') {
                    Some((key, _)) if is_sensitive_param(key) => format!("{}=[REDACTED]", key),
                    _ => pair.to_string(),
                })
                .collect::<Vec<_>>()
                .join("&");
            format!("{}?{}", base, redacted)
        }
    }
}

fn is_sensitive_param(key: &str) -> bool {
    matches!(
        key.to_ascii_lowercase().as_str(),
        "token"
            | "key"
            | "api_key"
            | "apikey"
            | "secret"
            | "password"
            | "signature"
            | "sig"
            | "x-amz-signature"
    )
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}
