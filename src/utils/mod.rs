use url::Url;

/// Return the first `max_chars` characters of `text` if it is longer than that.
///
/// Counts Unicode scalar values, so the cut never lands inside a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> Option<&str> {
    text.char_indices()
        .nth(max_chars)
        .map(|(byte_index, _)| &text[..byte_index])
}

/// Format a service cost for display
pub fn format_cost(cost: f64) -> String {
    format!("${:.4}", cost)
}

/// Validate that an endpoint is an HTTP(S) URL and return its normalized form
pub fn validate_endpoint(endpoint: &str) -> anyhow::Result<String> {
    let parsed = Url::parse(endpoint)
        .map_err(|_| anyhow::anyhow!("Invalid URL format: {}", endpoint))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("URL must use HTTP or HTTPS protocol");
    }

    Ok(parsed.to_string())
}
