//! URL and input validation utilities

use anyhow::{anyhow, Result};
use url::Url;

/// Parse an absolute http(s) URL
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| anyhow!("Invalid URL format: {}", e))?;
    if !is_http_scheme(&parsed) {
        return Err(anyhow!("Unsupported URL scheme: {}", parsed.scheme()));
    }
    Ok(parsed)
}

fn is_http_scheme(url: &Url) -> bool {
    let scheme = url.scheme();
    scheme == "http" || scheme == "https"
}

/// Trim whitespace and surrounding angle brackets/quotes from pasted input
pub fn sanitize_pasted_url(input: &str) -> &str {
    input
        .trim()
        .trim_matches(|c| matches!(c, '<' | '>' | '"' | '\''))
        .trim()
}
