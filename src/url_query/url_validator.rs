use anyhow::{bail, Context, Result};
use tracing::{debug, error};
use url::Url;

// Constants for validation
const MAX_URL_LENGTH: usize = 2048; // Maximum allowable URL length

/// Builds the structured URL the lookups read from
///
/// Rejects empty and over-long input before handing the string to the
/// `url` crate. Any scheme the `url` crate accepts is allowed.
pub fn parse_structured_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();

    if raw.is_empty() {
        error!("Received empty URL");
        bail!("URL cannot be empty");
    }

    if raw.len() > MAX_URL_LENGTH {
        error!("URL exceeds maximum length: {} > {}", raw.len(), MAX_URL_LENGTH);
        bail!("URL exceeds maximum length of {} characters", MAX_URL_LENGTH);
    }

    let url = Url::parse(raw).with_context(|| format!("Failed to parse URL '{}'", raw))?;
    debug!("Parsed URL with query: {:?}", url.query());

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url() {
        let result = parse_structured_url("   ");
        assert!(result.unwrap_err().to_string().contains("URL cannot be empty"));
    }

    #[test]
    fn test_url_too_long() {
        let long = format!("https://example.com/?q={}", "a".repeat(MAX_URL_LENGTH));
        let result = parse_structured_url(&long);
        assert!(result.unwrap_err().to_string().contains("maximum length"));
    }

    #[test]
    fn test_url_without_scheme() {
        let result = parse_structured_url("example.com/?a=1");
        assert!(result.unwrap_err().to_string().contains("Failed to parse URL"));
    }

    #[test]
    fn test_custom_scheme_keeps_query() {
        let url = parse_structured_url("myapp://callback?code=abc").unwrap();
        assert_eq!(url.query(), Some("code=abc"));
    }
}
