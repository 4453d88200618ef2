//! URL utilities shared by the link scanner and the API client.

/// Whether a candidate link target uses an http(s) scheme. The inline
/// scanner only recognizes `[text](url)` for such URLs; anything else stays
/// plain text.
pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Normalize a base URL by removing trailing slashes so endpoint joining
/// never produces double slashes.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Join a base URL and an endpoint path.
///
/// # Examples
///
/// ```
/// use fhevm_tutor::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("https://api.example.com/v1/", "chat/completions"),
///     "https://api.example.com/v1/chat/completions"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let endpoint = endpoint.trim_start_matches('/');
    format!("{normalized_base}/{endpoint}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_and_https_pass() {
        assert!(is_http_url("http://localhost:8545"));
        assert!(is_http_url("https://docs.zama.ai/fhevm"));
    }

    #[test]
    fn other_schemes_fail() {
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("javascript:alert(1)"));
        assert!(!is_http_url("docs.zama.ai"));
        assert!(!is_http_url(""));
    }

    #[test]
    fn base_url_normalization_strips_trailing_slashes() {
        assert_eq!(normalize_base_url("https://a/v1///"), "https://a/v1");
        assert_eq!(normalize_base_url("https://a/v1"), "https://a/v1");
    }

    #[test]
    fn endpoint_joining_never_doubles_slashes() {
        assert_eq!(
            construct_api_url("https://a/v1", "/chat/completions"),
            "https://a/v1/chat/completions"
        );
    }
}
