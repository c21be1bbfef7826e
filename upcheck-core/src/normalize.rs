//! URL normalization for user-supplied input.

/// Normalize raw user input into something resembling a URL.
///
/// Prepends `http://` when the input carries neither an `http://` nor an
/// `https://` prefix (case-sensitive check). Input that already has a
/// recognized scheme passes through unchanged. The result is not guaranteed
/// to parse as a URL; that is decided when the request is issued.
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_http_scheme() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
        assert_eq!(normalize_url("example.com/path?q=1"), "http://example.com/path?q=1");
    }

    #[test]
    fn test_prefixed_input_passes_through() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com/a"), "https://example.com/a");
    }

    #[test]
    fn test_prefix_check_is_case_sensitive() {
        assert_eq!(normalize_url("HTTP://example.com"), "http://HTTP://example.com");
        assert_eq!(normalize_url("Https://example.com"), "http://Https://example.com");
    }

    #[test]
    fn test_other_schemes_are_not_recognized() {
        assert_eq!(normalize_url("ftp://example.com"), "http://ftp://example.com");
    }
}
