//! Request URL normalization.

use percent_encoding::percent_decode_str;

/// Normalize a request URL for module routing.
///
/// Decodes percent escapes, strips the query string and fragment, turns
/// backslashes into slashes and collapses repeated slashes. The result
/// always starts with `/`.
///
/// # Example
/// ```ignore
/// normalize_url("/@id/virtual%3Ause-sound?t=1")  // "/@id/virtual:use-sound"
/// normalize_url("//base\\@id/virtual:use-sound") // "/base/@id/virtual:use-sound"
/// ```
pub fn normalize_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| path.to_string());

    let mut normalized = String::with_capacity(decoded.len() + 1);
    for segment in decoded.split(['/', '\\']).filter(|s| !s.is_empty()) {
        normalized.push('/');
        normalized.push_str(segment);
    }
    if normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain() {
        assert_eq!(
            normalize_url("/@id/virtual:use-sound"),
            "/@id/virtual:use-sound"
        );
    }

    #[test]
    fn test_normalize_percent_encoded() {
        assert_eq!(
            normalize_url("/@id/virtual%3Ause-sound-ids"),
            "/@id/virtual:use-sound-ids"
        );
        assert_eq!(normalize_url("/%40id/virtual:use-sound"), "/@id/virtual:use-sound");
    }

    #[test]
    fn test_normalize_strips_query_and_fragment() {
        assert_eq!(
            normalize_url("/@id/virtual:use-sound?v=abc"),
            "/@id/virtual:use-sound"
        );
        assert_eq!(
            normalize_url("/@id/virtual:use-sound#top"),
            "/@id/virtual:use-sound"
        );
    }

    #[test]
    fn test_normalize_slashes() {
        assert_eq!(
            normalize_url("//base\\\\@id//virtual:use-sound/"),
            "/base/@id/virtual:use-sound"
        );
        assert_eq!(normalize_url(""), "/");
        assert_eq!(normalize_url("///"), "/");
    }

    #[test]
    fn test_normalize_invalid_utf8_kept_raw() {
        assert_eq!(normalize_url("/%FF"), "/%FF");
    }
}
