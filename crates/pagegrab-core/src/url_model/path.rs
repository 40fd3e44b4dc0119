//! Last-segment extraction from URL paths.

use url::Url;

/// Returns the last non-empty path segment of `url`.
///
/// The query string and fragment are never part of the result. Returns `None`
/// for root paths, `.`/`..` segments, and URLs without a hierarchical path.
pub fn last_path_segment(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(s: &str) -> Option<String> {
        last_path_segment(&Url::parse(s).unwrap())
    }

    #[test]
    fn normal() {
        assert_eq!(seg("https://example.com/a/b/app.js").as_deref(), Some("app.js"));
        assert_eq!(seg("https://example.com/logo").as_deref(), Some("logo"));
    }

    #[test]
    fn root_or_empty() {
        assert_eq!(seg("https://example.com/"), None);
        assert_eq!(seg("https://example.com"), None);
    }

    #[test]
    fn with_query() {
        assert_eq!(
            seg("https://example.com/img.png?token=abc").as_deref(),
            Some("img.png")
        );
    }

    #[test]
    fn opaque_url_has_no_segment() {
        assert_eq!(seg("data:image/png;base64,AAAA"), None);
    }
}
