//! URL modeling: target validation, base URL derivation and asset filenames.

mod path;
mod sanitize;

pub use path::last_path_segment;
pub use sanitize::sanitize_filename;

use crate::error::RunError;
use url::Url;

/// Filename used when an asset URL has no usable path segment.
const DEFAULT_FILENAME: &str = "asset";

/// Parses the user-supplied target into a URL with a scheme and host.
///
/// Surrounding whitespace (e.g. the newline from an interactive prompt) is ignored.
pub fn parse_target(input: &str) -> Result<Url, RunError> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|source| RunError::InvalidUrl {
        input: trimmed.to_string(),
        source,
    })?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(RunError::MissingHost {
            input: trimmed.to_string(),
        }),
    }
}

/// Scheme + authority of `target` with the path reset to `/`.
///
/// Relative asset references are resolved against this, not against the page path:
/// `http://ex.com/blog/post.html` yields `http://ex.com/`.
pub fn base_url(target: &Url) -> Url {
    let mut base = target.clone();
    base.set_path("/");
    base.set_query(None);
    base.set_fragment(None);
    base
}

/// Local filename for an asset: the last path segment, never the query string.
///
/// # Examples
///
/// - `http://ex.com/static/img.png?v=2` → `"img.png"`
/// - `http://ex.com/` → `"asset"`
pub fn asset_filename(url: &Url) -> String {
    let sanitized = last_path_segment(url)
        .map(|s| sanitize_filename(&s))
        .unwrap_or_default();
    if sanitized.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
