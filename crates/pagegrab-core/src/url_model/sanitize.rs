//! Filesystem-safe filename cleanup.

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Makes a URL path segment safe to use as a single filename.
///
/// Separators, NUL and control characters become `_`; leading and trailing
/// dots and whitespace are trimmed; the result is cut to 255 bytes on a char
/// boundary. Percent-escapes are kept as served.
pub fn sanitize_filename(segment: &str) -> String {
    let replaced: String = segment
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = replaced.trim_matches(|c: char| c == '.' || c.is_whitespace());

    let mut end = trimmed.len().min(NAME_MAX);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_separators() {
        assert_eq!(sanitize_filename("a\\b.css"), "a_b.css");
    }

    #[test]
    fn trims_dots_and_spaces() {
        assert_eq!(sanitize_filename(" ..hidden.js.. "), "hidden.js");
        assert_eq!(sanitize_filename(".."), "");
    }

    #[test]
    fn control_chars() {
        assert_eq!(sanitize_filename("img\x00\x07.png"), "img__.png");
    }

    #[test]
    fn keeps_percent_escapes() {
        assert_eq!(sanitize_filename("my%20logo.png"), "my%20logo.png");
    }

    #[test]
    fn limits_length_on_char_boundary() {
        let long = "é".repeat(200);
        let out = sanitize_filename(&long);
        assert!(out.len() <= 255);
        assert!(out.chars().all(|c| c == 'é'));
    }
}
