//! Incremental parsing of response header lines from curl's header callback.

/// Status and length of the most recent response seen on a handle.
///
/// With redirects followed, curl reports every hop's headers; a new status
/// line resets the state so only the final response counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    /// Status code from the last `HTTP/x y` line.
    pub status: Option<u32>,
    /// `Content-Length` of the last response, if present and numeric.
    pub content_length: Option<u64>,
    /// `Content-Type` of the last response.
    pub content_type: Option<String>,
}

impl ResponseHead {
    /// Feed one raw header line (as passed to curl's header callback).
    pub fn feed(&mut self, raw: &[u8]) {
        let Ok(line) = std::str::from_utf8(raw) else {
            return;
        };
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if line.starts_with("HTTP/") {
            *self = ResponseHead {
                status: line
                    .split_whitespace()
                    .nth(1)
                    .and_then(|code| code.parse().ok()),
                ..ResponseHead::default()
            };
            return;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                self.content_length = value.parse::<u64>().ok();
            } else if name.eq_ignore_ascii_case("content-type") {
                self.content_type = Some(value.to_string());
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Some(200)
    }
}
